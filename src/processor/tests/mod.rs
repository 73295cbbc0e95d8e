//! Integration tests for the processor module
//!
//! Tests the complete pipeline against scratch directories holding small
//! ANS-style input files.

pub mod error_handling;

use crate::config::PipelineConfig;
use crate::processor::Pipeline;
use crate::run_log::RunLog;
use std::path::Path;

pub const HEADER_LINE: &str = "DATA;REG_ANS;CD_CONTA_CONTABIL;DESCRICAO;VL_SALDO_INICIAL;VL_SALDO_FINAL";

/// Pipeline rooted at `dir` that logs to memory and shows no progress bar
pub fn memory_pipeline(dir: &Path) -> Pipeline<Vec<u8>> {
    let config = PipelineConfig::new(dir).without_progress();
    Pipeline::with_log(config, RunLog::new(Vec::new()))
}

/// Log contents of a finished pipeline
pub fn log_text(pipeline: Pipeline<Vec<u8>>) -> String {
    String::from_utf8(pipeline.into_log()).unwrap()
}

/// Build file content from a header and data lines
pub fn input_file(lines: &[&str]) -> String {
    let mut content = String::from(HEADER_LINE);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}
