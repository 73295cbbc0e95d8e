//! Run configuration.
//!
//! The tool has no user-facing settings: the working directory and the
//! output file names are fixed. This structure exists so the pipeline can be
//! pointed at another directory (tests do this) without touching the
//! process working directory.

use crate::constants::{OUTPUT_CSV_FILE, OUTPUT_ZIP_FILE, RUN_LOG_FILE};
use std::path::{Path, PathBuf};

/// Configuration for one consolidation run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory scanned for input files and receiving all outputs
    pub work_dir: PathBuf,

    /// Show the per-file progress bar
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            show_progress: true,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration rooted at `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the consolidated CSV
    pub fn output_csv_path(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_CSV_FILE)
    }

    /// Path of the zip archive
    pub fn output_zip_path(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_ZIP_FILE)
    }

    /// Path of the run log
    pub fn run_log_path(&self) -> PathBuf {
        self.work_dir.join(RUN_LOG_FILE)
    }
}
