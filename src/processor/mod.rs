//! Consolidation pipeline driver.
//!
//! Orchestrates one run: file discovery, per-file keyword filtering and
//! record extraction, consolidation, CSV output, zip packaging and the final
//! report. All mutable run state lives in [`Pipeline`].

pub mod archive;
pub mod discovery;
pub mod report;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use report::RunSummary;

use self::archive::archive_single_file;
use self::discovery::discover_input_files;
use self::writer::write_consolidated_csv;

use crate::config::PipelineConfig;
use crate::consolidation::{ConsolidateOutcome, ConsolidationStore, FileStats, RunStatistics};
use crate::constants::RUN_START_FORMAT;
use crate::error::{Error, Result};
use crate::models::{ExpenseRecord, FilePeriod};
use crate::parser::{extract_record, matches_claims_keywords};
use crate::run_log::RunLog;

use chrono::Local;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Single-run consolidation pipeline
pub struct Pipeline<W: Write> {
    config: PipelineConfig,
    store: ConsolidationStore,
    stats: RunStatistics,
    log: RunLog<W>,
    progress: ProgressBar,
}

impl Pipeline<File> {
    /// Create a pipeline logging to the run log file of `config`
    pub fn create(config: PipelineConfig) -> Result<Self> {
        let log = RunLog::create(&config.run_log_path())?;
        Ok(Self::with_log(config, log))
    }
}

impl<W: Write> Pipeline<W> {
    pub fn with_log(config: PipelineConfig, log: RunLog<W>) -> Self {
        Self {
            config,
            store: ConsolidationStore::new(),
            stats: RunStatistics::new(),
            log,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn store(&self) -> &ConsolidationStore {
        &self.store
    }

    /// Run the whole pipeline; fatal errors are written to the log before
    /// being returned
    pub fn run(&mut self) -> Result<RunSummary> {
        self.log.log("=== Processing started ===");
        self.log.log(format!(
            "Date/Time: {}",
            Local::now().format(RUN_START_FORMAT)
        ));

        let result = self.run_stages();

        match &result {
            Ok(_) => self.log.log("=== Processing finished successfully ==="),
            Err(Error::NoInputFiles { .. }) => {
                self.log.log("ERROR: No CSV file found");
            }
            Err(e) => self.log.log(format!("FATAL ERROR: {}", e)),
        }

        result
    }

    fn run_stages(&mut self) -> Result<RunSummary> {
        let work_dir = self.config.work_dir().to_path_buf();
        let files = discover_input_files(&work_dir)?;

        if files.is_empty() {
            return Err(Error::no_input_files(work_dir));
        }

        println!(
            "{} {}",
            "Files found:".bright_cyan(),
            files.len().to_string().bright_white().bold()
        );
        self.log.log(format!("CSV files found: {}", files.len()));
        let order: Vec<Cow<'_, str>> = files
            .iter()
            .map(|p| p.file_name().unwrap_or_default().to_string_lossy())
            .collect();
        self.log.log(format!("Processing order: {}", order.join(", ")));

        self.progress = self.create_progress_bar(files.len() as u64);
        for path in &files {
            let file_stats = self.process_file(path)?;
            self.stats.absorb_file(&file_stats);
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        let unique_records = self.store.len();
        info!("Consolidation complete: {}", self.stats.summary());

        println!("\n{}", "Generating consolidated file...".bright_yellow());
        let csv_path = self.config.output_csv_path();
        let records = std::mem::take(&mut self.store).into_records();
        let written = write_consolidated_csv(&csv_path, records)?;
        self.log.log(format!("Consolidated CSV written: {} records", written));

        println!("{}", "Compressing result...".bright_yellow());
        let zip_path = self.config.output_zip_path();
        archive_single_file(&csv_path, &zip_path)?;
        self.log.log(format!("Archive written: {}", zip_path.display()));

        let summary = RunSummary {
            stats: self.stats.clone(),
            unique_records,
            output_files: vec![csv_path, zip_path, self.config.run_log_path()],
        };
        summary.print();
        summary.log_to(&mut self.log);

        Ok(summary)
    }

    /// Process one input file from disk
    pub fn process_file(&mut self, path: &Path) -> Result<FileStats> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        self.process_reader(BufReader::new(file), &file_name)
    }

    /// Process the lines of one input file named `file_name`
    ///
    /// The first line is a header and is skipped whatever it contains. Lines
    /// that match the keyword filter but cannot be extracted are logged and
    /// skipped; read errors abort with [`Error::Io`].
    pub fn process_reader<R: BufRead>(
        &mut self,
        mut reader: R,
        file_name: &str,
    ) -> Result<FileStats> {
        let period = FilePeriod::from_file_name(file_name);

        self.progress.suspend(|| {
            println!("\n{} {}", "Processing:".bright_green(), file_name);
            println!("  Quarter: {}", period.quarter);
            println!("  Year: {}", period.year);
        });
        self.log.log(format!("Processing file: {}", file_name));
        self.log.log(format!("  Period identified: {}", period));

        let mut file_stats = FileStats::new();
        let mut buffer = Vec::new();
        let mut line_number = 0usize;

        while read_line_bytes(&mut reader, &mut buffer)
            .map_err(|e| Error::io(format!("Failed to read {}", file_name), e))?
        {
            line_number += 1;
            if line_number == 1 {
                continue;
            }

            let line = String::from_utf8_lossy(&buffer);
            if matches!(line, Cow::Owned(_)) {
                file_stats.lossy_lines += 1;
            }
            file_stats.data_lines += 1;

            if !matches_claims_keywords(&line) {
                continue;
            }

            match extract_record(&line, &period) {
                Ok(record) => {
                    self.consolidate(record);
                    file_stats.matched_lines += 1;
                }
                Err(e) => {
                    file_stats.skipped_lines += 1;
                    debug!("{} line {}: {}", file_name, line_number, e);
                    let message = format!("  Error processing line {}: {}", line_number, e);
                    self.log.log(message);
                }
            }
        }

        if file_stats.lossy_lines > 0 {
            warn!(
                "{}: {} lines were not valid UTF-8 and were decoded lossily",
                file_name, file_stats.lossy_lines
            );
            self.log.log(format!(
                "  Invalid UTF-8 replaced in {} lines",
                file_stats.lossy_lines
            ));
        }

        self.progress.suspend(|| {
            println!(
                "  Expense records found: {}",
                file_stats.matched_lines.to_string().bright_white().bold()
            );
        });
        self.log.log(format!("  Total lines processed: {}", file_stats.data_lines));
        self.log.log(format!("  Expenses extracted: {}", file_stats.matched_lines));

        Ok(file_stats)
    }

    fn consolidate(&mut self, record: ExpenseRecord) {
        if record.amount < 0.0 {
            self.log.log(format!(
                "  Negative value: REG_ANS {} = R$ {}",
                record.regulatory_id, record.amount
            ));
        }

        if let ConsolidateOutcome::Replaced(key) = self.store.consolidate(record, &mut self.stats) {
            self.log.log(format!("  Duplicate replaced: {}", key));
        }
    }

    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} files")
        {
            progress_bar.set_style(style.progress_chars("#>-"));
        }
        progress_bar
    }

    /// Flush and hand back the log writer
    pub fn into_log(self) -> W {
        self.log.into_inner()
    }
}

/// Read one line into `buffer`, without its terminator
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Returns `false` at end of
/// input.
fn read_line_bytes<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<bool> {
    buffer.clear();
    let mut read_any = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                let terminator = available[end];
                buffer.extend_from_slice(&available[..end]);
                reader.consume(end + 1);

                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
            None => {
                let len = available.len();
                buffer.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }
}
