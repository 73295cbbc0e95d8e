//! Run and per-file statistics for the consolidation pipeline
//!
//! Counters only ever grow during a run and are read once at the end for the
//! summary report.

/// Counters accumulated over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Input files processed
    pub files_processed: usize,
    /// Data lines read (header lines excluded)
    pub total_lines: usize,
    /// Keyword lines that produced a record
    pub matched_lines: usize,
    /// Keyword lines skipped because they could not be extracted
    pub skipped_lines: usize,
    /// Records whose key was already present in the store
    pub duplicates: usize,
    /// Records with an amount of exactly zero
    pub zero_values: usize,
    /// Records with a negative amount
    pub negative_values: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an amount towards the zero/negative counters
    pub fn record_amount(&mut self, amount: f64) {
        if amount == 0.0 {
            self.zero_values += 1;
        }
        if amount < 0.0 {
            self.negative_values += 1;
        }
    }

    /// Fold a finished file into the run totals
    pub fn absorb_file(&mut self, file: &FileStats) {
        self.files_processed += 1;
        self.total_lines += file.data_lines;
        self.matched_lines += file.matched_lines;
        self.skipped_lines += file.skipped_lines;
    }

    /// Percentage of data lines that produced a record
    pub fn match_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.matched_lines as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// One-line summary for diagnostics
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Lines: {} | Matched: {} ({:.1}%) | Skipped: {} | Duplicates: {} | Zero: {} | Negative: {}",
            self.files_processed,
            self.total_lines,
            self.matched_lines,
            self.match_rate(),
            self.skipped_lines,
            self.duplicates,
            self.zero_values,
            self.negative_values
        )
    }
}

/// Counters for a single input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Data lines read (header excluded)
    pub data_lines: usize,
    /// Keyword lines that produced a record
    pub matched_lines: usize,
    /// Keyword lines that could not be extracted
    pub skipped_lines: usize,
    /// Lines containing invalid UTF-8 that were decoded lossily
    pub lossy_lines: usize,
}

impl FileStats {
    pub fn new() -> Self {
        Self::default()
    }
}
