//! End-of-run statistics report
//!
//! The same figures go to the console (colored) and to the run log.

use crate::consolidation::RunStatistics;
use crate::run_log::RunLog;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

/// How data inconsistencies were handled; printed with every report
pub const INCONSISTENCY_POLICIES: &[&str] = &[
    "Duplicates: kept the record with the largest absolute value",
    "Zero values: kept (may be legitimate)",
    "Negative values: kept (may be reversals)",
    "Encoding: UTF-8 to support accented characters",
];

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub stats: RunStatistics,
    /// Records left in the store after consolidation
    pub unique_records: usize,
    /// Files produced by the run, in creation order
    pub output_files: Vec<PathBuf>,
}

impl RunSummary {
    /// Statistic lines shared by the console and the log
    pub fn stat_lines(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Files processed", self.stats.files_processed),
            ("Total lines processed", self.stats.total_lines),
            ("Lines with claims expenses", self.stats.matched_lines),
            ("Lines skipped (malformed)", self.stats.skipped_lines),
            ("Unique consolidated records", self.unique_records),
            ("Duplicates found", self.stats.duplicates),
            ("Zero values", self.stats.zero_values),
            ("Negative values", self.stats.negative_values),
        ]
    }

    /// Print statistics and policies to stdout
    pub fn print(&self) {
        println!("\n{}", "==============================================".bright_blue());
        println!("  {}", "PROCESSING STATISTICS".bright_green().bold());
        println!("{}", "==============================================".bright_blue());
        for (label, value) in self.stat_lines() {
            println!("{}: {}", label.bright_cyan(), value.to_string().bright_white().bold());
        }

        println!("\n{}", "==============================================".bright_blue());
        println!("  {}", "INCONSISTENCY HANDLING".bright_green().bold());
        println!("{}", "==============================================".bright_blue());
        for policy in INCONSISTENCY_POLICIES {
            println!("{} {}", "✓".bright_green(), policy);
        }

        if !self.output_files.is_empty() {
            println!("\n{}", "Generated files:".bright_yellow());
            for path in &self.output_files {
                println!("  - {}", path.display());
            }
        }
    }

    /// Write statistics and policies to the run log
    pub fn log_to<W: Write>(&self, log: &mut RunLog<W>) {
        log.log("=== STATISTICS ===");
        for (label, value) in self.stat_lines() {
            log.log(format!("{}: {}", label, value));
        }
        for policy in INCONSISTENCY_POLICIES {
            log.log(format!("Policy - {}", policy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            stats: RunStatistics {
                files_processed: 2,
                total_lines: 40,
                matched_lines: 12,
                skipped_lines: 1,
                duplicates: 3,
                zero_values: 2,
                negative_values: 1,
            },
            unique_records: 9,
            output_files: vec![PathBuf::from("consolidado_despesas.csv")],
        }
    }

    #[test]
    fn test_stat_lines_cover_all_counters() {
        let lines = summary().stat_lines();
        let lookup = |label: &str| lines.iter().find(|(l, _)| *l == label).unwrap().1;

        assert_eq!(lookup("Total lines processed"), 40);
        assert_eq!(lookup("Lines with claims expenses"), 12);
        assert_eq!(lookup("Unique consolidated records"), 9);
        assert_eq!(lookup("Duplicates found"), 3);
        assert_eq!(lookup("Zero values"), 2);
        assert_eq!(lookup("Negative values"), 1);
    }

    #[test]
    fn test_log_to_writes_stats_and_policies() {
        let mut log = RunLog::new(Vec::new());
        summary().log_to(&mut log);

        let content = String::from_utf8(log.into_inner()).unwrap();
        assert!(content.contains("] === STATISTICS ===\n"));
        assert!(content.contains("] Total lines processed: 40\n"));
        assert!(content.contains("] Duplicates found: 3\n"));
        for policy in INCONSISTENCY_POLICIES {
            assert!(content.contains(policy));
        }
        assert_eq!(content.lines().count(), 1 + 8 + INCONSISTENCY_POLICIES.len());
    }
}
