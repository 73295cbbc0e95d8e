//! Error handling tests

use super::*;
use crate::error::Error;
use std::fs;
use std::io::{self, BufReader, Read};
use tempfile::TempDir;

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk went away"))
    }
}

#[test]
fn test_empty_directory_reports_no_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "not a csv").unwrap();

    let mut pipeline = memory_pipeline(temp_dir.path());
    match pipeline.run() {
        Err(Error::NoInputFiles { dir }) => assert_eq!(dir, temp_dir.path()),
        other => panic!("Expected NoInputFiles, got {:?}", other),
    }

    assert!(!temp_dir.path().join("consolidado_despesas.csv").exists());
    assert!(!temp_dir.path().join("consolidado_despesas.zip").exists());

    let log = log_text(pipeline);
    assert!(log.contains("] ERROR: No CSV file found\n"));
    assert!(!log.contains("finished successfully"));
}

#[test]
fn test_only_previous_output_counts_as_no_input() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("consolidado_despesas.csv"), "old output\n").unwrap();

    let mut pipeline = memory_pipeline(temp_dir.path());
    assert!(matches!(pipeline.run(), Err(Error::NoInputFiles { .. })));
}

#[test]
fn test_missing_work_dir_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let mut pipeline = memory_pipeline(&missing);
    let result = pipeline.run();
    assert!(matches!(result, Err(Error::DirectoryTraversal { .. })));

    let log = log_text(pipeline);
    assert!(log.contains("] FATAL ERROR: Directory traversal error:"));
}

#[test]
fn test_malformed_lines_do_not_abort_the_run() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("1T2024.csv"),
        input_file(&[
            "2024-03-31;316458;411;SINISTROS",
            "SINISTROS",
            "2024-03-31;316458;412;SINISTROS;0;abc",
            "2024-03-31;316458;413;SINISTROS;0;10",
        ]),
    )
    .unwrap();

    let mut pipeline = memory_pipeline(temp_dir.path());
    let summary = pipeline.run().unwrap();

    assert_eq!(summary.stats.total_lines, 4);
    assert_eq!(summary.stats.skipped_lines, 2);
    assert_eq!(summary.stats.matched_lines, 2);
    // Unparseable amounts read as zero
    assert_eq!(summary.stats.zero_values, 1);
    assert_eq!(summary.unique_records, 2);

    let log = log_text(pipeline);
    assert!(log.contains("Error processing line 2:"));
    assert!(log.contains("Error processing line 3:"));
}

#[test]
fn test_read_failure_aborts_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut pipeline = memory_pipeline(temp_dir.path());

    let result = pipeline.process_reader(BufReader::new(FailingReader), "1T2024.csv");
    match result {
        Err(Error::Io { message, .. }) => assert!(message.contains("1T2024.csv")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("1T2024.csv"),
        input_file(&["2024-03-31;316458;411;SINISTROS;0;1"]),
    )
    .unwrap();
    // A directory squatting on the output name blocks the write
    fs::create_dir(temp_dir.path().join("consolidado_despesas.csv")).unwrap();

    let mut pipeline = memory_pipeline(temp_dir.path());
    let result = pipeline.run();
    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(!temp_dir.path().join("consolidado_despesas.zip").exists());

    let log = log_text(pipeline);
    assert!(log.contains("] FATAL ERROR: I/O error:"));
}
