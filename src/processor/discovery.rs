//! Input file discovery
//!
//! Candidate inputs are the regular files directly inside the working
//! directory whose name ends in `.csv` (any case), except the consolidated
//! output itself. Files are returned in directory-listing order, which
//! depends on the filesystem.

use crate::constants::{INPUT_EXTENSION, OUTPUT_CSV_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// List the input files of `dir`
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    debug!("Searching for CSV files in: {}", dir.display());

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to list {}", dir.display()), e)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if is_input_file_name(&file_name) {
            files.push(entry.into_path());
        }
    }

    debug!("Found {} CSV files", files.len());
    Ok(files)
}

/// True for `.csv` names (case-insensitive) other than the output file
pub fn is_input_file_name(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(INPUT_EXTENSION) && file_name != OUTPUT_CSV_FILE
}
