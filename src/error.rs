//! Error handling for claims-expense consolidation runs.
//!
//! Every variant here is fatal to a run. Malformed data lines are not errors
//! at this level; they surface as [`crate::parser::ExtractError`] and are
//! skipped by the pipeline.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// No eligible input files in the working directory
    #[error("No CSV files found in {}", dir.display())]
    NoInputFiles { dir: PathBuf },

    /// Directory listing failed
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Zip archive could not be produced
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        source: zip::result::ZipError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a no-input error for the scanned directory
    pub fn no_input_files(dir: impl Into<PathBuf>) -> Self {
        Self::NoInputFiles { dir: dir.into() }
    }

    /// Create a directory traversal error with context
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create an archive error with context
    pub fn archive(message: impl Into<String>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
