//! Timestamped run log
//!
//! Every event of a run is appended as `[YYYY-MM-DD HH:MM:SS] message` and
//! flushed immediately, so the file is complete even when the run aborts.
//! Write failures never abort a run; they are reported through `tracing`.

use crate::constants::LOG_TIMESTAMP_FORMAT;
use crate::error::{Error, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Append-only event log for one run
#[derive(Debug)]
pub struct RunLog<W: Write> {
    writer: W,
    failed: bool,
}

impl RunLog<File> {
    /// Create (or truncate) the log file at `path`
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("Failed to create log {}", path.display()), e))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> RunLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Append one timestamped line
    pub fn log(&mut self, message: impl AsRef<str>) {
        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        let result = writeln!(self.writer, "[{}] {}", timestamp, message.as_ref())
            .and_then(|_| self.writer.flush());

        if let Err(e) = result {
            // Report once; a broken log stays broken for the rest of the run
            if !self.failed {
                warn!("Failed to write run log: {}", e);
                self.failed = true;
            }
        }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(mut self) -> W {
        let _ = self.writer.flush();
        self.writer
    }
}
