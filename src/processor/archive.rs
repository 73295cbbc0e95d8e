//! Zip packaging of the consolidated CSV

use crate::constants::ARCHIVE_CHUNK_SIZE;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Write `archive_path` as a zip holding `source` as its only entry
///
/// The entry is named after the base name of `source` and filled by a
/// streaming copy in 8 KiB chunks. Returns the number of bytes archived.
pub fn archive_single_file(source: &Path, archive_path: &Path) -> Result<u64> {
    let entry_name = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            Error::io(
                format!("No file name in {}", source.display()),
                std::io::Error::from(std::io::ErrorKind::InvalidInput),
            )
        })?;

    let archive_file = File::create(archive_path)
        .map_err(|e| Error::io(format!("Failed to create {}", archive_path.display()), e))?;
    let mut zip = ZipWriter::new(archive_file);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry_name.as_str(), options)
        .map_err(|e| Error::archive(format!("Failed to start entry {}", entry_name), e))?;

    let mut input = File::open(source)
        .map_err(|e| Error::io(format!("Failed to open {}", source.display()), e))?;
    let mut buffer = [0u8; ARCHIVE_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let read = input
            .read(&mut buffer)
            .map_err(|e| Error::io(format!("Failed to read {}", source.display()), e))?;
        if read == 0 {
            break;
        }
        zip.write_all(&buffer[..read])
            .map_err(|e| Error::io(format!("Failed to write {}", archive_path.display()), e))?;
        total += read as u64;
    }

    zip.finish()
        .map_err(|e| Error::archive(format!("Failed to finish {}", archive_path.display()), e))?;

    debug!(
        "Archived {} ({} bytes) into {}",
        entry_name,
        total,
        archive_path.display()
    );
    Ok(total)
}
