//! Utility functions for error handling
//!
//! File access helpers that translate `std::io` failures into the crate's
//! error taxonomy.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HrError, Result};

/// Open the dataset artifact for reading
///
/// A missing file maps to [`HrError::DatasetMissing`] so callers can tell
/// "generate first" apart from genuine I/O failures.
///
/// # Arguments
/// * `path` - Path to the dataset artifact
pub fn open_dataset_file(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(HrError::DatasetMissing(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(HrError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Dataset path is not a file: {}", path.display()),
        )));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        // Deleted between the existence check and the open
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(HrError::DatasetMissing(path.to_path_buf()))
        }
        Err(e) => Err(HrError::Io(e)),
    }
}

/// Read a file to string, mapping a missing file to an I/O error with the path
pub fn read_to_string_with_path(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        HrError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {}: {e}", path.display()),
        ))
    })
}

/// Create a directory (and parents) if it does not exist yet
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(HrError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a directory: {}", path.display()),
        )));
    }
    fs::create_dir_all(path)?;
    Ok(())
}
