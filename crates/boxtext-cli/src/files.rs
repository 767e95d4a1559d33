//! File plumbing around the boxing transformation.

use std::{fs, path::Path};

use tracing::debug;

use crate::error::CliError;

/// Reads the whole input file.
///
/// # Errors
///
/// [`CliError::InputNotFound`] if `path` is not an existing regular file,
/// [`CliError::Read`] if reading it fails.
pub fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    if !path.is_file() {
        return Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(bytes)
}

/// Checks that `path` can be created or truncated.
///
/// The parent directory must exist, and neither the path itself nor an
/// existing file at it may be a directory or read-only.
///
/// # Errors
///
/// [`CliError::OutputPathInvalid`] naming the first check that failed.
pub fn validate_output(path: &Path) -> Result<(), CliError> {
    let invalid = |reason| CliError::OutputPathInvalid {
        path: path.to_path_buf(),
        reason,
    };

    if path.is_dir() {
        return Err(invalid("it is a directory"));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(invalid("its parent directory does not exist"));
    }

    if let Ok(meta) = fs::metadata(path) {
        if meta.permissions().readonly() {
            return Err(invalid("the file is read-only"));
        }
    }

    Ok(())
}

/// Writes `bytes` to `path` verbatim, replacing any previous content.
///
/// # Errors
///
/// [`CliError::Write`] if the file cannot be written.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    fs::write(path, bytes).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote output");
    Ok(())
}
