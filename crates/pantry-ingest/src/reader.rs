//! Line reading for input files.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{IngestError, IngestResult};

/// Reads a UTF-8 file and returns its non-blank lines, trimmed.
///
/// A missing file is reported as [`IngestError::FileNotFound`] so the
/// caller can tell it apart from other read failures.
pub fn read_file_lines(path: &Path) -> IngestResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
