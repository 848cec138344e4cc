//! # Ingest Error Types
//!
//! Failures of the driver itself. Bad lines are NOT here: those are
//! [`pantry_core::ParsingError`]s, logged and skipped per line.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Input files    │  │  Configuration  │  │       Output            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  FileNotFound   │  │  InvalidConfig  │  │  Output                 │ │
//! │  │  Io             │  │  ConfigLoad...  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  FileNotFound is reported and the run moves on to the next source.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    /// Input file does not exist.
    #[error("file {} not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read (permissions, bad UTF-8).
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration values are unusable.
    #[error("Invalid ingest configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<toml::de::Error> for IngestError {
    fn from(err: toml::de::Error) -> Self {
        IngestError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Output(err.to_string())
    }
}

/// Bare I/O errors only come from writing the report.
impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Output(err.to_string())
    }
}

impl IngestError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidConfig(_) | IngestError::ConfigLoadFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("nonexistent.txt"),
        };
        assert_eq!(err.to_string(), "file nonexistent.txt not found");
    }

    #[test]
    fn test_config_errors() {
        assert!(IngestError::InvalidConfig("no sources".into()).is_config_error());
        assert!(IngestError::ConfigLoadFailed("bad toml".into()).is_config_error());
        assert!(!IngestError::Output("broken pipe".into()).is_config_error());
        assert!(!IngestError::FileNotFound {
            path: PathBuf::from("x")
        }
        .is_config_error());
    }
}
