//! # Ingest Configuration
//!
//! Which files to read, what kind of record each one holds, and how to
//! print the results.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, see crate::cli)              │
//! │     --format json   deliveries=in/1.txt                                │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     PANTRY_DATA_DIR=./data                                             │
//! │     PANTRY_OUTPUT_FORMAT=json                                          │
//! │     PANTRY_SUMMARY=false                                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/pantry/ingest.toml (Linux)                               │
//! │     ~/Library/Application Support/com.pantry.pantry/ingest.toml (macOS)│
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     1.txt deliveries, 2.txt products, 3.txt foods, 4.txt drinks        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # ingest.toml
//! [input]
//! data_dir = "./data"
//!
//! [[sources]]
//! path = "deliveries.txt"
//! kind = "delivery"
//!
//! [[sources]]
//! path = "products.txt"
//! kind = "product"
//!
//! [output]
//! format = "text"  # text | json
//! summary = true
//! ```

use std::path::{Path, PathBuf};

use pantry_core::RecordKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{IngestError, IngestResult};

// =============================================================================
// Output Format
// =============================================================================

/// How parsed records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable rendering, one record per line.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(IngestError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Source Files
// =============================================================================

/// One input file and the record kind every line in it should be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: RecordKind,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, kind: RecordKind) -> Self {
        SourceFile {
            path: path.into(),
            kind,
        }
    }

    /// Relative paths are taken relative to `data_dir`.
    pub fn resolve(&self, data_dir: &Path) -> PathBuf {
        if self.path.is_absolute() || data_dir == Path::new(".") {
            self.path.clone()
        } else {
            data_dir.join(&self.path)
        }
    }
}

fn default_sources() -> Vec<SourceFile> {
    vec![
        SourceFile::new("1.txt", RecordKind::Delivery),
        SourceFile::new("2.txt", RecordKind::Product),
        SourceFile::new("3.txt", RecordKind::Food),
        SourceFile::new("4.txt", RecordKind::Drink),
    ]
}

// =============================================================================
// Settings
// =============================================================================

/// Where input files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings {
            data_dir: default_data_dir(),
        }
    }
}

/// Output behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the catalog summary after all sources.
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            summary: true,
        }
    }
}

// =============================================================================
// Main Ingest Configuration
// =============================================================================

/// Complete ingest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default = "default_sources")]
    pub sources: Vec<SourceFile>,

    #[serde(default)]
    pub output: OutputSettings,
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            input: InputSettings::default(),
            sources: default_sources(),
            output: OutputSettings::default(),
        }
    }
}

impl IngestConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (ingest.toml)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the default path may be absent.
    pub fn load(config_path: Option<PathBuf>) -> IngestResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> IngestResult<Self> {
        info!(?path, "Loading ingest config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| IngestError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> IngestResult<()> {
        if self.sources.is_empty() {
            return Err(IngestError::InvalidConfig(
                "at least one source file is required".into(),
            ));
        }

        if let Some(source) = self.sources.iter().find(|s| s.path.as_os_str().is_empty()) {
            return Err(IngestError::InvalidConfig(format!(
                "{} source has an empty path",
                source.kind
            )));
        }

        Ok(())
    }

    /// Applies `PANTRY_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key/value lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("PANTRY_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.input.data_dir = PathBuf::from(dir);
        }

        if let Some(format) = lookup("PANTRY_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }

        if let Some(summary) = lookup("PANTRY_SUMMARY") {
            match summary.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.output.summary = true,
                "0" | "false" | "no" | "off" => self.output.summary = false,
                _ => warn!(summary = %summary, "Unknown summary flag in environment"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pantry", "pantry")
            .map(|dirs| dirs.config_dir().join("ingest.toml"))
    }
}
