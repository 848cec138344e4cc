//! # Command Line
//!
//! ## Usage
//! ```bash
//! # Default sources (1.txt .. 4.txt in the current directory)
//! pantry-ingest
//!
//! # Different input directory, JSON lines
//! pantry-ingest --data-dir ./inbox --format json
//!
//! # Explicit sources replace the configured ones
//! pantry-ingest deliveries=in/1.txt products=in/2.txt
//! ```
//!
//! Flags are applied on top of the loaded [`IngestConfig`], so they win
//! over the config file and the environment.

use std::path::PathBuf;

use pantry_core::RecordKind;

use crate::config::{IngestConfig, OutputFormat, SourceFile};
use crate::error::{IngestError, IngestResult};

pub const USAGE: &str = "\
Pantry Ingest

Usage: pantry-ingest [OPTIONS] [KIND=PATH]...

Arguments:
  [KIND=PATH]...         Source file and record kind, e.g. products=2.txt
                         (kinds: product, delivery, food, drink)

Options:
  -c, --config <PATH>    Config file (default: platform config dir/ingest.toml)
  -d, --data-dir <DIR>   Directory relative source paths are read from
  -f, --format <FORMAT>  Output format: text | json
      --no-summary       Do not print the summary report
  -h, --help             Show this help message";

/// Parsed command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_summary: bool,
    pub sources: Vec<SourceFile>,
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> IngestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    cli.config_path = Some(PathBuf::from(value_for(&args, i)?));
                    i += 1;
                }
                "--data-dir" | "-d" => {
                    cli.data_dir = Some(PathBuf::from(value_for(&args, i)?));
                    i += 1;
                }
                "--format" | "-f" => {
                    cli.format = Some(value_for(&args, i)?.parse()?);
                    i += 1;
                }
                "--no-summary" => cli.no_summary = true,
                "--help" | "-h" => cli.help = true,
                flag if flag.starts_with('-') => {
                    return Err(IngestError::InvalidConfig(format!(
                        "unknown option '{}'",
                        flag
                    )));
                }
                pair => cli.sources.push(parse_source(pair)?),
            }
            i += 1;
        }

        Ok(cli)
    }

    /// Overlays the flags onto `config`.
    pub fn apply(self, config: &mut IngestConfig) {
        if let Some(dir) = self.data_dir {
            config.input.data_dir = dir;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if self.no_summary {
            config.output.summary = false;
        }
        if !self.sources.is_empty() {
            config.sources = self.sources;
        }
    }
}

fn value_for(args: &[String], i: usize) -> IngestResult<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| IngestError::InvalidConfig(format!("{} requires a value", args[i])))
}

fn parse_source(pair: &str) -> IngestResult<SourceFile> {
    let (kind, path) = pair.split_once('=').ok_or_else(|| {
        IngestError::InvalidConfig(format!("expected KIND=PATH, got '{}'", pair))
    })?;

    let kind: RecordKind = kind
        .parse()
        .map_err(|e| IngestError::InvalidConfig(format!("{}", e)))?;

    Ok(SourceFile::new(path, kind))
}
