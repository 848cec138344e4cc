//! # pantry-ingest: Batch Ingestion Driver
//!
//! Reads inventory files line by line, hands each line to the matching
//! pantry-core parser, and reports what was accepted and rejected.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CliArgs ──► IngestConfig::load ──► run(config, stdout)                │
//! │                                        │                                │
//! │                 ┌──────────────────────┼──────────────────────┐        │
//! │                 ▼                      ▼                      ▼        │
//! │           1.txt (delivery)       2.txt (product)        ... 4.txt      │
//! │                 │                      │                               │
//! │                 ▼                      ▼                               │
//! │          read_file_lines ──► parse_record ──► Catalog                  │
//! │                                   │                                    │
//! │                                   └── ParsingError: print, warn, skip  │
//! │                                                                         │
//! │  Summary: per-kind counts + total price                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command line flags
//! - [`config`] - TOML + environment configuration
//! - [`reader`] - File to trimmed, non-blank lines
//! - [`runner`] - Per-source processing and the summary report
//! - [`error`] - Driver error types

pub mod cli;
pub mod config;
pub mod error;
pub mod reader;
pub mod runner;

pub use cli::CliArgs;
pub use config::{IngestConfig, OutputFormat, SourceFile};
pub use error::{IngestError, IngestResult};
pub use reader::read_file_lines;
pub use runner::{process_source, run, FileReport, RunReport};
