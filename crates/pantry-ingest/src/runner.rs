//! # Batch Runner
//!
//! Feeds every configured source through the pantry-core parsers.
//!
//! ## Run Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each source in config.sources                                      │
//! │       │                                                                 │
//! │       ├── read_file_lines ── FileNotFound / Io ──► "Error: ..." , next  │
//! │       │                                                                 │
//! │       └── for each line                                                 │
//! │              │                                                          │
//! │              ├── parse_record OK  ──► render record                     │
//! │              └── ParsingError     ──► "Error in <path>: ...", next line │
//! │                                                                         │
//! │  summary (optional)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Only a failure to write the output stops the run.

use std::io::Write;
use std::path::{Path, PathBuf};

use pantry_core::{parse_record, Catalog, ParsingError, Record, RecordKind};
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::config::{IngestConfig, OutputFormat, SourceFile};
use crate::error::{IngestError, IngestResult};
use crate::reader::read_file_lines;

/// Outcome of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub kind: RecordKind,
    pub accepted: usize,
    pub rejected: usize,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub catalog: Catalog,
    pub files: Vec<FileReport>,
    /// Sources that did not exist.
    pub missing: Vec<PathBuf>,
    /// Sources that existed but could not be read.
    pub unreadable: Vec<PathBuf>,
}

impl RunReport {
    pub fn rejected_lines(&self) -> usize {
        self.files.iter().map(|f| f.rejected).sum()
    }
}

/// Processes every source in `config` into one fresh catalog.
pub fn run<W: Write>(config: &IngestConfig, out: &mut W) -> IngestResult<RunReport> {
    let format = config.output.format;
    let mut report = RunReport::default();

    for source in &config.sources {
        match process_source(&mut report.catalog, source, &config.input.data_dir, format, out) {
            Ok(file) => report.files.push(file),
            Err(err @ (IngestError::FileNotFound { .. } | IngestError::Io { .. })) => {
                error!(error = %err, "Skipping source");
                write_file_error(out, format, &err)?;
                match err {
                    IngestError::FileNotFound { path } => report.missing.push(path),
                    IngestError::Io { path, .. } => report.unreadable.push(path),
                    _ => {}
                }
            }
            Err(err) => return Err(err),
        }
    }

    if config.output.summary {
        write_summary(out, format, &report.catalog)?;
    }

    info!(
        files = report.files.len(),
        missing = report.missing.len(),
        unreadable = report.unreadable.len(),
        records = report.catalog.len(),
        rejected = report.rejected_lines(),
        "Ingest finished"
    );

    Ok(report)
}

/// Parses every line of one source into `catalog`.
///
/// Rejected lines are written and logged, then skipped. Returns
/// [`IngestError::FileNotFound`] if the file is absent.
pub fn process_source<W: Write>(
    catalog: &mut Catalog,
    source: &SourceFile,
    data_dir: &Path,
    format: OutputFormat,
    out: &mut W,
) -> IngestResult<FileReport> {
    let path = source.resolve(data_dir);
    let lines = read_file_lines(&path)?;

    info!(path = %path.display(), kind = %source.kind, lines = lines.len(), "Processing source");

    let mut report = FileReport {
        path,
        kind: source.kind,
        accepted: 0,
        rejected: 0,
    };

    if format == OutputFormat::Text {
        writeln!(
            out,
            "=== {} from {} ===",
            source.kind.plural(),
            report.path.display()
        )?;
    }

    for (index, line) in lines.iter().enumerate() {
        let line_no = index + 1;
        match parse_record(catalog, source.kind, line) {
            Ok(record) => {
                debug!(line_no, kind = %source.kind, "Parsed record");
                write_record(out, format, &record)?;
                report.accepted += 1;
            }
            Err(err) => {
                warn!(
                    path = %report.path.display(),
                    line_no,
                    error = %err.message(),
                    "Rejected line"
                );
                write_line_error(out, format, &report.path, &err)?;
                report.rejected += 1;
            }
        }
    }

    if format == OutputFormat::Text {
        writeln!(out)?;
    }

    Ok(report)
}

// =============================================================================
// Rendering
// =============================================================================

fn write_record<W: Write>(out: &mut W, format: OutputFormat, record: &Record) -> IngestResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", record)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(record)?)?,
    }
    Ok(())
}

fn write_line_error<W: Write>(
    out: &mut W,
    format: OutputFormat,
    path: &Path,
    err: &ParsingError,
) -> IngestResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Error in {}: {}", path.display(), err)?,
        OutputFormat::Json => {
            let value = json!({
                "error": err.message(),
                "line": err.line(),
                "path": path.display().to_string(),
            });
            writeln!(out, "{}", value)?
        }
    }
    Ok(())
}

fn write_file_error<W: Write>(out: &mut W, format: OutputFormat, err: &IngestError) -> IngestResult<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Error: {}\n", err)?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "error": err.to_string() }))?,
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, format: OutputFormat, catalog: &Catalog) -> IngestResult<()> {
    let summary = catalog.summary();
    match format {
        OutputFormat::Text => writeln!(out, "=== Summary ===\n{}", summary)?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "summary": summary }))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn config_for(dir: &Path, sources: Vec<SourceFile>) -> IngestConfig {
        let mut config = IngestConfig::default();
        config.input.data_dir = dir.to_path_buf();
        config.sources = sources;
        config
    }

    #[test]
    fn test_process_source_renders_records_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "deliveries.txt",
            "2023.12.25 \"Milk\" 3\n2023.12.25 \"Milk\" many\n",
        );

        let mut catalog = Catalog::new();
        let mut out = Vec::new();
        let report = process_source(
            &mut catalog,
            &SourceFile::new("deliveries.txt", RecordKind::Delivery),
            dir.path(),
            OutputFormat::Text,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== Deliveries from "));
        assert!(text.contains("Delivery: Milk x3 on 2023.12.25\n"));
        assert!(text.contains("Error in "));
        assert!(text.contains("Line: 2023.12.25 \"Milk\" many\n"));
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(catalog.deliveries().len(), 1);
    }

    #[test]
    fn test_missing_file_does_not_abort_run() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "2.txt", "\"Apple\" 1.99 \"Fresh Farms\"\n");

        let config = config_for(
            dir.path(),
            vec![
                SourceFile::new("nonexistent.txt", RecordKind::Delivery),
                SourceFile::new("2.txt", RecordKind::Product),
            ],
        );

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Error: file "));
        assert!(text.contains("nonexistent.txt not found\n"));
        assert!(text.contains("Apple ($1.99), provider: Fresh Farms\n"));
        assert_eq!(report.missing, vec![dir.path().join("nonexistent.txt")]);
        assert_eq!(report.catalog.products().len(), 1);
    }

    #[test]
    fn test_unreadable_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("3.txt"), [0xff, 0xfe, b'\n']).unwrap();
        write(dir.path(), "2.txt", "\"Apple\" 1.99 \"Fresh Farms\"\n");

        let config = config_for(
            dir.path(),
            vec![
                SourceFile::new("3.txt", RecordKind::Food),
                SourceFile::new("2.txt", RecordKind::Product),
            ],
        );

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(report.unreadable, vec![dir.path().join("3.txt")]);
        assert!(report.missing.is_empty());
        assert!(text.contains("Error: failed to read "));
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.catalog.products().len(), 1);
    }

    #[test]
    fn test_summary_counts_all_kinds() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "1.txt", "2023.12.25 \"Milk\" 3\n");
        write(dir.path(), "2.txt", "\"Apple\" 1.99 \"Fresh Farms\"\n\"Apple\" abc \"Fresh Farms\"\n");
        write(dir.path(), "3.txt", "\"Cheese\" 2023.01.01 2023.12.31 5.99\n");
        write(dir.path(), "4.txt", "\"Cola\" 2023.01.01 2023.12.31 2.49 1.5\n");

        let mut config = IngestConfig::default();
        config.input.data_dir = dir.path().to_path_buf();

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with(
            "=== Summary ===\nProducts: 1\nDeliveries: 1\nFoods: 1\nDrinks: 1\nAll products: 3\nTotal price: $10.47\n"
        ));
        assert_eq!(report.rejected_lines(), 1);
        assert_eq!(report.files.len(), 4);
    }

    #[test]
    fn test_json_output() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "4.txt", "\"Cola\" 2023.01.01 2023.12.31 2.49 1.5\n\"Cola\" x\n");

        let mut config = config_for(dir.path(), vec![SourceFile::new("4.txt", RecordKind::Drink)]);
        config.output.format = OutputFormat::Json;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["kind"], "drink");
        assert_eq!(values[0]["volume"], "1.5");
        assert_eq!(values[1]["line"], "\"Cola\" x");
        assert_eq!(values[2]["summary"]["drinks"], 1);
    }

    #[test]
    fn test_summary_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "1.txt", "2023.12.25 \"Milk\" 3\n");

        let mut config = config_for(dir.path(), vec![SourceFile::new("1.txt", RecordKind::Delivery)]);
        config.output.summary = false;

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("=== Summary ==="));
    }
}
