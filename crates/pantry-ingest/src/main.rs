//! # Pantry Ingest
//!
//! Parses the inventory files named by the configuration and prints every
//! record, every rejected line, and a summary.
//!
//! ## Usage
//! ```bash
//! # 1.txt deliveries, 2.txt products, 3.txt foods, 4.txt drinks
//! cargo run -p pantry-ingest
//!
//! # JSON lines, debug logging
//! RUST_LOG=debug cargo run -p pantry-ingest -- --format json
//! ```
//!
//! Exits with 1 only when the configuration is unusable. Bad lines and
//! missing files are reported and skipped.

use std::io::{self, Write};
use std::process::ExitCode;

use pantry_ingest::cli::USAGE;
use pantry_ingest::{run, CliArgs, IngestConfig, IngestResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Ingest failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> IngestResult<()> {
    let cli = CliArgs::parse(std::env::args().skip(1))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = IngestConfig::load(cli.config_path.clone())?;
    cli.apply(&mut config);
    config.validate()?;

    info!(
        sources = config.sources.len(),
        data_dir = %config.input.data_dir.display(),
        format = %config.output.format,
        "Starting ingest"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every parsed record
/// - `RUST_LOG=pantry_ingest=warn` - Only rejected lines and failures
/// - Default: INFO, DEBUG for pantry crates
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pantry_ingest=debug,pantry_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
