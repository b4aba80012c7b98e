//! `un-utf8`: print the name of every code point in a UTF-8 file.
//!
//! Names go to standard output, one per line. Invalid, incomplete, overlong
//! and unknown sequences are reported on standard error and scanning carries
//! on. Set `RUST_LOG` (or pass `-v`) for tracing output on standard error.

use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};
use un_utf8::{DEFAULT_RECORDS_PATH, RunError, RunOptions, driver};

/// `un-utf8` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "un-utf8",
    about = "Validate a UTF-8 file and print the name of every code point in it",
    version
)]
struct Cli {
    /// File to scan.
    #[arg(value_name = "input-file")]
    input: PathBuf,
    /// Tab-separated `HEX<TAB>NAME` records file.
    #[arg(long, value_name = "path", default_value = DEFAULT_RECORDS_PATH)]
    records: PathBuf,
    /// Log table and scan statistics at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        RunOptions {
            input: cli.input,
            records: cli.records,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = RunOptions::from(cli);
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr();
    match driver::run(&options, &mut out, &mut err) {
        Ok(summary) => {
            tracing::info!(
                resolved = summary.resolved,
                diagnostics = summary.diagnostics(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e @ RunError::Input { .. }) => {
            eprintln!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
