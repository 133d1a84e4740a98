//! berray-doc CLI entry point

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use berray_doc::{run_generate, Cli, DocConfig};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match DocConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    init_tracing(&config.logging.level, cli.verbose);

    match run_generate(&cli, config) {
        Ok(report) => {
            info!(
                units = report.units,
                kept = report.kept,
                seen = report.seen,
                output = %report.target.describe(),
                "documentation written"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level
fn init_tracing(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("berray_doc={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
