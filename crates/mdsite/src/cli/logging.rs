//! Diagnostic logging setup.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt};

/// Format of diagnostic log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Returns the default filter directive for a `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "mdsite=warn,mdsite_document=warn,mdsite_config=warn",
        1 => "mdsite=debug,mdsite_document=debug,mdsite_config=debug",
        _ => "mdsite=trace,mdsite_document=trace,mdsite_config=trace",
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    match format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}
