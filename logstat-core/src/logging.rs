use serde::{Deserialize, Serialize};
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Diagnostic verbosity accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Quiet,
}

impl LogLevel {
    /// `tracing` has no fatal level; fatal keeps only errors and quiet disables output.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Fatal => "error",
            Self::Quiet => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize diagnostics on stderr, keeping stdout for reports.
///
/// `RUST_LOG`, when set, overrides `level`.
pub fn init_logging(level: LogLevel, format: LogFormat, color: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // try_init: a subscriber may already be installed (tests, embedding)
    let _ = match format {
        LogFormat::Text => builder.with_ansi(color).try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
