use anyhow::Result;
use clap::Parser;
use logstat_core::conf::{MonitorConfig, MonitorSettings, load_config};
use logstat_core::logging::{LogFormat, LogLevel};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "Per-section traffic summaries and request-rate alerts for NCSA access logs on stdin",
    after_help = "\
EXAMPLES:
    tail -F access.log | logstat                         Busiest section every 10s
    tail -F access.log | logstat --top=false -S api      Only the api section
    logstat -i 5 -c 3 < access.log                       Three 5-second reports"
)]
pub struct Cli {
    /// TOML config file; flags given on the command line override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Level of log output verbosity
    #[arg(short = 'L', long, env = "LOGLEVEL", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Diagnostic output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Show only the top site section
    #[arg(short = 't', long, num_args = 0..=1, default_missing_value = "true")]
    pub top: Option<bool>,

    /// When displaying multiple sections (--top=false), choose which ones to show
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub only_sections: Vec<String>,

    /// The maximum number of reports to print
    #[arg(short = 'c', long)]
    pub count: Option<u64>,

    /// Interval (in ticks) that each report summarizes
    #[arg(short = 'i', long)]
    pub interval: Option<u64>,

    /// Show alerts when the total request rate exceeds the threshold
    #[arg(
        short = 'A',
        long = "request-rate-alerts",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub request_rate_alerts: Option<bool>,

    /// The maximum average requests/sec threshold
    #[arg(short = 'R', long = "requests-max-rate")]
    pub requests_max_rate: Option<u64>,

    /// How many per-second observations to average when alerting
    #[arg(short = 'H', long = "request-rate-history")]
    pub request_rate_history: Option<usize>,

    /// Disable colors in terminal output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<MonitorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MonitorConfig::default(),
        };

        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(top) = self.top {
            config.top = top;
        }
        if !self.only_sections.is_empty() {
            config.only_sections = self.only_sections.clone();
        }
        if self.count.is_some() {
            config.count = self.count;
        }
        if let Some(interval) = self.interval {
            config.interval = interval;
        }
        if let Some(enabled) = self.request_rate_alerts {
            config.alerts.enabled = enabled;
        }
        if let Some(max_rate) = self.requests_max_rate {
            config.alerts.max_rate = max_rate;
        }
        if let Some(history) = self.request_rate_history {
            config.alerts.rate_history = history;
        }
        if self.no_color || !io::stdout().is_terminal() {
            config.color = false;
        }

        Ok(config)
    }

    pub fn settings(&self) -> Result<MonitorSettings> {
        Ok(self.resolve_config()?.validate()?)
    }
}
