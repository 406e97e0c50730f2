use crate::logging::{LogFormat, LogLevel};
use crate::logs::constants::{
    DEFAULT_MAX_RATE, DEFAULT_RATE_HISTORY, DEFAULT_REPORT_INTERVAL, DEFAULT_TICK,
};
use serde::{Deserialize, Serialize};

/// Monitor configuration as written in a config file or assembled from flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Report only the busiest section of each window.
    pub top: bool,

    /// Sections to report when `top` is off. Empty means all.
    pub only_sections: Vec<String>,

    /// Stop after this many reports. `None` runs until the input ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Ticks between reports.
    pub interval: u64,

    pub tick_millis: u64,

    pub color: bool,

    pub log_level: LogLevel,

    pub log_format: LogFormat,

    pub alerts: AlertConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub enabled: bool,

    /// Average requests per tick above which the alert fires.
    pub max_rate: u64,

    /// Number of ticks averaged.
    pub rate_history: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            top: true,
            only_sections: Vec::new(),
            count: None,
            interval: DEFAULT_REPORT_INTERVAL,
            tick_millis: DEFAULT_TICK.as_millis() as u64,
            color: true,
            log_level: LogLevel::default(),
            log_format: LogFormat::default(),
            alerts: AlertConfig::default(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_rate: DEFAULT_MAX_RATE,
            rate_history: DEFAULT_RATE_HISTORY,
        }
    }
}
