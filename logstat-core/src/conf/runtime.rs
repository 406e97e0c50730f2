use crate::logging::{LogFormat, LogLevel};
use crate::logs::SectionSelection;
use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;

/// Validated configuration handed to the monitor at start.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub tick: Duration,
    pub interval: NonZeroU64,
    pub count: Option<NonZeroU64>,
    pub selection: SectionSelection,
    pub color: bool,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    /// `None` when rate alerting is disabled.
    pub alerts: Option<AlertSettings>,
}

#[derive(Debug, Clone, Copy)]
pub struct AlertSettings {
    pub max_rate: u64,
    pub rate_history: NonZeroUsize,
}
