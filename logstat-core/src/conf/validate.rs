use crate::conf::error::ConfigError;
use crate::conf::runtime::{AlertSettings, MonitorSettings};
use crate::conf::types::MonitorConfig;
use crate::logs::SectionSelection;
use std::fmt::Display;
use std::num::{NonZeroU64, NonZeroUsize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

impl<T: PartialOrd + Display + Copy> RangeConstraint<T> {
    pub fn check(&self, value: T) -> Result<T, ConfigError> {
        if value < self.min || value > self.max {
            let units = self.units.map(|u| format!(" {u}")).unwrap_or_default();
            return Err(ConfigError::invalid(
                self.label,
                format!(
                    "{value} is outside the allowed range {}..={}{units}",
                    self.min, self.max
                ),
            ));
        }
        Ok(value)
    }
}

pub const REPORT_INTERVAL: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: u64::MAX,
    label: "interval",
    units: Some("ticks"),
};

pub const REPORT_COUNT: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: u64::MAX,
    label: "count",
    units: None,
};

pub const TICK_MILLIS: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: 60 * 60 * 1000,
    label: "tick_millis",
    units: Some("ms"),
};

pub const RATE_HISTORY: RangeConstraint<usize> = RangeConstraint {
    min: 1,
    max: usize::MAX,
    label: "alerts.rate_history",
    units: Some("ticks"),
};

impl MonitorConfig {
    /// Check every value and lower the config into [`MonitorSettings`].
    pub fn validate(&self) -> Result<MonitorSettings, ConfigError> {
        let interval = non_zero_u64(REPORT_INTERVAL.check(self.interval)?, REPORT_INTERVAL.label)?;
        let count = self
            .count
            .map(|count| REPORT_COUNT.check(count))
            .transpose()?
            .map(|count| non_zero_u64(count, REPORT_COUNT.label))
            .transpose()?;
        let tick = Duration::from_millis(TICK_MILLIS.check(self.tick_millis)?);

        if !self.top && self.only_sections.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::invalid(
                "only_sections",
                "section names must not be empty",
            ));
        }

        let alerts = if self.alerts.enabled {
            let history = RATE_HISTORY.check(self.alerts.rate_history)?;
            Some(AlertSettings {
                max_rate: self.alerts.max_rate,
                rate_history: NonZeroUsize::new(history)
                    .ok_or_else(|| ConfigError::invalid(RATE_HISTORY.label, "must be non-zero"))?,
            })
        } else {
            None
        };

        Ok(MonitorSettings {
            tick,
            interval,
            count,
            selection: SectionSelection::from_options(self.top, &self.only_sections),
            color: self.color,
            log_level: self.log_level,
            log_format: self.log_format,
            alerts,
        })
    }
}

fn non_zero_u64(value: u64, label: &'static str) -> Result<NonZeroU64, ConfigError> {
    NonZeroU64::new(value).ok_or_else(|| ConfigError::invalid(label, "must be non-zero"))
}
