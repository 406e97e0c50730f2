use crate::logs::rate_window::RateWindow;
use chrono::{DateTime, Local, SecondsFormat};
use std::fmt;
use tracing::{debug, error, info};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertState {
    Normal,
    Triggered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEvent {
    HighTraffic { average: u64, at: DateTime<Local> },
    Recovered { average: u64, at: DateTime<Local> },
}

impl AlertEvent {
    pub fn average(&self) -> u64 {
        match self {
            Self::HighTraffic { average, .. } | Self::Recovered { average, .. } => *average,
        }
    }
}

impl fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighTraffic { average, at } => write!(
                f,
                "High traffic generated an alert - hits = {average} req/sec, triggered at {}",
                at.to_rfc3339_opts(SecondsFormat::Secs, false)
            ),
            Self::Recovered { average, at } => write!(
                f,
                "Traffic rate has returned to normal levels - hits = {average} req/sec at {}",
                at.to_rfc3339_opts(SecondsFormat::Secs, false)
            ),
        }
    }
}

/// Edge-triggered hysteresis over the trailing request rate.
///
/// Every transition clears the window, so the next event in either direction
/// needs a freshly filled window.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    state: AlertState,
    threshold: u64,
}

impl AlertEngine {
    pub fn new(threshold: u64) -> Self {
        Self {
            state: AlertState::Normal,
            threshold,
        }
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn evaluate(&mut self, window: &mut RateWindow, now: DateTime<Local>) -> Option<AlertEvent> {
        let Some(average) = window.average() else {
            debug!(
                have = window.write_count(),
                need = window.capacity(),
                "waiting for rate history to populate"
            );
            return None;
        };

        let alert = match self.state {
            AlertState::Normal if average > self.threshold => {
                AlertEvent::HighTraffic { average, at: now }
            }
            AlertState::Triggered if average < self.threshold => {
                AlertEvent::Recovered { average, at: now }
            }
            _ => {
                debug!(average, threshold = self.threshold, state = ?self.state, "rate holds state");
                return None;
            }
        };

        let from = self.state;
        self.state = match alert {
            AlertEvent::HighTraffic { .. } => AlertState::Triggered,
            AlertEvent::Recovered { .. } => AlertState::Normal,
        };
        window.clear();

        match self.state {
            AlertState::Triggered => error!(
                event = "alert_transition",
                from = ?from,
                to = ?self.state,
                average,
                threshold = self.threshold,
                "{alert}"
            ),
            AlertState::Normal => info!(
                event = "alert_transition",
                from = ?from,
                to = ?self.state,
                average,
                threshold = self.threshold,
                "{alert}"
            ),
        }

        Some(alert)
    }
}
