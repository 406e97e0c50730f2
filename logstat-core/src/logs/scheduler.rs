use crate::conf::MonitorSettings;
use crate::logs::alert::AlertEvent;
use crate::logs::render::{SectionSelection, render_report};
use crate::logs::stats_aggregation::SharedMonitor;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::num::NonZeroU64;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The configured number of reports has been written.
    Done,
}

/// What one tick did.
#[derive(Debug, Clone)]
pub struct TickReport {
    pub observation: u64,
    /// Hits pushed into the rate window.
    pub hits: u64,
    pub alert: Option<AlertEvent>,
    /// Rendered section lines when this tick was a reporting boundary.
    pub lines: Option<Vec<String>>,
    pub outcome: TickOutcome,
}

impl TickReport {
    pub fn is_report(&self) -> bool {
        self.lines.is_some()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(lines) = &self.lines else {
            return Ok(());
        };

        for line in lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

/// Drives the per-tick rate sampling and the periodic section reports.
#[derive(Debug)]
pub struct ReportScheduler {
    interval: NonZeroU64,
    count: Option<NonZeroU64>,
    selection: SectionSelection,
    color: bool,
    observations: u64,
    reports: u64,
}

impl ReportScheduler {
    pub fn new(settings: &MonitorSettings) -> Self {
        Self {
            interval: settings.interval,
            count: settings.count,
            selection: settings.selection.clone(),
            color: settings.color,
            observations: 0,
            reports: 0,
        }
    }

    pub fn observations(&self) -> u64 {
        self.observations
    }

    pub fn reports(&self) -> u64 {
        self.reports
    }

    /// Run one tick against `monitor`. `forced` requests a report regardless of
    /// the interval (the input ended).
    pub fn tick(&mut self, monitor: &SharedMonitor, forced: bool, now: DateTime<Local>) -> TickReport {
        let (hits, alert, snapshot) = {
            let mut state = monitor.lock();

            let hits = state.take_tick_hits();
            let alert = state.rate.as_mut().and_then(|rate| {
                rate.window.push(hits);
                rate.engine.evaluate(&mut rate.window, now)
            });

            self.observations += 1;
            let due = forced || self.observations % self.interval.get() == 0;
            let snapshot = due.then(|| state.sections.snapshot_and_reset());

            (hits, alert, snapshot)
        };

        debug!(observation = self.observations, hits, forced, "tick");

        let lines = snapshot.map(|sections| {
            self.reports += 1;

            for stat in sections.values() {
                debug!(
                    section = %stat.key,
                    count = stat.count,
                    avg_size = ?stat.average_size(),
                    "section rollup"
                );
            }

            render_report(&self.selection.select(sections), self.color)
        });

        let done = lines.is_some() && self.count.is_some_and(|count| self.reports >= count.get());

        TickReport {
            observation: self.observations,
            hits,
            alert,
            lines,
            outcome: if done {
                TickOutcome::Done
            } else {
                TickOutcome::Continue
            },
        }
    }
}
