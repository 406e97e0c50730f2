use crate::conf::MonitorSettings;
use crate::logs::alert::AlertEngine;
use crate::logs::constants::REPORT_HEADER;
use crate::logs::error::IngestError;
use crate::logs::ingest::spawn_ingestor;
use crate::logs::rate_window::RateWindow;
use crate::logs::scheduler::{ReportScheduler, TickOutcome};
use crate::logs::stats_aggregation::{RateMonitor, SharedMonitor};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::{BufRead, Write};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    StreamEnded,
    CountReached,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub stop: StopReason,
    /// Lines read from the input. Only known once the stream has ended.
    pub lines_read: Option<u64>,
    pub entries: u64,
    pub parse_failures: u64,
    pub observations: u64,
    pub reports: u64,
}

/// Build the shared state for a run from validated settings.
pub fn build_monitor(settings: &MonitorSettings) -> SharedMonitor {
    let rate = settings.alerts.map(|alerts| {
        tracing::debug!(
            history = alerts.rate_history.get(),
            max_rate = alerts.max_rate,
            "monitoring total request rate"
        );

        RateMonitor {
            window: RateWindow::new(alerts.rate_history),
            engine: AlertEngine::new(alerts.max_rate),
        }
    });

    SharedMonitor::new(rate)
}

/// Monitor `input` until it ends or the configured report count is reached,
/// writing reports to `out`.
///
/// Ingestion runs on its own thread; this future only wakes on a tick or on
/// the end of the stream. A read failure still gets the final report before
/// the error is returned.
pub async fn run_monitor<R, W>(settings: &MonitorSettings, input: R, mut out: W) -> Result<RunSummary>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    let monitor = build_monitor(settings);
    let mut finished =
        spawn_ingestor(input, monitor.clone()).context("failed to spawn ingestion thread")?;
    let mut scheduler = ReportScheduler::new(settings);

    writeln!(out, "{REPORT_HEADER}").context("failed to write report header")?;
    out.flush().context("failed to write report header")?;

    let mut ticker = interval_at(Instant::now() + settings.tick, settings.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            outcome = &mut finished => {
                let report = scheduler.tick(&monitor, true, Local::now());
                report.write_to(&mut out).context("failed to write report")?;

                let lines_read = outcome
                    .unwrap_or(Err(IngestError::Disconnected))
                    .context("log ingestion failed")?;

                return Ok(summarize(&monitor, &scheduler, StopReason::StreamEnded, Some(lines_read)));
            }

            _ = ticker.tick() => {
                let report = scheduler.tick(&monitor, false, Local::now());
                report.write_to(&mut out).context("failed to write report")?;

                if report.outcome == TickOutcome::Done {
                    tracing::info!(reports = scheduler.reports(), "report count reached");
                    return Ok(summarize(&monitor, &scheduler, StopReason::CountReached, None));
                }
            }
        }
    }
}

fn summarize(
    monitor: &SharedMonitor,
    scheduler: &ReportScheduler,
    stop: StopReason,
    lines_read: Option<u64>,
) -> RunSummary {
    let state = monitor.lock();
    RunSummary {
        stop,
        lines_read,
        entries: state.entries_seen(),
        parse_failures: state.parse_failures(),
        observations: scheduler.observations(),
        reports: scheduler.reports(),
    }
}
