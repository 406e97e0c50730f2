//! Access-log monitoring pipeline
//!
//! Lines arrive on a blocking reader, are parsed into [`LogEntry`] values on
//! the ingestion thread and folded into per-section statistics. A tick-driven
//! loop samples the request rate into a [`RateWindow`], runs the alert state
//! machine over it, and every `interval` ticks drains the section statistics
//! into a report.
//!
//! The overall data processing architecture is:
//!
//! stdin
//! parse_line
//! LogEntry
//! SharedMonitor (SectionAggregator, tick hits, RateWindow, AlertEngine)
//! ReportScheduler
//! render_report
//!

mod alert;
pub mod constants;
mod error;
mod ingest;
mod parse;
mod rate_window;
mod render;
mod run;
mod scheduler;
mod section;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use alert::{AlertEngine, AlertEvent, AlertState};
pub use error::{IngestError, ParseError};
pub use ingest::{IngestOutcome, ingest_stream, spawn_ingestor};
pub use parse::parse_line;
pub use rate_window::RateWindow;
pub use render::{SectionSelection, render_report, render_section};
pub use run::{RunSummary, StopReason, build_monitor, run_monitor};
pub use scheduler::{ReportScheduler, TickOutcome, TickReport};
pub use section::{SectionStat, StatusFamily, section_key};
pub use stats_aggregation::{MonitorState, RateMonitor, SectionAggregator, SharedMonitor};
pub use types::LogEntry;
