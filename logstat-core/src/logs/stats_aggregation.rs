use crate::logs::alert::AlertEngine;
use crate::logs::rate_window::RateWindow;
use crate::logs::section::{SectionStat, section_key};
use crate::logs::types::LogEntry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Per-section statistics for the current reporting window.
///
/// Not synchronised on its own; [`SharedMonitor`] owns the lock.
#[derive(Debug, Default)]
pub struct SectionAggregator {
    sections: HashMap<String, SectionStat>,
}

impl SectionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry` to its section. Returns `false` when the path has no
    /// section and the entry was dropped.
    pub fn record_entry(&mut self, entry: LogEntry) -> bool {
        let Some(key) = section_key(&entry.path) else {
            return false;
        };

        match self.sections.get_mut(key) {
            Some(stat) => stat.record(entry),
            None => {
                let mut stat = SectionStat::new(key);
                stat.record(entry);
                self.sections.insert(stat.key.clone(), stat);
            }
        }

        true
    }

    /// Hand over everything collected so far and start an empty window.
    pub fn snapshot_and_reset(&mut self) -> HashMap<String, SectionStat> {
        std::mem::take(&mut self.sections)
    }

    pub fn get(&self, key: &str) -> Option<&SectionStat> {
        self.sections.get(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Rate window plus the alert state machine that reads it.
#[derive(Debug, Clone)]
pub struct RateMonitor {
    pub window: RateWindow,
    pub engine: AlertEngine,
}

/// All state shared between ingestion and reporting.
#[derive(Debug, Default)]
pub struct MonitorState {
    pub(crate) sections: SectionAggregator,
    /// Parsed entries since the previous tick.
    pub(crate) tick_hits: u64,
    pub(crate) rate: Option<RateMonitor>,
    pub(crate) entries_seen: u64,
    pub(crate) parse_failures: u64,
}

impl MonitorState {
    pub fn sections(&self) -> &SectionAggregator {
        &self.sections
    }

    pub fn rate(&self) -> Option<&RateMonitor> {
        self.rate.as_ref()
    }

    pub fn tick_hits(&self) -> u64 {
        self.tick_hits
    }

    pub fn entries_seen(&self) -> u64 {
        self.entries_seen
    }

    pub fn parse_failures(&self) -> u64 {
        self.parse_failures
    }

    pub(crate) fn take_tick_hits(&mut self) -> u64 {
        std::mem::take(&mut self.tick_hits)
    }
}

/// Cloneable handle over the single lock guarding [`MonitorState`].
#[derive(Debug, Clone, Default)]
pub struct SharedMonitor {
    inner: Arc<Mutex<MonitorState>>,
}

impl SharedMonitor {
    pub fn new(rate: Option<RateMonitor>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MonitorState {
                rate,
                ..Default::default()
            })),
        }
    }

    /// Lock the shared state. The state is plain counters, so a panic in
    /// another holder does not invalidate it and poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, MonitorState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_entry(&self, entry: LogEntry) {
        let mut state = self.lock();
        state.entries_seen += 1;
        state.tick_hits += 1;
        state.sections.record_entry(entry);
    }

    pub fn record_parse_failure(&self) {
        self.lock().parse_failures += 1;
    }

    pub fn snapshot_and_reset(&self) -> HashMap<String, SectionStat> {
        self.lock().sections.snapshot_and_reset()
    }
}
