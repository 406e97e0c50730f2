use crate::logs::types::LogEntry;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregation key for a request path: the first non-empty path segment once
/// the query string is removed.
///
/// `/api/users?id=1` maps to `api`; `/` and `/?q=1` have no section.
pub fn section_key(path: &str) -> Option<&str> {
    let path = path.split_once('?').map_or(path, |(path, _query)| path);
    path.split('/').find(|segment| !segment.is_empty())
}

/// HTTP status class used to summarise a section's responses.
///
/// Ordered the way the families are printed, `???` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusFamily {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusFamily {
    /// Codes below 100 (including the zero of an absent status) and at or
    /// above 600 are not real HTTP statuses and land in [`StatusFamily::Unknown`].
    pub fn of(status: u16) -> Self {
        match status {
            100..=199 => Self::Informational,
            200..=299 => Self::Success,
            300..=399 => Self::Redirection,
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Informational => "1xx",
            Self::Success => "2xx",
            Self::Redirection => "3xx",
            Self::ClientError => "4xx",
            Self::ServerError => "5xx",
            Self::Unknown => "???",
        }
    }
}

impl fmt::Display for StatusFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything seen for one section during the current reporting window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionStat {
    pub key: String,
    pub count: u64,
    pub sizes: Vec<u64>,
    pub entries: Vec<LogEntry>,
}

impl SectionStat {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub(crate) fn record(&mut self, entry: LogEntry) {
        self.count += 1;
        self.sizes.push(entry.size);
        self.entries.push(entry);
    }

    /// Floor of the mean response size, `None` before any sample.
    pub fn average_size(&self) -> Option<u64> {
        if self.sizes.is_empty() {
            return None;
        }

        let total: u128 = self.sizes.iter().map(|s| u128::from(*s)).sum();
        let avg = total / self.sizes.len() as u128;
        // mean of u64 values always fits in u64
        Some(avg as u64)
    }

    /// Response counts per status family. Families with no responses are absent.
    pub fn status_families(&self) -> BTreeMap<StatusFamily, u64> {
        let mut families = BTreeMap::new();
        for entry in &self.entries {
            *families.entry(StatusFamily::of(entry.status)).or_insert(0) += 1;
        }
        families
    }
}
