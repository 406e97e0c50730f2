use chrono::{DateTime, FixedOffset};

/// One request record parsed from an NCSA common log line.
///
/// Fields written as `-` in the source line are left absent: `None` for the
/// optional fields, empty for the request-line strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub host: String,
    pub identity: Option<String>,
    pub user_id: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Always upper-case.
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub status: u16,
    pub size: u64,
    /// Trailing free text after the size field, trimmed.
    pub rest: Option<String>,
}
