use std::time::Duration;

pub const NCSA_PATTERN: &str = r#"^(?P<host>(?:\d{1,3}[\.]){3}\d{1,3}) (?P<id>\S+) (?P<user>\S+) \[(?P<timestamp>[^\]]+)\] "(?P<method>\S+) (?P<path>\S+) (?P<protocol>[^"]+)" (?P<status>\d+) (?P<size>\d+) ?(?P<rest>.*)"#;
pub const NCSA_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Placeholder used by the common log format for a missing field.
pub const ABSENT_FIELD: &str = "-";

pub const REPORT_HEADER: &str = "section \tcount \tresponses";

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);
pub const DEFAULT_REPORT_INTERVAL: u64 = 10;
pub const DEFAULT_MAX_RATE: u64 = 100;
pub const DEFAULT_RATE_HISTORY: usize = 120;
