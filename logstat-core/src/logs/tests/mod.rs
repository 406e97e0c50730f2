mod rate_window_tests;
mod section_tests;

use crate::logs::LogEntry;

pub const APACHE_EXAMPLE: &str =
    r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326"#;

/// Minimal entry for aggregation tests.
pub fn entry(path: &str, status: u16, size: u64) -> LogEntry {
    LogEntry {
        host: "10.0.0.1".to_string(),
        method: "GET".to_string(),
        path: path.to_string(),
        protocol: "HTTP/1.1".to_string(),
        status,
        size,
        ..Default::default()
    }
}

/// A well-formed log line for `path` with the given status.
pub fn line(path: &str, status: u16) -> String {
    format!(r#"192.168.1.20 - - [10/Oct/2000:13:55:36 -0700] "GET {path} HTTP/1.1" {status} 512"#)
}
