use crate::logs::constants::{ABSENT_FIELD, NCSA_PATTERN, NCSA_TIMESTAMP_FORMAT};
use crate::logs::error::ParseError;
use crate::logs::types::LogEntry;
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::str::FromStr;

static NCSA_RX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NCSA_PATTERN).expect("NCSA log pattern must compile"));

/// Parse a single NCSA common log line.
///
/// Lines that do not match the grammar at all fail with
/// [`ParseError::FormatMismatch`]. Lines that match but carry an unparseable
/// timestamp, status or size fail with the matching field error.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let Some(caps) = NCSA_RX.captures(line) else {
        return Err(ParseError::format_mismatch(line));
    };

    Ok(LogEntry {
        host: field(&caps, "host").unwrap_or_default().to_string(),
        identity: field(&caps, "id").map(str::to_string),
        user_id: field(&caps, "user").map(str::to_string),
        timestamp: field(&caps, "timestamp")
            .map(parse_timestamp)
            .transpose()?,
        method: field(&caps, "method")
            .map(str::to_uppercase)
            .unwrap_or_default(),
        path: field(&caps, "path").unwrap_or_default().to_string(),
        protocol: field(&caps, "protocol").unwrap_or_default().to_string(),
        status: field(&caps, "status")
            .map(parse_status)
            .transpose()?
            .unwrap_or_default(),
        size: field(&caps, "size")
            .map(parse_size)
            .transpose()?
            .unwrap_or_default(),
        rest: field(&caps, "rest")
            .map(str::trim)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string),
    })
}

impl FromStr for LogEntry {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// A named capture, or `None` when it is missing or the `-` placeholder.
fn field<'l>(caps: &Captures<'l>, name: &str) -> Option<&'l str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|value| *value != ABSENT_FIELD)
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(value, NCSA_TIMESTAMP_FORMAT).map_err(|source| {
        ParseError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}

fn parse_status(value: &str) -> Result<u16, ParseError> {
    value.parse::<u16>().map_err(|source| ParseError::Status {
        value: value.to_string(),
        source,
    })
}

fn parse_size(value: &str) -> Result<u64, ParseError> {
    value.parse::<u64>().map_err(|source| ParseError::Size {
        value: value.to_string(),
        source,
    })
}
