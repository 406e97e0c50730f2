use crate::logs::error::{IngestError, ParseError};
use crate::logs::parse::parse_line;
use crate::logs::stats_aggregation::SharedMonitor;
use crate::logs::types::LogEntry;
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::oneshot;

/// Terminal outcome of an ingestion run: the number of lines read, or the read failure.
pub type IngestOutcome = Result<u64, IngestError>;

/// Read `reader` line by line until end of input, handing every parsed line
/// (or its parse failure) to `handler`.
///
/// The handler runs exactly once per line. Only a failure of the underlying
/// reader ends the loop early.
pub fn ingest_stream<R, F>(mut reader: R, mut handler: F) -> IngestOutcome
where
    R: BufRead,
    F: FnMut(Result<LogEntry, ParseError>),
{
    let mut lines_read = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();

        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| IngestError::Read { lines_read, source })?;
        if n == 0 {
            break;
        }

        lines_read += 1;

        // Access logs are not guaranteed to be valid UTF-8; keep the line rather
        // than failing the whole stream.
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        handler(parse_line(&line));
    }

    Ok(lines_read)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

/// Run [`ingest_stream`] on a dedicated thread, feeding `monitor`.
///
/// The returned receiver resolves once the stream ends or fails. The thread
/// is detached: nothing interrupts a blocked read.
pub fn spawn_ingestor<R>(
    reader: R,
    monitor: SharedMonitor,
) -> io::Result<oneshot::Receiver<IngestOutcome>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    thread::Builder::new()
        .name("logstat-ingest".to_string())
        .spawn(move || {
            let outcome = ingest_stream(reader, |result| match result {
                Ok(entry) => monitor.record_entry(entry),
                Err(e) => {
                    tracing::error!(error = %e, field_error = e.is_field_error(), "dropping log line");
                    monitor.record_parse_failure();
                }
            });

            match &outcome {
                Ok(lines_read) => tracing::info!(lines_read, "log stream finished"),
                Err(e) => tracing::error!(error = %e, "log stream failed"),
            }

            // Receiver gone means the reporting loop already returned.
            let _ = tx.send(outcome);
        })?;

    Ok(rx)
}
