use std::io::{self, BufReader, Cursor, Read};
use std::sync::mpsc::{self, Receiver, Sender};

/// Log input fed line by line from the test. Reads block while the sender is
/// alive and no line is queued; dropping the sender ends the stream.
pub struct ScriptedInput {
    rx: Receiver<String>,
    current: Cursor<Vec<u8>>,
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.current.read(buf)?;
            if n > 0 {
                return Ok(n);
            }

            match self.rx.recv() {
                Ok(line) => self.current = Cursor::new(format!("{line}\n").into_bytes()),
                Err(_) => return Ok(0),
            }
        }
    }
}

pub fn scripted_input() -> (Sender<String>, BufReader<ScriptedInput>) {
    let (tx, rx) = mpsc::channel();
    let input = ScriptedInput {
        rx,
        current: Cursor::new(Vec::new()),
    };
    (tx, BufReader::new(input))
}

/// Yields `data`, then fails every read.
pub struct FailingInput {
    data: Cursor<Vec<u8>>,
}

impl Read for FailingInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::other("input device vanished")),
            n => Ok(n),
        }
    }
}

pub fn failing_input(data: impl Into<String>) -> BufReader<FailingInput> {
    BufReader::new(FailingInput {
        data: Cursor::new(data.into().into_bytes()),
    })
}

/// A well-formed access log line for `path`.
pub fn log_line(path: &str, status: u16, size: u64) -> String {
    format!(
        r#"203.0.113.9 - alice [17/Oct/2026:09:15:00 +0000] "GET {path} HTTP/1.1" {status} {size}"#
    )
}
