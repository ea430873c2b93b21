//! Line reader over any `BufRead` transport
//!
//! Implements the LineSource port for sockets, pipes, and recorded
//! transcripts alike.

use std::io::{self, BufRead};

use crate::domain::ports::LineSource;

/// Reads `\n`-terminated lines, tolerating a trailing `\r`.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected:
/// servers relay file content in whatever encoding the repository holds.
#[derive(Debug)]
pub struct BufLineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufLineReader<R> {
    fn read_line(&mut self) -> io::Result<String> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "server closed the stream while a response line was expected",
            ));
        }
        if self.buf.last() != Some(&b'\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "truncated response line ({} bytes without a terminator)",
                    self.buf.len()
                ),
            ));
        }

        self.buf.pop();
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        Ok(String::from_utf8_lossy(&self.buf).into_owned())
    }
}
