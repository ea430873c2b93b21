//! Spooled line buffers
//!
//! Annotate output can be arbitrarily long, so content lines are staged in
//! a temp file instead of memory. A [`SpoolWriter`] is open while a record
//! accumulates; [`SpoolWriter::close`] turns it into a read-only [`Spool`].
//! The backing file is removed when the spool (or an abandoned writer) is
//! dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

const SPOOL_PREFIX: &str = "cvs-annotate-";
const SPOOL_SUFFIX: &str = ".spool";

/// Append-only writer over a temp file
#[derive(Debug)]
pub struct SpoolWriter {
    writer: BufWriter<NamedTempFile>,
    line_count: usize,
}

impl SpoolWriter {
    /// Create a fresh spool file inside `dir`
    pub fn create_in(dir: &Path) -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .suffix(SPOOL_SUFFIX)
            .tempfile_in(dir)?;
        Ok(Self {
            writer: BufWriter::new(file),
            line_count: 0,
        })
    }

    /// Wrap an already created temp file
    #[cfg(test)]
    pub(crate) fn from_temp(file: NamedTempFile) -> Self {
        Self {
            writer: BufWriter::new(file),
            line_count: 0,
        }
    }

    /// Append one line; a newline terminator is added.
    ///
    /// A line containing `\n` is rejected so every appended line reads
    /// back as exactly one line.
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        if line.contains('\n') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "spooled line contains a newline",
            ));
        }
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.line_count += 1;
        Ok(())
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn path(&self) -> &Path {
        self.writer.get_ref().path()
    }

    /// Flush and seal the spool.
    ///
    /// The spool is returned even when the final flush fails; the error
    /// reports that buffered lines may be missing from it.
    pub fn close(self) -> (Spool, Option<io::Error>) {
        let line_count = self.line_count;
        match self.writer.into_inner() {
            Ok(file) => (Spool { file, line_count }, None),
            Err(err) => {
                let (error, writer) = err.into_parts();
                let (file, _unflushed) = writer.into_parts();
                (Spool { file, line_count }, Some(error))
            }
        }
    }
}

/// Sealed spool, readable any number of times
#[derive(Debug)]
pub struct Spool {
    file: NamedTempFile,
    line_count: usize,
}

impl Spool {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Lines successfully appended before the spool was sealed
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Read every line back, in append order.
    ///
    /// Only the `\n` terminator is stripped; a trailing `\r` is content.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        let file: File = self.file.reopen()?;
        let mut reader = BufReader::new(file);
        let mut lines = Vec::with_capacity(self.line_count);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = String::from_utf8(std::mem::take(&mut buf))
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            lines.push(line);
        }
        Ok(lines)
    }
}
