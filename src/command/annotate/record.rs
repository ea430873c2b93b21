//! Annotate record - the per-file result of `cvs annotate`

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::AnnotateLine;
use crate::infrastructure::spool::{Spool, SpoolWriter};

/// Annotations for a single file, content spooled to disk.
///
/// Produced by [`AnnotateBuilder`](super::AnnotateBuilder) and handed to
/// event sinks once the server has moved past the file.
#[derive(Debug)]
pub struct AnnotateRecord {
    file: PathBuf,
    spool: Option<Spool>,
    complete: bool,
}

impl AnnotateRecord {
    /// Absolute path of the annotated file
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Number of content lines captured
    pub fn line_count(&self) -> usize {
        self.spool.as_ref().map_or(0, Spool::line_count)
    }

    /// False when spooling failed at some point and lines may be missing
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Raw content lines exactly as the server sent them
    pub fn lines(&self) -> io::Result<Vec<String>> {
        match &self.spool {
            Some(spool) => spool.read_lines(),
            None => Ok(Vec::new()),
        }
    }

    /// Parsed view of the content.
    ///
    /// Lines without an author/date group are skipped; `line_num` counts
    /// only the lines that parsed.
    pub fn annotate_lines(&self) -> io::Result<Vec<AnnotateLine>> {
        let parsed = self
            .lines()?
            .iter()
            .filter_map(|line| AnnotateLine::parse(line))
            .enumerate()
            .map(|(idx, line)| line.with_line_num(idx + 1))
            .collect();
        Ok(parsed)
    }
}

/// Record still receiving lines. Owns the open spool writer.
#[derive(Debug)]
pub(crate) struct OpenRecord {
    file: PathBuf,
    writer: Option<SpoolWriter>,
    complete: bool,
}

impl OpenRecord {
    pub(crate) fn open(file: PathBuf, temp_dir: &Path) -> Self {
        match SpoolWriter::create_in(temp_dir) {
            Ok(writer) => {
                debug!(file = %file.display(), spool = %writer.path().display(), "annotate record opened");
                Self {
                    file,
                    writer: Some(writer),
                    complete: true,
                }
            }
            Err(e) => {
                warn!(file = %file.display(), temp_dir = %temp_dir.display(), error = %e, "cannot create annotate spool; content will be dropped");
                Self {
                    file,
                    writer: None,
                    complete: false,
                }
            }
        }
    }

    pub(crate) fn file(&self) -> &Path {
        &self.file
    }

    /// Best-effort append. Failures mark the record incomplete.
    pub(crate) fn append(&mut self, line: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(e) = writer.append_line(line) {
            if self.complete {
                warn!(file = %self.file.display(), error = %e, "failed to spool annotate line");
            }
            self.complete = false;
        }
    }

    /// Seal the spool and produce the finished record
    pub(crate) fn finish(self) -> AnnotateRecord {
        let mut complete = self.complete;
        let spool = self.writer.map(|writer| {
            let (spool, error) = writer.close();
            if let Some(e) = error {
                warn!(file = %self.file.display(), error = %e, "failed to close annotate spool");
                complete = false;
            }
            spool
        });

        debug!(
            file = %self.file.display(),
            lines = spool.as_ref().map_or(0, Spool::line_count),
            complete,
            "annotate record finished"
        );

        AnnotateRecord {
            file: self.file,
            spool,
            complete,
        }
    }
}
