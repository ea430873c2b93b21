//! Annotate builder - turns `cvs annotate` output into per-file records

use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::record::OpenRecord;
use crate::command::Builder;
use crate::domain::ports::{ClientEvent, EventSink};

/// Diagnostic-channel prefix that starts a new file
pub const ANNOTATIONS_MARKER: &str = "Annotations for ";

/// Diagnostic-channel decoration printed after each marker
pub const SEPARATOR: &str = "***************";

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Accumulating(OpenRecord),
}

/// Builds one [`AnnotateRecord`](super::AnnotateRecord) per annotated file.
///
/// Output is not self-delimiting: a record runs from its marker to the
/// next marker or the end of output, whichever comes first.
pub struct AnnotateBuilder {
    event_sink: Arc<dyn EventSink>,
    local_dir: PathBuf,
    temp_dir: PathBuf,
    state: State,
}

impl AnnotateBuilder {
    /// `local_dir` resolves marker paths; `temp_dir` holds content spools.
    pub fn new(
        event_sink: Arc<dyn EventSink>,
        local_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            event_sink,
            local_dir: local_dir.into(),
            temp_dir: temp_dir.into(),
            state: State::Idle,
        }
    }

    /// File of the record in progress, if any
    pub fn current_file(&self) -> Option<&Path> {
        match &self.state {
            State::Idle => None,
            State::Accumulating(open) => Some(open.file()),
        }
    }

    fn start_record(&mut self, relative: &str) {
        self.output_done();
        let file = self.local_dir.join(relative);
        self.state = State::Accumulating(OpenRecord::open(file, &self.temp_dir));
    }
}

impl Builder for AnnotateBuilder {
    fn parse_line(&mut self, line: &str, is_error_message: bool) {
        if is_error_message {
            if let Some(relative) = line.strip_prefix(ANNOTATIONS_MARKER) {
                self.start_record(relative);
            } else if !line.starts_with(SEPARATOR) {
                debug!(line, "diagnostic ignored by annotate builder");
            }
            return;
        }

        match &mut self.state {
            State::Accumulating(open) => open.append(line),
            State::Idle => debug!(line, "annotate output outside any file, dropped"),
        }
    }

    fn output_done(&mut self) {
        if let State::Accumulating(open) = mem::take(&mut self.state) {
            let record = open.finish();
            self.event_sink.on_event(ClientEvent::FileInfo(record));
        }
    }
}

impl Drop for AnnotateBuilder {
    fn drop(&mut self) {
        if let State::Accumulating(open) = &self.state {
            debug!(file = %open.file().display(), "annotate builder dropped with a record in progress");
        }
    }
}
