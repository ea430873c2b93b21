//! Command Session
//!
//! Binds the services one command needs while its responses are
//! processed:
//! 1. Resolve server paths into the working tree
//! 2. Skip excluded files
//! 3. Persist administrative entries and publish them
//! 4. Feed `M`/`E` output to the command's builder

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::command::Builder;
use crate::domain::entities::Entry;
use crate::domain::ports::{
    ClientEvent, EntriesResult, EntriesStore, EventSink, ExclusionFilter, LineSource,
    NoopEventSink, PathResolver, ResponseServices,
};
use crate::error::ProtocolResult;
use crate::response::process_responses;

/// One running command
///
/// Parameterized by its ports so tests can substitute in-memory doubles.
pub struct CommandSession<R, X, S, B>
where
    R: PathResolver,
    X: ExclusionFilter,
    S: EntriesStore,
    B: Builder,
{
    resolver: R,
    exclusion: X,
    store: S,
    builder: B,
    event_sink: Arc<dyn EventSink>,
}

impl<R, X, S, B> CommandSession<R, X, S, B>
where
    R: PathResolver,
    X: ExclusionFilter,
    S: EntriesStore,
    B: Builder,
{
    pub fn new(resolver: R, exclusion: X, store: S, builder: B) -> Self {
        Self {
            resolver,
            exclusion,
            store,
            builder,
            event_sink: Arc::new(NoopEventSink),
        }
    }

    /// Publish `EntryUpdated` events to `event_sink`
    pub fn with_event_sink(mut self, event_sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Process responses until the terminal one, then finish the builder.
    ///
    /// The builder is finished even when the stream fails, so a partially
    /// received file still produces its record.
    pub fn run(&mut self, reader: &mut dyn LineSource) -> ProtocolResult<()> {
        let result = process_responses(reader, self);
        if let Err(e) = &result {
            warn!(error = %e, "response stream ended abnormally");
        }
        self.finish();
        result
    }

    /// Signal end of command output to the builder
    pub fn finish(&mut self) {
        self.builder.output_done();
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_builder(self) -> B {
        self.builder
    }
}

impl<R, X, S, B> ResponseServices for CommandSession<R, X, S, B>
where
    R: PathResolver,
    X: ExclusionFilter,
    S: EntriesStore,
    B: Builder,
{
    fn convert_pathname(&self, local_path: &str, repository_path: &str) -> PathBuf {
        self.resolver.convert_pathname(local_path, repository_path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclusion.is_excluded(path)
    }

    fn set_entry(&mut self, path: &Path, entry: Entry) -> EntriesResult<()> {
        self.store.set_entry(path, &entry)?;
        self.event_sink.on_event(ClientEvent::EntryUpdated {
            path: path.to_path_buf(),
            entry,
        });
        Ok(())
    }

    fn message(&mut self, line: &str, is_error: bool) {
        self.builder.parse_line(line, is_error);
    }
}
