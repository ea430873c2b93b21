//! Client Event Port
//!
//! Completed domain objects are published here, one event per object.
//! Sinks are injected into builders and sessions at construction.

use std::path::PathBuf;

use crate::command::annotate::AnnotateRecord;
use crate::domain::entities::Entry;

/// Event emitted while decoding server output
#[derive(Debug)]
pub enum ClientEvent {
    /// Annotations for one file are complete
    FileInfo(AnnotateRecord),

    /// An administrative entry was written after a check-in confirmation
    EntryUpdated { path: PathBuf, entry: Entry },
}

/// Trait for receiving client events
///
/// Implementations:
/// - `RecordingEventSink`: keeps events in memory
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: discards everything
pub trait EventSink: Send + Sync {
    /// Handle an event. Must not call back into the publisher.
    fn on_event(&self, event: ClientEvent);
}

/// No-op event sink
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: ClientEvent) {}
}
