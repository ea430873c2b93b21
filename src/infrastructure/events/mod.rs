//! Event Sink Implementations
//!
//! Provides concrete implementations of EventSink:
//! - JsonEventSink: NDJSON output for scripts and pipelines
//! - RecordingEventSink: in-memory capture for embedding and tests

mod json;
mod recording;

pub use json::JsonEventSink;
pub use recording::RecordingEventSink;
