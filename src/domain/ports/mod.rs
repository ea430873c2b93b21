//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the decoder.
//! Infrastructure layer provides concrete implementations.

pub mod client_events;
pub mod entries_store;
pub mod exclusion_filter;
pub mod line_source;
pub mod path_resolver;
pub mod response_services;

pub use client_events::{ClientEvent, EventSink, NoopEventSink};
pub use entries_store::{EntriesError, EntriesResult, EntriesStore};
pub use exclusion_filter::{ExclusionFilter, NoExclusion};
pub use line_source::LineSource;
pub use path_resolver::PathResolver;
pub use response_services::ResponseServices;
