//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `line_reader` - `BufRead` transport adapter (LineSource)
//! - `path_resolver` - working-tree path resolution (PathResolver)
//! - `exclusion` - gitignore-style filter (ExclusionFilter)
//! - `repositories/` - `CVS/Entries` store (EntriesStore)
//! - `events/` - event sinks (EventSink)
//! - `spool` - temp-file line buffers for annotate content

pub mod events;
pub mod exclusion;
pub mod line_reader;
pub mod path_resolver;
pub mod repositories;
pub mod spool;

// Re-export for convenience
pub use events::{JsonEventSink, RecordingEventSink};
pub use exclusion::IgnoreExclusion;
pub use line_reader::BufLineReader;
pub use path_resolver::LocalPathResolver;
pub use repositories::FsEntriesStore;
