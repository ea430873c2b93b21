//! cvs-decode - client-side decoding of CVS server responses
//!
//! Turns the line-oriented output of a CVS server into domain objects:
//! annotate output becomes per-file [`AnnotateRecord`]s, and `Checked-in`
//! confirmations become administrative [`Entry`] updates in the working
//! tree's `CVS/Entries` files.
//!
//! ```no_run
//! use std::io::BufReader;
//! use std::sync::Arc;
//!
//! use cvs_decode::domain::ports::NoExclusion;
//! use cvs_decode::infrastructure::{
//!     BufLineReader, FsEntriesStore, JsonEventSink, LocalPathResolver,
//! };
//! use cvs_decode::{AnnotateBuilder, CommandSession};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sink = Arc::new(JsonEventSink::stdout());
//! let builder = AnnotateBuilder::new(sink, "/home/dev/checkout", std::env::temp_dir());
//! let mut session = CommandSession::new(
//!     LocalPathResolver::new("/home/dev/checkout"),
//!     NoExclusion,
//!     FsEntriesStore::new(),
//!     builder,
//! );
//!
//! let mut reader = BufLineReader::new(BufReader::new(std::io::stdin()));
//! session.run(&mut reader)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod response;

// Re-exports for convenience
pub use application::CommandSession;
pub use command::{AnnotateBuilder, AnnotateRecord, Builder, LogBuilder};
pub use config::{ClientConfig, ConfigWarning};
pub use domain::entities::{AnnotateLine, Entry, EntryParseError, DUMMY_TIMESTAMP};
pub use domain::ports::{ClientEvent, EventSink};
pub use error::{ConfigError, ProtocolError, ProtocolResult};
pub use response::{process_responses, Response, ResponseKind};
