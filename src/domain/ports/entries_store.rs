//! EntriesStore port - the administrative metadata store
//!
//! Persists one [`Entry`] per working file. Responses only ever supply a
//! single update per path; concurrent writers are serialized by the
//! implementation, not by callers.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{Entry, EntryParseError};

/// Result type for administrative store operations
pub type EntriesResult<T> = Result<T, EntriesError>;

/// Administrative store errors
#[derive(Error, Debug)]
pub enum EntriesError {
    /// I/O error while reading or writing the store
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored line could not be parsed
    #[error("malformed entry in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: EntryParseError,
    },

    /// The path has no parent directory or file name to key on
    #[error("cannot store an entry for {0}")]
    InvalidPath(PathBuf),
}

/// Abstract administrative store
///
/// Implementations:
/// - `FsEntriesStore` - `CVS/Entries` files next to the working files
/// - test doubles that record writes in memory
pub trait EntriesStore {
    /// Insert or replace the entry for `file`
    fn set_entry(&self, file: &Path, entry: &Entry) -> EntriesResult<()>;

    /// Look up the entry for `file`, if any
    fn get_entry(&self, file: &Path) -> EntriesResult<Option<Entry>>;
}
