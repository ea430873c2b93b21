//! ResponseServices port - side effects available to responses
//!
//! A response decodes its lines and then acts only through this trait:
//! resolving paths, consulting the exclusion filter, updating the
//! administrative store, and forwarding message text to whatever builder
//! is consuming the running command's output.

use std::path::{Path, PathBuf};

use crate::domain::entities::Entry;
use crate::domain::ports::EntriesResult;

pub trait ResponseServices {
    /// See [`PathResolver::convert_pathname`](crate::domain::ports::PathResolver)
    fn convert_pathname(&self, local_path: &str, repository_path: &str) -> PathBuf;

    /// See [`ExclusionFilter::is_excluded`](crate::domain::ports::ExclusionFilter)
    fn is_excluded(&self, path: &Path) -> bool;

    /// Persist `entry` as the administrative record for `path`
    fn set_entry(&mut self, path: &Path, entry: Entry) -> EntriesResult<()>;

    /// Deliver one line of command output.
    ///
    /// `is_error` marks the diagnostic channel (`E` responses).
    fn message(&mut self, line: &str, is_error: bool);
}
