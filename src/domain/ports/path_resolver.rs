//! PathResolver port - maps server paths onto the working tree

use std::path::PathBuf;

/// Converts a server-relative local path plus repository path into an
/// absolute path in the working tree.
pub trait PathResolver {
    fn convert_pathname(&self, local_path: &str, repository_path: &str) -> PathBuf;
}
