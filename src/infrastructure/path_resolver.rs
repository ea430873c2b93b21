//! Working-tree path resolution
//!
//! Implements the PathResolver port relative to the command's local
//! directory.

use std::path::PathBuf;

use crate::domain::ports::PathResolver;

/// Resolves server paths against a fixed local directory
#[derive(Debug, Clone)]
pub struct LocalPathResolver {
    local_dir: PathBuf,
}

impl LocalPathResolver {
    pub fn new(local_dir: impl Into<PathBuf>) -> Self {
        Self {
            local_dir: local_dir.into(),
        }
    }
}

impl PathResolver for LocalPathResolver {
    /// The file name comes from the repository path; the directory comes
    /// from the local path (`./src/`, `/src/`, `src/`, and `.` are all
    /// accepted).
    fn convert_pathname(&self, local_path: &str, repository_path: &str) -> PathBuf {
        let file_name = repository_path
            .rsplit_once('/')
            .map_or(repository_path, |(_, name)| name);

        let mut local = local_path;
        if let Some(rest) = local.strip_prefix("./") {
            local = rest;
        }
        local = local.trim_start_matches('/');
        if local == "." {
            local = "";
        }

        self.local_dir.join(local).join(file_name)
    }
}
