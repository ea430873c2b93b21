//! Gitignore-style exclusion filter
//!
//! Implements the ExclusionFilter port with the `ignore` crate's
//! gitignore matcher, rooted at the command's local directory.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::domain::ports::ExclusionFilter;
use crate::error::ConfigError;

/// Excludes working files matching any configured pattern
#[derive(Debug)]
pub struct IgnoreExclusion {
    root: PathBuf,
    matcher: Gitignore,
    pattern_count: usize,
}

impl IgnoreExclusion {
    /// Matcher with no patterns; excludes nothing.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            matcher: Gitignore::empty(),
            root,
            pattern_count: 0,
        }
    }

    /// Build from gitignore lines. Blank lines and `#` comments are skipped.
    pub fn from_patterns<S: AsRef<str>>(
        root: impl Into<PathBuf>,
        patterns: &[S],
    ) -> Result<Self, ConfigError> {
        let root = root.into();
        let mut builder = GitignoreBuilder::new(&root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let trimmed = pattern.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, pattern)
                .map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        let matcher = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;

        Ok(Self {
            root,
            matcher,
            pattern_count,
        })
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

impl ExclusionFilter for IgnoreExclusion {
    /// Paths outside the root are never excluded.
    fn is_excluded(&self, path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(relative, path.is_dir())
            .is_ignore()
    }
}
