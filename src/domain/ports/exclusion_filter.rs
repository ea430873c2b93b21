//! ExclusionFilter port - files the client refuses to track

use std::path::Path;

/// Reports whether an absolute working-tree path is excluded
pub trait ExclusionFilter {
    fn is_excluded(&self, path: &Path) -> bool;
}

/// Filter that excludes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusion;

impl ExclusionFilter for NoExclusion {
    fn is_excluded(&self, _path: &Path) -> bool {
        false
    }
}
