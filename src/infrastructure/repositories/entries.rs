//! `CVS/Entries` Repository
//!
//! Persists administrative entries in the `CVS/Entries` file of each
//! working directory, one line per file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::entities::Entry;
use crate::domain::ports::{EntriesError, EntriesResult, EntriesStore};

/// Administrative directory name inside each working directory
pub const ADMIN_DIR: &str = "CVS";
const ENTRIES_FILE: &str = "Entries";
const LOCK_FILE: &str = "Entries.Lock";

/// Filesystem-backed entries store
#[derive(Debug, Clone, Default)]
pub struct FsEntriesStore;

impl FsEntriesStore {
    pub fn new() -> Self {
        Self
    }

    /// `CVS/Entries` path governing `file`
    pub fn entries_path(file: &Path) -> EntriesResult<PathBuf> {
        let (dir, _) = split(file)?;
        Ok(dir.join(ADMIN_DIR).join(ENTRIES_FILE))
    }

    fn read_lines(path: &Path) -> EntriesResult<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_lines(admin: &Path, path: &Path, lines: &[String]) -> EntriesResult<()> {
        let mut tmp = NamedTempFile::new_in(admin)?;
        for line in lines {
            writeln!(tmp, "{line}")?;
        }
        tmp.flush()?;
        tmp.persist(path).map_err(|e| EntriesError::Io(e.error))?;
        Ok(())
    }
}

fn split(file: &Path) -> EntriesResult<(&Path, &str)> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EntriesError::InvalidPath(file.to_path_buf()))?;
    let dir = file
        .parent()
        .ok_or_else(|| EntriesError::InvalidPath(file.to_path_buf()))?;
    Ok((dir, name))
}

/// Replace the file entry named `name`, or append when there is none.
///
/// Lines that don't parse are carried over untouched.
fn upsert(lines: Vec<String>, entry: &Entry, path: &Path) -> Vec<String> {
    let mut replaced = false;
    let mut out: Vec<String> = lines
        .into_iter()
        .map(|line| match Entry::parse(&line) {
            Ok(existing) if !existing.is_directory() && existing.name() == entry.name() => {
                replaced = true;
                entry.to_string()
            }
            Ok(_) => line,
            Err(e) => {
                warn!(path = %path.display(), line, error = %e, "keeping unparseable entries line");
                line
            }
        })
        .collect();

    if !replaced {
        out.push(entry.to_string());
    }
    out
}

impl EntriesStore for FsEntriesStore {
    fn set_entry(&self, file: &Path, entry: &Entry) -> EntriesResult<()> {
        let (dir, _) = split(file)?;
        let admin = dir.join(ADMIN_DIR);
        fs::create_dir_all(&admin)?;

        let lock_file = fs::File::create(admin.join(LOCK_FILE))?;
        lock_file.lock_exclusive()?;

        let path = admin.join(ENTRIES_FILE);
        let result = Self::read_lines(&path).and_then(|lines| {
            let lines = upsert(lines, entry, &path);
            Self::write_lines(&admin, &path, &lines)
        });

        let _ = lock_file.unlock();

        if result.is_ok() {
            debug!(path = %path.display(), entry = %entry, "entry stored");
        }
        result
    }

    fn get_entry(&self, file: &Path) -> EntriesResult<Option<Entry>> {
        let (dir, name) = split(file)?;
        let path = dir.join(ADMIN_DIR).join(ENTRIES_FILE);

        for line in Self::read_lines(&path)? {
            let entry = Entry::parse(&line).map_err(|source| EntriesError::Malformed {
                path: path.clone(),
                source,
            })?;
            if !entry.is_directory() && entry.name() == name {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}
