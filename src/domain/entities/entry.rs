//! Entry entity - one line of a `CVS/Entries` file
//!
//! Grammar: `/name/revision/timestamp[+conflict]/options/tag-or-date`,
//! with directory lines prefixed by `D`. The entity is pure data; reading
//! and writing `Entries` files is handled by the administrative store.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Timestamp slot value for files that have no meaningful mtime yet
/// (scheduled for addition or removal).
pub const DUMMY_TIMESTAMP: &str = "dummy timestamp";

/// Layout of the timestamp slot, e.g. `Mon Jan 01 00:00:00 2024` (UTC).
pub const LAST_MODIFIED_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Format a file modification time the way the timestamp slot expects it.
pub fn format_last_modified(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format(LAST_MODIFIED_FORMAT)
        .to_string()
}

/// Failure to parse an entries line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryParseError {
    #[error("entries line must start with '/' or 'D/': {line:?}")]
    MissingPrefix { line: String },

    #[error("entries line has {found} fields, expected 5: {line:?}")]
    FieldCount { line: String, found: usize },

    #[error("entries line has an empty name: {line:?}")]
    EmptyName { line: String },
}

/// Administrative record for a single file or directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    directory: bool,
    name: String,
    revision: String,
    /// Timestamp slot; carries `+` when the file had merge conflicts
    conflict: String,
    options: String,
    tag_or_date: String,
}

impl Entry {
    /// Create a file entry with an empty timestamp slot
    pub fn new(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            directory: false,
            name: name.into(),
            revision: revision.into(),
            conflict: String::new(),
            options: String::new(),
            tag_or_date: String::new(),
        }
    }

    /// Parse one entries line as sent by the server or stored on disk.
    pub fn parse(line: &str) -> Result<Self, EntryParseError> {
        let (directory, rest) = if let Some(rest) = line.strip_prefix("D/") {
            (true, rest)
        } else if let Some(rest) = line.strip_prefix('/') {
            (false, rest)
        } else {
            return Err(EntryParseError::MissingPrefix {
                line: line.to_string(),
            });
        };

        // The trailing tag-or-date field may itself contain '/'
        let fields: Vec<&str> = rest.splitn(5, '/').collect();
        if fields.len() != 5 {
            return Err(EntryParseError::FieldCount {
                line: line.to_string(),
                found: fields.len(),
            });
        }
        if fields[0].is_empty() {
            return Err(EntryParseError::EmptyName {
                line: line.to_string(),
            });
        }

        Ok(Self {
            directory,
            name: fields[0].to_string(),
            revision: fields[1].to_string(),
            conflict: fields[2].to_string(),
            options: fields[3].to_string(),
            tag_or_date: fields[4].to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    pub fn conflict(&self) -> &str {
        &self.conflict
    }

    pub fn options(&self) -> &str {
        &self.options
    }

    pub fn tag_or_date(&self) -> &str {
        &self.tag_or_date
    }

    pub fn is_directory(&self) -> bool {
        self.directory
    }

    /// Replace the timestamp slot
    pub fn set_conflict(&mut self, conflict: impl Into<String>) {
        self.conflict = conflict.into();
    }

    /// Builder-style variant of [`Entry::set_conflict`]
    pub fn with_conflict(mut self, conflict: impl Into<String>) -> Self {
        self.set_conflict(conflict);
        self
    }

    /// Scheduled for addition (`cvs add` without commit)
    pub fn is_new_user_file(&self) -> bool {
        self.revision == "0"
    }

    /// Scheduled for removal (`cvs remove` without commit)
    pub fn is_user_file_to_be_removed(&self) -> bool {
        self.revision.starts_with('-')
    }

    pub fn had_conflicts(&self) -> bool {
        self.conflict.contains('+')
    }

    pub fn has_dummy_timestamp(&self) -> bool {
        self.conflict == DUMMY_TIMESTAMP
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.directory {
            write!(f, "D")?;
        }
        write!(
            f,
            "/{}/{}/{}/{}/{}",
            self.name, self.revision, self.conflict, self.options, self.tag_or_date
        )
    }
}
