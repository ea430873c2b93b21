//! `Checked-in` - the server accepted a file (commit, add, remove)
//!
//! ```text
//! Checked-in src/
//! /cvsroot/project/src/main.c
//! /main.c/1.5///
//! ```

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use super::Response;
use crate::domain::entities::{format_last_modified, Entry, DUMMY_TIMESTAMP};
use crate::domain::ports::{LineSource, ResponseServices};
use crate::error::{ProtocolError, ProtocolResult};

/// Updates the administrative entry of a file the server just accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedInResponse;

impl Response for CheckedInResponse {
    fn process(
        &self,
        reader: &mut dyn LineSource,
        services: &mut dyn ResponseServices,
    ) -> ProtocolResult<()> {
        let local_path = reader.read_line()?;
        let repository_path = reader.read_line()?;
        let entries_line = reader.read_line()?;

        let abs_path = services.convert_pathname(&local_path, &repository_path);
        if services.is_excluded(&abs_path) {
            debug!(path = %abs_path.display(), "checked-in file is excluded, entry left untouched");
            return Ok(());
        }

        let mut entry = Entry::parse(&entries_line).map_err(|source| ProtocolError::MalformedEntry {
            line: entries_line.clone(),
            source,
        })?;

        // The timestamp slot records the file's mtime so later commands can
        // tell an untouched file from a modified one.
        if entry.is_new_user_file() || entry.is_user_file_to_be_removed() {
            entry.set_conflict(DUMMY_TIMESTAMP);
        } else {
            entry.set_conflict(format_last_modified(last_modified(&abs_path)));
        }

        debug!(path = %abs_path.display(), entry = %entry, "checked-in");
        services.set_entry(&abs_path, entry)?;
        Ok(())
    }
}

/// Modification time of `path`, or the epoch when it cannot be read
fn last_modified(path: &Path) -> SystemTime {
    match fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(time) => time,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot stat checked-in file");
            UNIX_EPOCH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::EntriesResult;
    use crate::infrastructure::line_reader::BufLineReader;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::tempdir;

    struct FakeServices {
        root: PathBuf,
        excluded: bool,
        written: Vec<(PathBuf, Entry)>,
    }

    impl FakeServices {
        fn new(root: &Path) -> Self {
            Self {
                root: root.to_path_buf(),
                excluded: false,
                written: Vec::new(),
            }
        }
    }

    impl ResponseServices for FakeServices {
        fn convert_pathname(&self, local_path: &str, repository_path: &str) -> PathBuf {
            let name = repository_path.rsplit('/').next().unwrap_or(repository_path);
            self.root.join(local_path.trim_start_matches("./")).join(name)
        }

        fn is_excluded(&self, _path: &Path) -> bool {
            self.excluded
        }

        fn set_entry(&mut self, path: &Path, entry: Entry) -> EntriesResult<()> {
            self.written.push((path.to_path_buf(), entry));
            Ok(())
        }

        fn message(&mut self, _line: &str, _is_error: bool) {}
    }

    fn reader(text: &str) -> BufLineReader<Cursor<Vec<u8>>> {
        BufLineReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn stores_entry_with_file_mtime() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("main.c"), "int main;").unwrap();
        let mut services = FakeServices::new(dir.path());

        CheckedInResponse
            .process(
                &mut reader("./\n/cvsroot/proj/main.c\n/main.c/1.5///\n"),
                &mut services,
            )
            .unwrap();

        assert_eq!(services.written.len(), 1);
        let (path, entry) = &services.written[0];
        assert_eq!(path, &dir.path().join("main.c"));
        assert_eq!(entry.revision(), "1.5");

        let mtime = std::fs::metadata(path).unwrap().modified().unwrap();
        assert_eq!(entry.conflict(), format_last_modified(mtime));
    }

    #[test]
    fn new_file_gets_dummy_timestamp() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("added.c"), "x").unwrap();
        let mut services = FakeServices::new(dir.path());

        CheckedInResponse
            .process(
                &mut reader("./\n/cvsroot/proj/added.c\n/added.c/0///\n"),
                &mut services,
            )
            .unwrap();

        assert_eq!(services.written[0].1.conflict(), DUMMY_TIMESTAMP);
    }

    #[test]
    fn removed_file_gets_dummy_timestamp_even_when_missing() {
        let dir = tempdir().unwrap();
        let mut services = FakeServices::new(dir.path());

        CheckedInResponse
            .process(
                &mut reader("./\n/cvsroot/proj/gone.c\n/gone.c/-1.4///\n"),
                &mut services,
            )
            .unwrap();

        assert_eq!(services.written[0].1.conflict(), DUMMY_TIMESTAMP);
    }

    #[test]
    fn excluded_path_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut services = FakeServices::new(dir.path());
        services.excluded = true;

        CheckedInResponse
            .process(
                &mut reader("./\n/cvsroot/proj/main.c\n/main.c/1.5///\n"),
                &mut services,
            )
            .unwrap();

        assert!(services.written.is_empty());
    }

    #[test]
    fn truncated_response_is_io_error_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut services = FakeServices::new(dir.path());

        let err = CheckedInResponse
            .process(&mut reader("./\n/cvsroot/proj/main.c\n"), &mut services)
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Io { .. }));
        assert!(services.written.is_empty());
    }

    #[test]
    fn malformed_entries_line_is_rejected() {
        let dir = tempdir().unwrap();
        let mut services = FakeServices::new(dir.path());

        let err = CheckedInResponse
            .process(
                &mut reader("./\n/cvsroot/proj/main.c\nnot an entry\n"),
                &mut services,
            )
            .unwrap_err();

        assert!(matches!(err, ProtocolError::MalformedEntry { .. }));
        assert!(services.written.is_empty());
    }

    #[test]
    fn checked_in_is_not_terminal() {
        assert!(!CheckedInResponse.is_terminal_response());
    }
}
