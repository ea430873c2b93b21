#![no_main]

use std::io::Cursor;
use std::sync::Arc;

use libfuzzer_sys::fuzz_target;

use cvs_decode::domain::ports::{EntriesResult, EntriesStore, NoExclusion, NoopEventSink};
use cvs_decode::infrastructure::{BufLineReader, LocalPathResolver};
use cvs_decode::{AnnotateBuilder, CommandSession, Entry};
use std::path::Path;

struct NullStore;

impl EntriesStore for NullStore {
    fn set_entry(&self, _file: &Path, _entry: &Entry) -> EntriesResult<()> {
        Ok(())
    }

    fn get_entry(&self, _file: &Path) -> EntriesResult<Option<Entry>> {
        Ok(None)
    }
}

fuzz_target!(|data: &[u8]| {
    // Arbitrary server output - decoding must end in Ok or Err, never panic
    let builder = AnnotateBuilder::new(Arc::new(NoopEventSink), "/work", std::env::temp_dir());
    let mut session = CommandSession::new(
        LocalPathResolver::new("/work"),
        NoExclusion,
        NullStore,
        builder,
    );
    let mut reader = BufLineReader::new(Cursor::new(data.to_vec()));
    let _ = session.run(&mut reader);
});
