use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use cvs_decode::infrastructure::{FsEntriesStore, JsonEventSink, LocalPathResolver};
use cvs_decode::{ClientConfig, CommandSession, LogBuilder};

pub fn cmd_checkin(config: &ClientConfig, transcript: &Path) -> Result<()> {
    let mut reader = super::open_transcript(transcript)?;

    let mut session = CommandSession::new(
        LocalPathResolver::new(&config.local_dir),
        config.exclusion()?,
        FsEntriesStore::new(),
        LogBuilder::new(),
    )
    .with_event_sink(Arc::new(JsonEventSink::stdout()));

    session
        .run(&mut reader)
        .with_context(|| format!("checkin transcript {}", transcript.display()))
}
