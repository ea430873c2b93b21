use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use cvs_decode::infrastructure::{FsEntriesStore, JsonEventSink, LocalPathResolver};
use cvs_decode::{AnnotateBuilder, ClientConfig, CommandSession};

pub fn cmd_annotate(config: &ClientConfig, transcript: &Path) -> Result<()> {
    let mut reader = super::open_transcript(transcript)?;

    let sink = Arc::new(JsonEventSink::stdout());
    let builder = AnnotateBuilder::new(sink, &config.local_dir, &config.temp_dir);
    let mut session = CommandSession::new(
        LocalPathResolver::new(&config.local_dir),
        config.exclusion()?,
        FsEntriesStore::new(),
        builder,
    );

    session
        .run(&mut reader)
        .with_context(|| format!("annotate transcript {}", transcript.display()))
}
