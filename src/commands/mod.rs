//! Subcommand implementations

pub mod annotate;
pub mod checkin;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use cvs_decode::infrastructure::BufLineReader;
use cvs_decode::ClientConfig;

/// Resolve configuration: file (explicit or discovered), env, then CLI flags
pub fn load_config(explicit: Option<&Path>, local_dir: Option<PathBuf>) -> Result<ClientConfig> {
    let (mut config, warnings) =
        ClientConfig::load_or_default(explicit).context("failed to load configuration")?;

    for warning in warnings {
        warn!(
            file = %warning.file.display(),
            line = ?warning.line,
            "unknown config key '{}' is ignored",
            warning.key
        );
    }

    if let Some(dir) = local_dir {
        config.local_dir = dir;
    }
    Ok(config)
}

/// Open a transcript file, or stdin for `-`
pub fn open_transcript(path: &Path) -> Result<BufLineReader<Box<dyn BufRead>>> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(path)
            .with_context(|| format!("failed to open transcript {}", path.display()))?;
        Box::new(BufReader::new(file))
    };
    Ok(BufLineReader::new(reader))
}
