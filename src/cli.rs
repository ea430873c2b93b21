use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cvs-decode - replay CVS server responses into records and entries
#[derive(Parser, Debug)]
#[command(name = "cvs-decode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./cvs-decode.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Working-tree root; overrides the configured local_dir
    #[arg(long, global = true)]
    pub local_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode `cvs annotate` output into per-file annotation records
    Annotate {
        /// Recorded server responses, or '-' for stdin
        transcript: PathBuf,
    },

    /// Apply `Checked-in` confirmations to the working tree's CVS/Entries
    Checkin {
        /// Recorded server responses, or '-' for stdin
        transcript: PathBuf,
    },
}
