//! cvs-decode CLI - replay CVS server responses
//!
//! Usage: cvs-decode [OPTIONS] <COMMAND>
//!
//! Commands:
//!   annotate  Decode annotate output into NDJSON annotation records
//!   checkin   Apply check-in confirmations to CVS/Entries

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "CVS_DECODE_LOG";

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.local_dir)?;

    match cli.command {
        Commands::Annotate { transcript } => commands::annotate::cmd_annotate(&config, &transcript),
        Commands::Checkin { transcript } => commands::checkin::cmd_checkin(&config, &transcript),
    }
}
