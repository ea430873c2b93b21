//! Log builder - forwards command output to the tracing log
//!
//! Used for commands whose textual output carries no domain objects,
//! such as `commit`, where only the check-in responses matter.

use tracing::{info, warn};

use super::Builder;

/// Logs each output line and counts them per channel
#[derive(Debug, Default)]
pub struct LogBuilder {
    data_lines: usize,
    diagnostic_lines: usize,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_lines(&self) -> usize {
        self.data_lines
    }

    pub fn diagnostic_lines(&self) -> usize {
        self.diagnostic_lines
    }
}

impl Builder for LogBuilder {
    fn parse_line(&mut self, line: &str, is_error_message: bool) {
        if is_error_message {
            self.diagnostic_lines += 1;
            warn!(target: "cvs_decode::server", "{line}");
        } else {
            self.data_lines += 1;
            info!(target: "cvs_decode::server", "{line}");
        }
    }

    fn output_done(&mut self) {
        info!(
            data = self.data_lines,
            diagnostics = self.diagnostic_lines,
            "command output finished"
        );
    }
}
