//! `ok` / `error` - the end of a command's responses

use super::Response;
use crate::domain::ports::{LineSource, ResponseServices};
use crate::error::{ProtocolError, ProtocolResult};

/// The command completed successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkResponse;

impl Response for OkResponse {
    fn process(
        &self,
        _reader: &mut dyn LineSource,
        _services: &mut dyn ResponseServices,
    ) -> ProtocolResult<()> {
        Ok(())
    }

    fn is_terminal_response(&self) -> bool {
        true
    }
}

/// The command failed. The rest of the line is the server's message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponse;

impl Response for ErrorResponse {
    fn process(
        &self,
        reader: &mut dyn LineSource,
        services: &mut dyn ResponseServices,
    ) -> ProtocolResult<()> {
        let line = reader.read_line()?;
        // "error <errno-code> <text>"; the code is often blank
        let message = line.trim().to_string();
        if !message.is_empty() {
            services.message(&message, true);
        }
        Err(ProtocolError::Server { message })
    }

    fn is_terminal_response(&self) -> bool {
        true
    }
}
