//! `M` / `E` - one line of command output on the data or diagnostic channel

use super::Response;
use crate::domain::ports::{LineSource, ResponseServices};
use crate::error::ProtocolResult;

/// Forwards a line of output to the running command's builder.
#[derive(Debug, Clone, Copy)]
pub struct MessageResponse {
    is_error: bool,
}

impl MessageResponse {
    /// `M` - data channel
    pub const fn data() -> Self {
        Self { is_error: false }
    }

    /// `E` - diagnostic channel
    pub const fn diagnostic() -> Self {
        Self { is_error: true }
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

impl Response for MessageResponse {
    fn process(
        &self,
        reader: &mut dyn LineSource,
        services: &mut dyn ResponseServices,
    ) -> ProtocolResult<()> {
        let line = reader.read_line()?;
        services.message(&line, self.is_error);
        Ok(())
    }
}
