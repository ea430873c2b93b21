//! Server responses
//!
//! Each response kind decodes the lines that follow its keyword and
//! applies its effects through [`ResponseServices`]. Responses hold no
//! state between invocations.

mod checked_in;
mod dispatch;
mod message;
mod terminal;

pub use checked_in::CheckedInResponse;
pub use dispatch::{process_responses, ArgumentLineSource, ResponseKind};
pub use message::MessageResponse;
pub use terminal::{ErrorResponse, OkResponse};

use crate::domain::ports::{LineSource, ResponseServices};
use crate::error::ProtocolResult;

/// Decoder for one response kind.
pub trait Response {
    /// Consume this response's lines from `reader` and apply its effects.
    ///
    /// The reader is positioned just past the keyword. Read failures are
    /// returned as [`ProtocolError::Io`](crate::error::ProtocolError::Io).
    fn process(
        &self,
        reader: &mut dyn LineSource,
        services: &mut dyn ResponseServices,
    ) -> ProtocolResult<()>;

    /// Whether reading of responses stops after this one (`ok`, `error`)
    fn is_terminal_response(&self) -> bool {
        false
    }
}
