//! Command output builders
//!
//! A builder consumes the output lines of one running command and turns
//! them into domain objects, publishing each completed object as a
//! [`ClientEvent`](crate::domain::ports::ClientEvent).

pub mod annotate;
pub mod log;

pub use annotate::{AnnotateBuilder, AnnotateRecord};
pub use log::LogBuilder;

/// Stateful accumulator over a command's output stream.
///
/// Calls arrive in stream order from a single thread; no call is made
/// concurrently with another on the same builder.
pub trait Builder {
    /// Handle one line of output. `is_error_message` marks the diagnostic
    /// channel, where servers print markers and decoration.
    fn parse_line(&mut self, line: &str, is_error_message: bool);

    /// The output stream ended. Finalizes whatever is in progress; a no-op
    /// when nothing is.
    fn output_done(&mut self);

    /// Structured (non-textual) server message. Ignored unless a builder
    /// recognizes `key`.
    fn parse_enhanced_message(&mut self, _key: &str, _value: &serde_json::Value) {}
}

impl<B: Builder + ?Sized> Builder for Box<B> {
    fn parse_line(&mut self, line: &str, is_error_message: bool) {
        (**self).parse_line(line, is_error_message)
    }

    fn output_done(&mut self) {
        (**self).output_done()
    }

    fn parse_enhanced_message(&mut self, key: &str, value: &serde_json::Value) {
        (**self).parse_enhanced_message(key, value)
    }
}
