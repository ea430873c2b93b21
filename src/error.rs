//! Error types for cvs-decode
//!
//! Uses `thiserror` for library errors. Binaries wrap these in `anyhow`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::EntryParseError;
use crate::domain::ports::EntriesError;

/// Result type alias for response processing
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Failure raised while decoding a server response.
///
/// Only structural failures surface here. Spool trouble inside a builder
/// and excluded paths are handled where they happen and never reach the
/// caller.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// A required line could not be read (truncation, EOF, transport failure)
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The entries line of a response could not be parsed
    #[error("malformed entries line {line:?}: {source}")]
    MalformedEntry {
        line: String,
        #[source]
        source: EntryParseError,
    },

    /// The server sent a response keyword this client does not handle
    #[error("unexpected response '{name}' from server")]
    UnexpectedResponse { name: String },

    /// The server terminated the command with an `error` response
    #[error("server reported an error: {message}")]
    Server { message: String },

    /// Administrative store rejected an update
    #[error("failed to update administrative entry: {0}")]
    Store(#[from] EntriesError),
}

impl From<io::Error> for ProtocolError {
    fn from(source: io::Error) -> Self {
        ProtocolError::Io {
            message: source.to_string(),
            source,
        }
    }
}

/// Errors raised while loading client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    #[error("invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_error_keeps_message_and_cause() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "stream ended mid-response");
        let err: ProtocolError = io_err.into();

        assert_eq!(err.to_string(), "stream ended mid-response");
        let source = err.source().unwrap();
        let source = source.downcast_ref::<io::Error>().unwrap();
        assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn unexpected_response_display() {
        let err = ProtocolError::UnexpectedResponse {
            name: "Mbinary".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected response 'Mbinary' from server");
    }

    #[test]
    fn config_parse_display() {
        let err = ConfigError::Parse {
            file: PathBuf::from("cvs-decode.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in cvs-decode.toml: expected a table"
        );
    }
}
