//! Response dispatch loop
//!
//! Reads keyword lines, hands each response its arguments, and stops at
//! the first terminal response.

use std::io;

use tracing::{debug, info};

use super::{CheckedInResponse, ErrorResponse, MessageResponse, OkResponse, Response};
use crate::domain::ports::{LineSource, ResponseServices};
use crate::error::{ProtocolError, ProtocolResult};

static DATA_MESSAGE: MessageResponse = MessageResponse::data();
static DIAGNOSTIC_MESSAGE: MessageResponse = MessageResponse::diagnostic();

/// Response kinds understood by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    CheckedIn,
    Message,
    ErrorMessage,
    Ok,
    Error,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 5] = [
        ResponseKind::CheckedIn,
        ResponseKind::Message,
        ResponseKind::ErrorMessage,
        ResponseKind::Ok,
        ResponseKind::Error,
    ];

    /// Keyword as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            ResponseKind::CheckedIn => "Checked-in",
            ResponseKind::Message => "M",
            ResponseKind::ErrorMessage => "E",
            ResponseKind::Ok => "ok",
            ResponseKind::Error => "error",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn response(&self) -> &'static dyn Response {
        match self {
            ResponseKind::CheckedIn => &CheckedInResponse,
            ResponseKind::Message => &DATA_MESSAGE,
            ResponseKind::ErrorMessage => &DIAGNOSTIC_MESSAGE,
            ResponseKind::Ok => &OkResponse,
            ResponseKind::Error => &ErrorResponse,
        }
    }
}

/// Line source that yields the rest of the keyword line first.
///
/// The keyword and its first argument share a line (`Checked-in src/`);
/// every later argument is a line of its own.
pub struct ArgumentLineSource<'a> {
    first: Option<String>,
    inner: &'a mut dyn LineSource,
}

impl<'a> ArgumentLineSource<'a> {
    pub fn new(first: impl Into<String>, inner: &'a mut dyn LineSource) -> Self {
        Self {
            first: Some(first.into()),
            inner,
        }
    }
}

impl LineSource for ArgumentLineSource<'_> {
    fn read_line(&mut self) -> io::Result<String> {
        match self.first.take() {
            Some(line) => Ok(line),
            None => self.inner.read_line(),
        }
    }
}

/// Process responses until `ok` or `error`.
///
/// Returns `Ok(())` after `ok`; an `error` response surfaces as
/// [`ProtocolError::Server`]. Running out of input before a terminal
/// response is an I/O error.
pub fn process_responses(
    reader: &mut dyn LineSource,
    services: &mut dyn ResponseServices,
) -> ProtocolResult<()> {
    let mut processed = 0usize;
    loop {
        let line = reader.read_line()?;
        let (name, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        let kind = ResponseKind::from_name(name).ok_or_else(|| {
            ProtocolError::UnexpectedResponse {
                name: name.to_string(),
            }
        })?;
        let response = kind.response();

        debug!(response = kind.name(), "processing response");
        let mut arguments = ArgumentLineSource::new(rest, reader);
        let result = response.process(&mut arguments, services);
        processed += 1;

        if response.is_terminal_response() {
            info!(responses = processed, terminal = kind.name(), "response stream finished");
            return result;
        }
        result?;
    }
}
