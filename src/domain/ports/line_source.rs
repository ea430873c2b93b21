//! LineSource port - sequential access to server response lines
//!
//! The transport delivers a stream already positioned just past a
//! response keyword. Responses pull their fixed arguments from it.

use std::io;

/// Blocking, line-at-a-time reader over the server stream
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Truncation (EOF before a complete line) is an error with kind
    /// `UnexpectedEof`, never an empty string.
    fn read_line(&mut self) -> io::Result<String>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}
