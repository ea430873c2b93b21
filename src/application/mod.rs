//! Application Layer
//!
//! Orchestrates one client command: server responses are decoded by the
//! response layer, side effects go through infrastructure ports, and
//! command output feeds the command's builder.
//!
//! ## Use Cases
//!
//! - `CommandSession` - runs a response stream to completion for one command

pub mod session;

pub use session::CommandSession;
