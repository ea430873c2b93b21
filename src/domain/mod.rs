//! Domain Layer
//!
//! Protocol records and the ports the decoder talks through.
//!
//! ## Structure
//!
//! - `entities/` - Administrative entries and annotate lines
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in `entities/` touches the file system. Side effects go through
//! the traits in `ports/`.

pub mod entities;
pub mod ports;
