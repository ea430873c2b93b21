//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

pub mod entries;

pub use entries::FsEntriesStore;
