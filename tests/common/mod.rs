//! Common test utilities for cvs-decode integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working tree and spool directory, plus CLI helpers
//! - Fixtures: Recorded server transcripts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
