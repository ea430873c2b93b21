//! Configuration module for cvs-decode
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CVS_DECODE_*)
//! 3. Project config (./cvs-decode.toml)
//! 4. User config (~/.config/cvs-decode/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::ClientConfig;
