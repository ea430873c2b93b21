//! `cvs annotate` output
//!
//! The server prints, per file, a marker on the diagnostic channel, a row
//! of asterisks, then one data line per source line:
//!
//! ```text
//! E Annotations for src/main.c
//! E ***************
//! M 1.1          (alice    12-Mar-24): int main(void)
//! ```

mod builder;
mod record;

pub use builder::{AnnotateBuilder, ANNOTATIONS_MARKER, SEPARATOR};
pub use record::AnnotateRecord;
