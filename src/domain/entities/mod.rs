//! Domain Entities
//!
//! - `Entry` - an administrative record from `CVS/Entries`
//! - `AnnotateLine` - one parsed line of annotate output

mod annotate_line;
mod entry;

pub use annotate_line::AnnotateLine;
pub use entry::{format_last_modified, Entry, EntryParseError, DUMMY_TIMESTAMP, LAST_MODIFIED_FORMAT};
