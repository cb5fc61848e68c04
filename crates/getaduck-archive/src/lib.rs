//! Pull a single named file out of a zip archive.
//!
//! # Platform Behavior
//!
//! **Unix**: the entry's recorded permission bits are applied to the
//! extracted file.
//!
//! **Windows (non-Unix)**: permission bits are ignored.

pub use error::{Error, Result};
pub use extract::{entry_names, extract_entry, extract_nested};

mod error;
mod extract;
