//! # Treedump
//!
//! `treedump` walks a directory tree and concatenates the text of every file it
//! finds into a single dump, one block per file:
//!
//! ```text
//! File: src/main.rs
//! ================================================================================
//! fn main() {}
//!
//! ================================================================================
//!
//! ```
//!
//! Names in the skip set are matched exactly against each entry's base name.
//! A skipped directory is pruned from the walk, so nothing beneath it is read.
//! Files that cannot be read as UTF-8 text still get a block, with an
//! `[Error reading file: ...]` line in place of their content.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treedump::{DumpBuilder, dump};
//!
//! let options = DumpBuilder::new(".")
//!     .skip("target")
//!     .output("project_contents.txt")
//!     .build();
//!
//! dump(&options).expect("Failed to dump directory");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{DumpEntries, dump, dump_into, entries};
pub use error::{ReadError, TreedumpError};
pub use options::{DEFAULT_OUTPUT, DEFAULT_SKIP, DumpBuilder, DumpOptions, Overrides};
pub use types::DumpEntry;
