//! Rendering of dump blocks.
//!
//! Every visited file becomes one block: a `File:` header with the root-relative
//! path, a separator line, the file's content (or an error placeholder), and a
//! closing separator. Content is written byte for byte as read.

use crate::types::DumpEntry;
use std::io::{self, Write};

/// The 80-column rule framing each file's content.
pub const SEPARATOR: &str =
    "================================================================================";

/// Writes one block for `entry`.
pub fn write_entry<W: Write>(writer: &mut W, entry: &DumpEntry) -> io::Result<()> {
    write!(writer, "File: {}\n{}\n", entry.path.display(), SEPARATOR)?;
    match &entry.content {
        Ok(content) => writer.write_all(content.as_bytes())?,
        Err(e) => writeln!(writer, "[Error reading file: {}]", e)?,
    }
    write!(writer, "\n\n{}\n\n", SEPARATOR)
}

/// Renders one block into a string.
pub fn format_entry(entry: &DumpEntry) -> String {
    let mut out = Vec::with_capacity(256);
    // Writing into a Vec cannot fail.
    let _ = write_entry(&mut out, entry);
    String::from_utf8_lossy(&out).into_owned()
}
