use crate::error::{ReadError, TreedumpError};
use crate::options::DumpOptions;
use crate::output::write_entry;
use crate::types::DumpEntry;
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &DumpOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(None);
        let options = options.clone();
        // Filtered directories are never descended into.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let keep = entry
                .file_name()
                .to_str()
                .is_none_or(|name| !options.is_skipped(name));
            #[cfg(feature = "logging")]
            if !keep {
                tracing::debug!("Skipping {}", entry.path().display());
            }
            keep
        });
        Self {
            inner: builder.build(),
        }
    }
}
/// Iterator over the files of a dump, in walk order.
///
/// Yields an error only when a directory cannot be enumerated; unreadable files
/// come through as entries whose `content` is an error.
pub struct DumpEntries {
    inner: ignore::Walk,
    root: PathBuf,
    exclude: Option<PathBuf>,
}
impl DumpEntries {
    /// Leaves out the file at `path` (compared after canonicalisation).
    pub fn excluding(mut self, path: impl AsRef<Path>) -> Self {
        self.exclude = fs::canonicalize(path).ok();
        self
    }
    fn is_excluded(&self, path: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };
        if path.file_name() != exclude.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == exclude)
    }
}
impl Iterator for DumpEntries {
    type Item = Result<DumpEntry, TreedumpError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(TreedumpError::Walk(e.to_string()))),
            };
            if !is_dumpable(&entry) || self.is_excluded(entry.path()) {
                continue;
            }
            let path = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();
            let content = read_text(entry.path());
            #[cfg(feature = "logging")]
            if let Err(e) = &content {
                tracing::warn!("Failed to read {}: {}", entry.path().display(), e);
            }
            return Some(Ok(DumpEntry { path, content }));
        }
    }
}
/// Regular files, and links that do not point at a directory. Dangling links
/// count as files so their failure shows up in the dump.
fn is_dumpable(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
/// Starts a walk over `options.root`.
///
/// # Errors
///
/// Fails if the root does not exist or is not a directory.
pub fn entries(options: &DumpOptions) -> Result<DumpEntries, TreedumpError> {
    let metadata = fs::metadata(&options.root).map_err(|e| TreedumpError::io(&options.root, e))?;
    if !metadata.is_dir() {
        return Err(TreedumpError::InvalidRoot(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }
    let walker = Walker::new(options);
    Ok(DumpEntries {
        inner: walker.inner,
        root: options.root.clone(),
        exclude: None,
    })
}
/// Writes the dump of `options.root` into `writer`.
pub fn dump_into<W: Write>(options: &DumpOptions, writer: W) -> Result<(), TreedumpError> {
    write_all(entries(options)?, writer)
}
/// Writes the dump of `options.root` to `options.output`, truncating it first.
///
/// The output file is left out of the dump if it lies inside the tree.
pub fn dump(options: &DumpOptions) -> Result<(), TreedumpError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Dumping {} into {}",
        options.root.display(),
        options.output.display()
    );
    let walk = entries(options)?;
    let file = File::create(&options.output).map_err(|e| TreedumpError::io(&options.output, e))?;
    write_all(walk.excluding(&options.output), BufWriter::new(file))
}
fn write_all<W: Write>(walk: DumpEntries, mut writer: W) -> Result<(), TreedumpError> {
    #[cfg(feature = "logging")]
    let mut written = 0usize;
    for entry in walk {
        let entry = entry?;
        write_entry(&mut writer, &entry).map_err(TreedumpError::Output)?;
        #[cfg(feature = "logging")]
        {
            written += 1;
        }
    }
    writer.flush().map_err(TreedumpError::Output)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {} blocks", written);
    Ok(())
}
