use crate::error::TreedumpError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Names skipped when no explicit skip set is given.
pub const DEFAULT_SKIP: &[&str] = &[
    ".git",
    "node_modules",
    ".next",
    ".DS_Store",
    ".env",
    ".env.local",
    "package-lock.json",
    "yarn.lock",
];

pub const DEFAULT_OUTPUT: &str = "project_contents.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    pub root: PathBuf,
    /// Base names pruned from the walk. Matched exactly, never as a path or glob.
    pub skip: BTreeSet<String>,
    pub output: PathBuf,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
/// Fields a config file may set. Absent fields keep whatever the base had.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PartialOptions {
    root: Option<PathBuf>,
    skip: Option<BTreeSet<String>>,
    output: Option<PathBuf>,
}
impl DumpOptions {
    /// Loads options from a JSON file. Fields left out take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TreedumpError> {
        Self::default().merge_json_file(path)
    }
    /// Overlays the fields present in a JSON file onto `self`.
    pub fn merge_json_file(mut self, path: impl AsRef<Path>) -> Result<Self, TreedumpError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| TreedumpError::io(path, e))?;
        let partial: PartialOptions =
            serde_json::from_str(&raw).map_err(|e| TreedumpError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if let Some(root) = partial.root {
            self.root = root;
        }
        if let Some(skip) = partial.skip {
            self.skip = skip;
        }
        if let Some(output) = partial.output {
            self.output = output;
        }
        Ok(self)
    }
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip.contains(name)
    }
}
/// Command-line settings layered over the defaults and an optional config file.
///
/// Precedence, lowest first: built-in defaults (or an empty skip set when
/// `no_default_skips` is set), the config file, then the explicit fields here.
/// Names in `skip` are added to whatever skip set the lower layers produced.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub no_default_skips: bool,
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip: Vec<String>,
}
impl Overrides {
    pub fn resolve(self) -> Result<DumpOptions, TreedumpError> {
        let mut base = DumpOptions::default();
        if self.no_default_skips {
            base.skip.clear();
        }
        if let Some(path) = &self.config {
            base = base.merge_json_file(path)?;
        }
        let mut builder = DumpBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        for name in self.skip {
            builder = builder.skip(name);
        }
        Ok(builder.build())
    }
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DumpOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: DumpOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn skip(mut self, name: impl Into<String>) -> Self {
        self.options.skip.insert(name.into());
        self
    }
    pub fn skip_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.skip = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn no_default_skips(mut self) -> Self {
        self.options.skip.clear();
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
