use crate::error::MergecatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
/// How bytes that are not valid UTF-8 are handled when a source file is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Fail the run with [`MergecatError::Decode`].
    Strict,
    /// Substitute U+FFFD for every invalid sequence.
    #[default]
    Replace,
    /// Remove invalid sequences and keep the rest.
    Drop,
}
/// What happens when a collected file can no longer be read at merge time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    #[default]
    Abort,
    Skip,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergecatOptions {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub include_names: Vec<String>,
    pub include_globs: Vec<String>,
    pub decode_policy: DecodePolicy,
    pub on_read_error: ReadErrorPolicy,
}
impl Default for MergecatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_path: PathBuf::from("merged.txt"),
            include_names: ["Makefile", "go.mod", "go.sum"]
                .into_iter()
                .map(String::from)
                .collect(),
            include_globs: ["*.go", "*.mk", "*.proto"]
                .into_iter()
                .map(String::from)
                .collect(),
            decode_policy: DecodePolicy::Replace,
            on_read_error: ReadErrorPolicy::Abort,
        }
    }
}
impl MergecatOptions {
    /// Loads options from a JSON file. Fields absent from the file keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MergecatError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| MergecatError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| MergecatError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
#[derive(Debug, Default)]
pub struct MergecatBuilder {
    options: MergecatOptions,
}
impl MergecatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: MergecatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn from_options(options: MergecatOptions) -> Self {
        Self { options }
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = root.into();
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = path.into();
        self
    }
    pub fn include_names(mut self, names: Vec<String>) -> Self {
        self.options.include_names = names;
        self
    }
    pub fn include_globs(mut self, patterns: Vec<String>) -> Self {
        self.options.include_globs = patterns;
        self
    }
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.options.decode_policy = policy;
        self
    }
    pub fn on_read_error(mut self, policy: ReadErrorPolicy) -> Self {
        self.options.on_read_error = policy;
        self
    }
    pub fn build(self) -> MergecatOptions {
        self.options
    }
}
