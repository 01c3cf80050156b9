use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

/// A collected file path.
///
/// Equality and ordering compare the raw bytes of the path string, not its components:
/// `a.go` sorts before `a/x.go` because `.` (0x2E) is smaller than `/` (0x2F), whereas
/// [`PathBuf`]'s own ordering would put the directory first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(PathBuf);

impl SourcePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_os_str().as_encoded_bytes()
    }
}

impl PartialEq for SourcePath {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for SourcePath {}

impl PartialOrd for SourcePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourcePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl AsRef<Path> for SourcePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Summary of one merge run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MergeReport {
    /// Number of (header, content) blocks written.
    pub files_written: usize,
    /// Total bytes written to the output document, headers included.
    pub bytes_written: u64,
    /// Files whose content contained invalid UTF-8 and was recovered by the decode policy.
    pub lossy: Vec<PathBuf>,
    /// Files that could not be read and were left out under [`crate::ReadErrorPolicy::Skip`].
    pub skipped: Vec<PathBuf>,
}
