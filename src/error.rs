use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum MergecatError {
    #[error("Root directory not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error at {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Invalid UTF-8 in {} at byte {valid_up_to}", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },
    #[error("Failed to write merged output: {0}")]
    Write(#[source] std::io::Error),
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl MergecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MergecatError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn walk(root: &std::path::Path, err: ignore::Error) -> Self {
        let path = walk_error_path(&err).unwrap_or(root).to_path_buf();
        let message = err.to_string();
        match err.into_io_error() {
            Some(source) => MergecatError::Io { path, source },
            None => MergecatError::Walk { path, message },
        }
    }
}
fn walk_error_path(err: &ignore::Error) -> Option<&std::path::Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}
