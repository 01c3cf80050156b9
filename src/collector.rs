use crate::error::MergecatError;
use crate::options::MergecatOptions;
use crate::rules::IncludeRules;
use crate::types::SourcePath;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs::{self, FileType};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace, warn};

/// Walks a root directory and returns the included files in byte order, one entry per
/// resolved file.
#[derive(Debug, Clone)]
pub struct Collector {
    rules: IncludeRules,
    exclude: Option<PathBuf>,
}

impl Collector {
    pub fn new(rules: IncludeRules) -> Self {
        Self {
            rules,
            exclude: None,
        }
    }

    /// Builds a collector from the configured rules, excluding the configured output file.
    pub fn from_options(options: &MergecatOptions) -> Result<Self, MergecatError> {
        let rules = IncludeRules::new(&options.include_names, &options.include_globs)?;
        Ok(Self::new(rules).exclude(&options.output_path))
    }

    /// Never yields `path`, even if it matches. Has no effect while `path` does not exist.
    pub fn exclude(mut self, path: &Path) -> Self {
        self.exclude = fs::canonicalize(path).ok();
        self
    }

    pub fn collect(&self, root: &Path) -> Result<Vec<SourcePath>, MergecatError> {
        check_root(root)?;
        if self.rules.is_empty() {
            warn!("No include names or glob patterns configured, nothing will be collected");
        }
        debug!("Collecting files under {}", root.display());
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(None);
        let mut candidates = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| MergecatError::walk(root, e))?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }
            if !self.rules.matches(entry.path()) {
                trace!("Not included: {}", entry.path().display());
                continue;
            }
            if !is_regular_file(entry.path(), file_type) {
                continue;
            }
            candidates.push(SourcePath::new(without_cur_dir(entry.into_path())));
        }
        candidates.sort();
        self.dedup(candidates)
    }

    // Keeps the first path (in byte order) of every resolved file.
    fn dedup(&self, sorted: Vec<SourcePath>) -> Result<Vec<SourcePath>, MergecatError> {
        let mut seen = HashSet::with_capacity(sorted.len());
        let mut files = Vec::with_capacity(sorted.len());
        for path in sorted {
            let resolved = fs::canonicalize(path.as_path())
                .map_err(|e| MergecatError::io(path.as_path(), e))?;
            if self.exclude.as_deref() == Some(resolved.as_path()) {
                debug!("Skipping output file {}", path);
                continue;
            }
            if !seen.insert(resolved) {
                debug!("Duplicate of an earlier path: {}", path);
                continue;
            }
            files.push(path);
        }
        debug!("Collected {} files", files.len());
        Ok(files)
    }
}

/// Collects the files `options` selects under `options.root`.
///
/// # Errors
///
/// Fails on a missing or non-directory root, an invalid glob pattern, or any error while
/// listing a directory. Nothing is returned for a partial traversal.
pub fn collect_files(options: &MergecatOptions) -> Result<Vec<SourcePath>, MergecatError> {
    Collector::from_options(options)?.collect(&options.root)
}

fn check_root(root: &Path) -> Result<(), MergecatError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(MergecatError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(MergecatError::NotFound {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(MergecatError::io(root, e)),
    }
}

// `./src/x.go` is reported as `src/x.go`. The prefix is shared by every walked path, so
// byte order is unaffected.
fn without_cur_dir(path: PathBuf) -> PathBuf {
    if !path.components().any(|c| c == Component::CurDir) {
        return path;
    }
    path.components().filter(|c| *c != Component::CurDir).collect()
}

fn is_regular_file(path: &Path, file_type: FileType) -> bool {
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        debug!("Special file skipped: {}", path.display());
        return false;
    }
    match fs::metadata(path) {
        Ok(target) => target.is_file(),
        Err(e) => {
            debug!("Dangling symlink skipped: {} ({})", path.display(), e);
            false
        }
    }
}
