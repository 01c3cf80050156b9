//! Inclusion rules: exact file names plus glob patterns on the file-name component.

use crate::error::MergecatError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::Path;

/// A compiled inclusion rule set.
///
/// A file is included when its base name equals one of the exact names, or when the base
/// name matches one of the glob patterns. Patterns never see the directory part of a path,
/// so `*.go` matches `sub/lib.go` through its name `lib.go`.
#[derive(Debug, Clone)]
pub struct IncludeRules {
    names: HashSet<OsString>,
    globs: GlobSet,
}

impl IncludeRules {
    /// Compiles exact names and glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`MergecatError::InvalidPattern`] for a pattern `globset` rejects.
    pub fn new<N, G>(names: N, patterns: G) -> Result<Self, MergecatError>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        G: IntoIterator,
        G::Item: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| MergecatError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
        }
        let globs = builder.build().map_err(|e| MergecatError::InvalidPattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;
        Ok(Self {
            names: names
                .into_iter()
                .map(|n| OsString::from(n.as_ref()))
                .collect(),
            globs,
        })
    }

    /// Tests the file-name component of `path`. Paths without one (`..`, `/`) never match.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        self.names.contains(name) || self.globs.is_match(Path::new(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.globs.is_empty()
    }
}
