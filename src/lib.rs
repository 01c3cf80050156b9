//! # Mergecat
//!
//! `mergecat` walks a directory tree, keeps the files selected by a set of exact names and
//! glob patterns, orders them by the bytes of their path, and concatenates them into one
//! text document where every file is preceded by a `===== FILE: <path> =====` marker.
//!
//! The output is reproducible: for an unchanged tree and unchanged rules, two runs write
//! byte-identical documents.
//!
//! # Example
//!
//! ```no_run
//! use mergecat::{DecodePolicy, MergecatBuilder, mergecat};
//!
//! let options = MergecatBuilder::new("src")
//!     .output_path("merged.txt")
//!     .include_names(vec!["Cargo.toml".into()])
//!     .include_globs(vec!["*.rs".into()])
//!     .decode_policy(DecodePolicy::Replace)
//!     .build();
//!
//! let report = mergecat(options).expect("Failed to merge");
//! println!("Merged {} files", report.files_written);
//! ```

mod collector;
mod decode;
mod error;
mod options;
pub mod output;
mod rules;
mod types;

pub use collector::{Collector, collect_files};
pub use error::MergecatError;
pub use options::{DecodePolicy, MergecatBuilder, MergecatOptions, ReadErrorPolicy};
pub use rules::IncludeRules;
pub use types::{MergeReport, SourcePath};

use output::MergeSettings;
use tracing::info;

/// Runs one full merge: collect, order, write.
///
/// Collection finishes before the output file is touched, so a bad root or an unlistable
/// directory leaves any existing output document as it was.
pub fn mergecat(options: MergecatOptions) -> Result<MergeReport, MergecatError> {
    info!(
        "Merging {} into {}",
        options.root.display(),
        options.output_path.display()
    );
    let files = collect_files(&options)?;
    let report = output::merge(&files, &options.output_path, &MergeSettings::from(&options))?;
    info!(
        "Wrote {} files ({} bytes), {} recovered from invalid UTF-8, {} skipped",
        report.files_written,
        report.bytes_written,
        report.lossy.len(),
        report.skipped.len()
    );
    Ok(report)
}
