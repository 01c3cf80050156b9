//! Writing the merged document.
//!
//! The document is a sequence of blocks, one per collected file, each made of a header
//! marker followed by the file's decoded text:
//!
//! ```text
//! \n\n===== FILE: <path> =====\n\n<content>
//! ```
//!
//! Content is written verbatim, with no trailing delimiter; the next header's leading blank
//! lines separate it from the following block.

use crate::decode::decode;
use crate::options::{DecodePolicy, MergecatOptions, ReadErrorPolicy};
use crate::{MergeReport, MergecatError, SourcePath};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Per-file policies applied while merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSettings {
    pub decode_policy: DecodePolicy,
    pub on_read_error: ReadErrorPolicy,
}

impl From<&MergecatOptions> for MergeSettings {
    fn from(options: &MergecatOptions) -> Self {
        Self {
            decode_policy: options.decode_policy,
            on_read_error: options.on_read_error,
        }
    }
}

/// Returns the header marker written before the content of `path`.
pub fn format_header(path: &SourcePath) -> String {
    format!("\n\n===== FILE: {} =====\n\n", path)
}

/// Writes one block per file to `writer`, in the given order.
///
/// Files are read whole. A file that cannot be read aborts the merge under
/// [`ReadErrorPolicy::Abort`]; whatever was already written stays in `writer`.
pub fn write_merged<W: Write>(
    files: &[SourcePath],
    writer: &mut W,
    settings: &MergeSettings,
) -> Result<MergeReport, MergecatError> {
    let mut report = MergeReport::default();
    for path in files {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => match settings.on_read_error {
                ReadErrorPolicy::Abort => return Err(MergecatError::io(path.as_path(), e)),
                ReadErrorPolicy::Skip => {
                    warn!("Skipping unreadable file {}: {}", path, e);
                    report.skipped.push(path.as_path().to_path_buf());
                    continue;
                }
            },
        };
        let decoded = decode(path.as_path(), bytes, settings.decode_policy)?;
        if decoded.lossy {
            report.lossy.push(path.as_path().to_path_buf());
        }
        let header = format_header(path);
        writer
            .write_all(header.as_bytes())
            .and_then(|()| writer.write_all(decoded.text.as_bytes()))
            .map_err(MergecatError::Write)?;
        debug!("Merged {} ({} bytes)", path, decoded.text.len());
        report.files_written += 1;
        report.bytes_written += (header.len() + decoded.text.len()) as u64;
    }
    Ok(report)
}

/// Creates or truncates `destination` and writes the merged document into it.
pub fn merge(
    files: &[SourcePath],
    destination: impl AsRef<Path>,
    settings: &MergeSettings,
) -> Result<MergeReport, MergecatError> {
    let destination = destination.as_ref();
    let file = File::create(destination).map_err(|e| MergecatError::io(destination, e))?;
    let mut writer = BufWriter::new(file);
    let report = write_merged(files, &mut writer, settings)?;
    writer.flush().map_err(MergecatError::Write)?;
    Ok(report)
}
