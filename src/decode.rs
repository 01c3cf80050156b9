//! Internal module turning raw file bytes into text under a [`DecodePolicy`].

use crate::error::MergecatError;
use crate::options::DecodePolicy;
use std::path::Path;
use tracing::warn;

/// Decoded file text, plus whether invalid sequences had to be recovered.
pub(crate) struct Decoded {
    pub text: String,
    pub lossy: bool,
}

/// Decodes `bytes` as UTF-8.
///
/// Valid input is returned unchanged whatever the policy. Invalid input fails under
/// [`DecodePolicy::Strict`] and is recovered otherwise.
pub(crate) fn decode(
    path: &Path,
    bytes: Vec<u8>,
    policy: DecodePolicy,
) -> Result<Decoded, MergecatError> {
    let err = match String::from_utf8(bytes) {
        Ok(text) => return Ok(Decoded { text, lossy: false }),
        Err(err) => err,
    };
    let valid_up_to = err.utf8_error().valid_up_to();
    let bytes = err.into_bytes();
    let text = match policy {
        DecodePolicy::Strict => {
            return Err(MergecatError::Decode {
                path: path.to_path_buf(),
                valid_up_to,
            });
        }
        DecodePolicy::Replace => String::from_utf8_lossy(&bytes).into_owned(),
        DecodePolicy::Drop => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    };
    warn!(
        "Invalid UTF-8 in {} at byte {} (looks like {:?}), recovered with {:?}",
        path.display(),
        valid_up_to,
        content_inspector::inspect(&bytes),
        policy
    );
    Ok(Decoded { text, lossy: true })
}
