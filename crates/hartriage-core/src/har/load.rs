//! Read a HAR file from disk into a [`Capture`].

use std::path::Path;

use super::error::HarError;
use super::parse::Capture;

/// Loads and parses the HAR file at `path`.
///
/// The whole file is read before parsing; the handle is closed as soon as the
/// read returns, whether or not parsing later succeeds.
pub fn load_capture(path: &Path) -> Result<Capture, HarError> {
    let bytes = std::fs::read(path).map_err(|source| HarError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let capture = parse_capture(&bytes).map_err(|source| HarError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "loaded HAR capture"
    );
    Ok(capture)
}

/// Parses an in-memory HAR document.
pub fn parse_capture(bytes: &[u8]) -> Result<Capture, serde_json::Error> {
    serde_json::from_slice(bytes)
}
