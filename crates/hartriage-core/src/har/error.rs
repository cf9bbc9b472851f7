//! Errors raised while loading a capture.

use std::io;
use std::path::PathBuf;

/// Failure to turn a HAR file into a [`Capture`](super::Capture).
#[derive(Debug, thiserror::Error)]
pub enum HarError {
    /// File missing or unreadable.
    #[error("read HAR file {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Not valid JSON, or JSON that cannot be a HAR capture.
    #[error("parse HAR JSON {}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
