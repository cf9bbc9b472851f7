//! HAR (HTTP Archive) loading and failed-request selection.
//!
//! Parses browser-exported captures and picks out the exchanges whose
//! response status marks a failure, with a bounded snippet of each body.

mod error;
mod failures;
mod load;
mod parse;

pub use error::HarError;
pub use failures::{
    body_snippet, failed_requests, truncate_chars, FailedRequestSummary, FailureFilter,
    DEFAULT_FAILURE_STATUS, DEFAULT_SNIPPET_CHARS, TRUNCATION_MARKER, UNREADABLE_CONTENT,
};
pub use load::{load_capture, parse_capture};
pub use parse::{Capture, HarEntry, HarLog, HarRequest, HarResponse};
