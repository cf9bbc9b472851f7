//! Select failed exchanges from a capture and derive their report snippets.

use super::parse::{Capture, HarEntry, HarResponse};

/// Status at or above which a response counts as failed.
pub const DEFAULT_FAILURE_STATUS: u16 = 400;

/// Maximum snippet length in characters before truncation.
pub const DEFAULT_SNIPPET_CHARS: usize = 200;

/// Appended to a snippet that was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Substituted when the response body is absent or malformed.
pub const UNREADABLE_CONTENT: &str = "Could not read content";

/// Read-only view of one failed exchange, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequestSummary<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub status: i64,
    pub status_text: &'a str,
    pub snippet: String,
}

/// Filter thresholds for [`failed_requests`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureFilter {
    pub min_status: u16,
    pub max_snippet_chars: usize,
}

impl Default for FailureFilter {
    fn default() -> Self {
        Self {
            min_status: DEFAULT_FAILURE_STATUS,
            max_snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

/// Lazily yields a summary for every entry with `status >= filter.min_status`,
/// in capture order.
pub fn failed_requests<'a>(
    capture: &'a Capture,
    filter: FailureFilter,
) -> impl Iterator<Item = FailedRequestSummary<'a>> + 'a {
    capture
        .entries()
        .iter()
        .filter(move |e| e.response.status >= i64::from(filter.min_status))
        .map(move |e| summarize(e, filter.max_snippet_chars))
}

fn summarize(entry: &HarEntry, max_chars: usize) -> FailedRequestSummary<'_> {
    FailedRequestSummary {
        method: &entry.request.method,
        url: &entry.request.url,
        status: entry.response.status,
        status_text: &entry.response.status_text,
        snippet: body_snippet(&entry.response, max_chars),
    }
}

/// Body text capped at `max_chars` characters, or [`UNREADABLE_CONTENT`].
pub fn body_snippet(response: &HarResponse, max_chars: usize) -> String {
    match response.body_text() {
        Some(text) => truncate_chars(text, max_chars),
        None => {
            tracing::debug!(
                status = response.status,
                "response content missing or not a string"
            );
            UNREADABLE_CONTENT.to_string()
        }
    }
}

/// Keeps the first `max_chars` characters; appends [`TRUNCATION_MARKER`] if anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
