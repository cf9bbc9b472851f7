//! Plain-text report of failed requests.

use std::io::{self, Write};

use crate::har::{failed_requests, Capture, FailedRequestSummary, FailureFilter};

const SEPARATOR_WIDTH: usize = 40;

/// Writes the entry count followed by one block per failed request.
///
/// Returns the number of failures reported.
pub fn write_report<W: Write>(
    out: &mut W,
    capture: &Capture,
    filter: FailureFilter,
) -> io::Result<usize> {
    let failures: Vec<FailedRequestSummary<'_>> = failed_requests(capture, filter).collect();

    writeln!(out, "Total entries: {}", capture.entries().len())?;

    if failures.is_empty() {
        writeln!(
            out,
            "No failed requests found (status >= {}).",
            filter.min_status
        )?;
        return Ok(0);
    }

    writeln!(out, "Found {} failed requests:", failures.len())?;
    for f in &failures {
        write_block(out, f)?;
    }
    Ok(failures.len())
}

fn write_block<W: Write>(out: &mut W, f: &FailedRequestSummary<'_>) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    writeln!(out, "Method: {}", f.method)?;
    writeln!(out, "URL: {}", f.url)?;
    writeln!(out, "Status: {} {}", f.status, f.status_text)?;
    writeln!(out, "Response: {}", f.snippet)
}
