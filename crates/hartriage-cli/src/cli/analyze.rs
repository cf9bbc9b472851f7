//! `hartriage <path>`: load a capture and print its failed requests.

use anyhow::{Context, Result};
use hartriage_core::har::{self, FailureFilter};
use hartriage_core::report;
use std::io::Write;
use std::path::Path;

/// Analyze the capture at `path`, writing the report to `out`. Returns the failure count.
pub fn analyze_to<W: Write>(out: &mut W, path: &Path, filter: FailureFilter) -> Result<usize> {
    let capture = har::load_capture(path)?;
    let failed = report::write_report(out, &capture, filter).context("write report")?;
    tracing::info!(
        path = %path.display(),
        entries = capture.entries().len(),
        failed,
        "analyzed HAR capture"
    );
    Ok(failed)
}
