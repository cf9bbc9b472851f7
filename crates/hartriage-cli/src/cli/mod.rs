//! CLI for hartriage.

mod analyze;

use anyhow::Result;
use clap::Parser;
use hartriage_core::config::{self, TriageConfig};
use std::io::Write;
use std::path::PathBuf;

pub use analyze::analyze_to;

/// Capture analyzed when no path is given.
pub const DEFAULT_HAR_PATH: &str = "beta.portaleletricos.com.br.har";

/// Print the failed requests (status >= 400) recorded in a HAR capture.
#[derive(Debug, Parser)]
#[command(name = "hartriage")]
#[command(about = "hartriage: list failed HTTP requests in a HAR capture", long_about = None)]
pub struct Cli {
    /// Path to the HAR file.
    #[arg(default_value = DEFAULT_HAR_PATH)]
    pub path: PathBuf,

    /// Lowest status counted as a failure (overrides config).
    #[arg(long, value_name = "STATUS")]
    pub min_status: Option<u16>,

    /// Truncate response bodies after this many characters (overrides config).
    #[arg(long, value_name = "CHARS")]
    pub max_snippet: Option<usize>,

    /// Read settings from this TOML file instead of the XDG config.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Runs the analysis, writing the report or the error line to `out`.
    ///
    /// Load, parse and config failures are printed rather than returned, so
    /// the process exit status stays 0.
    pub fn run_to<W: Write>(&self, out: &mut W) {
        if let Err(err) = self.try_run(out) {
            tracing::error!("analysis failed: {:#}", err);
            let _ = writeln!(out, "Error analyzing HAR file: {:#}", err);
        }
        let _ = out.flush();
    }

    fn try_run<W: Write>(&self, out: &mut W) -> Result<()> {
        let cfg = self.effective_config()?;
        tracing::debug!("effective config: {:?}", cfg);
        analyze_to(out, &self.path, cfg.failure_filter())?;
        Ok(())
    }

    /// Config file (explicit or XDG default) with command-line overrides applied.
    pub fn effective_config(&self) -> Result<TriageConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init().unwrap_or_else(|err| {
                tracing::warn!("using default config: {:#}", err);
                TriageConfig::default()
            }),
        };
        if let Some(status) = self.min_status {
            cfg.min_failure_status = status;
        }
        if let Some(chars) = self.max_snippet {
            cfg.max_snippet_chars = chars;
        }
        Ok(cfg)
    }
}
