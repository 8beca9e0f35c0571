//! Report command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use roster_core::{Config, Store};

use crate::output::Output;

/// Write the student report, to `path` or the configured report file
pub fn generate(
    store: &Store,
    config: &Config,
    path: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let path = path.unwrap_or_else(|| config.report_file.clone());

    store.report(&path).context("Failed to generate report")?;

    output.success(&format!("Report generated: {}", path.display()));
    Ok(())
}
