//! Report Loader
//!
//! This module loads the test runner's JSON report from disk. A missing report file is an
//! expected outcome (a crashed or hung run produces no report), so it is surfaced as
//! [`LoadedReport::Missing`] rather than an error. Malformed JSON in an *existing* file
//! is fatal and propagates as [`GraderError::InvalidJson`].
//!
//! The auxiliary raw-log capture, used only on the missing-report path, degrades to an
//! empty string whenever it cannot be read.

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::types::Report;
use std::fs;
use tracing::{error, warn};

/// Outcome of a report load attempt.
#[derive(Debug)]
pub enum LoadedReport {
    /// The report file existed and parsed into a [`Report`].
    Parsed(Report),
    /// The report file does not exist. Expected when the upstream run crashed or hung.
    Missing,
}

/// Loads and parses the report file, resolved against the configured base directory.
///
/// # Errors
///
/// Returns [`GraderError::IoError`] if the path exists but cannot be read as a regular
/// file, and [`GraderError::InvalidJson`] if the content is not a valid report document.
pub fn load_report(config: &GraderConfig, filename: &str) -> Result<LoadedReport, GraderError> {
    let path = config.resolve(filename);

    if !path.exists() {
        warn!("Report file not found: {}", path.display());
        return Ok(LoadedReport::Missing);
    }

    if !path.is_file() {
        let msg = format!("Not a file: {}", path.display());
        error!("{}", msg);
        return Err(GraderError::IoError(msg));
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        let msg = format!("Failed to read report file {}: {}", path.display(), e);
        error!("{}", msg);
        GraderError::IoError(msg)
    })?;

    let report = serde_json::from_str::<Report>(&content).map_err(|e| {
        let msg = format!("Invalid JSON in report file {}: {}", path.display(), e);
        error!("{}", msg);
        GraderError::InvalidJson(msg)
    })?;

    Ok(LoadedReport::Parsed(report))
}

/// Reads the auxiliary log verbatim, substituting an empty string when the filename was
/// not given or the file cannot be read.
pub fn read_aux_log(config: &GraderConfig, filename: Option<&str>) -> String {
    let Some(filename) = filename else {
        return String::new();
    };

    let path = config.resolve(filename);
    match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Auxiliary log unreadable {}: {}", path.display(), e);
            String::new()
        }
    }
}
