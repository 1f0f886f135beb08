//! Grader Error Types
//!
//! This module defines the [`GraderError`] enum, which encapsulates the error types that can
//! occur while loading and scoring a test-execution report.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! Note that a *missing* report file is not an error at all: the loader reports it as an
//! explicit signal (see [`crate::loader::LoadedReport`]) because a crashed or hung test run
//! is an expected outcome, not an exceptional one.

/// Represents all error types that can occur in the grader.
#[derive(Debug)]
pub enum GraderError {
    /// I/O error (file unreadable, not a regular file, etc.).
    IoError(String),
    /// JSON is malformed or does not match the expected report schema.
    InvalidJson(String),
}

impl std::fmt::Display for GraderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraderError::IoError(e) => write!(f, "I/O error: {e}"),
            GraderError::InvalidJson(e) => write!(f, "Invalid JSON: {e}"),
        }
    }
}

impl std::error::Error for GraderError {}
