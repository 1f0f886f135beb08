//! # Types Module
//!
//! This module defines the core data structures used throughout the grader.
//! [`Report`], [`Suite`] and [`TestCase`] mirror the JSON document emitted by the upstream
//! test runner; [`ScoreTally`] is the derived score pair the grading pass produces.

use serde::{Deserialize, Serialize};

/// The top-level test-execution report, as produced by the upstream test runner.
#[derive(Debug, Deserialize)]
pub struct Report {
    /// Ordered sequence of test suites.
    pub suites: Vec<Suite>,
}

/// A named group of tests.
///
/// The display name may carry a trailing point annotation such as `"Basics (10)"`;
/// see [`crate::points::declared_points`].
#[derive(Debug, Deserialize)]
pub struct Suite {
    /// Display title of the suite. Reporter versions differ on the key, so `title`
    /// is accepted as an alias for `name`.
    #[serde(alias = "title")]
    pub name: Option<String>,
    /// Ordered sequence of tests in this suite.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// A single test case.
#[derive(Debug, Deserialize)]
pub struct TestCase {
    /// Display title of the test, possibly carrying a trailing point annotation.
    #[serde(alias = "title")]
    pub name: Option<String>,
    /// Any non-absent value here signals a failure or exception, regardless of `result`.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// Optional status string from the runner, e.g. `"success"` or `"failed"`.
    #[serde(default)]
    pub result: Option<String>,
}

/// Points earned out of points attainable, for a suite or a whole report.
///
/// Aggregation maintains `points <= max_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    /// Points earned.
    pub points: u32,
    /// Maximum attainable points.
    pub max_points: u32,
}

impl ScoreTally {
    /// The fixed penalty score for a run that produced no usable report: zero earned
    /// out of one attainable. Distinguishes "no report" from an empty report's `0/0`.
    pub fn fallback_penalty() -> Self {
        Self {
            points: 0,
            max_points: 1,
        }
    }

    /// Formats the machine-readable totals trailer consumed by the grading harness.
    ///
    /// The shape is a textual contract and must not change: a blank line, the two
    /// `TotalPoints:` / `MaxPoints:` lines, and a trailing newline (the caller's
    /// `println!` supplies the closing blank line).
    pub fn trailer(&self) -> String {
        format!(
            "\nTotalPoints: {}\nMaxPoints: {}\n",
            self.points, self.max_points
        )
    }
}
