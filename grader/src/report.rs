//! # Render Payload Module
//!
//! This module defines the plain data structure handed to renderers. The core performs
//! no string templating: it exposes suites, per-test outcomes, point tallies and an
//! optional failure notice, and a separate, swappable [`crate::traits::renderer::Renderer`]
//! turns that into text or HTML.

use crate::outcome::test_passed;
use crate::points::declared_points;
use crate::scorer::{score_report, score_suite};
use crate::types::{Report, ScoreTally, Suite};
use serde::Serialize;

/// Everything a renderer needs to produce the human-readable report.
#[derive(Debug, Serialize)]
pub struct RenderPayload {
    /// RFC 3339 timestamp of when this payload was generated.
    pub generated_at: String,
    /// Per-suite render inputs, in report order. Empty on the failure path.
    pub suites: Vec<SuitePayload>,
    /// The report total.
    pub tally: ScoreTally,
    /// Present only when no usable report could be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureNotice>,
}

/// One suite, scored.
#[derive(Debug, Serialize)]
pub struct SuitePayload {
    /// Display name of the suite.
    pub name: String,
    /// Points the suite earned.
    pub points: u32,
    /// Points the suite could have earned.
    pub max_points: u32,
    /// Per-test render inputs, in suite order.
    pub tests: Vec<TestPayload>,
}

/// One test, classified.
#[derive(Debug, Serialize)]
pub struct TestPayload {
    /// Display name of the test.
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// The test's declared point value, zero when unannotated.
    pub points: u32,
}

/// Explanation shown when the run produced no usable report.
#[derive(Debug, Serialize)]
pub struct FailureNotice {
    /// Human-readable message for the report header.
    pub message: String,
    /// Verbatim contents of the auxiliary log, empty when unavailable.
    pub log: String,
}

fn display_name(name: Option<&str>) -> String {
    name.unwrap_or("<unnamed>").to_string()
}

fn suite_payload(suite: &Suite) -> SuitePayload {
    let score = score_suite(suite);
    SuitePayload {
        name: display_name(suite.name.as_deref()),
        points: score.points,
        max_points: score.max_points,
        tests: suite
            .tests
            .iter()
            .map(|test| TestPayload {
                name: display_name(test.name.as_deref()),
                passed: test_passed(test),
                points: declared_points(test.name.as_deref()).unwrap_or(0),
            })
            .collect(),
    }
}

impl RenderPayload {
    /// Builds the payload for a successfully loaded report.
    pub fn scored(report: &Report) -> Self {
        let suites: Vec<SuitePayload> = report.suites.iter().map(suite_payload).collect();
        let tally = score_report(report);
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            suites,
            tally,
            failure: None,
        }
    }

    /// Builds the fallback payload for a run that produced no report, carrying the
    /// fixed one-point penalty score and the auxiliary log contents.
    pub fn missing(aux_log: String) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            suites: Vec::new(),
            tally: ScoreTally::fallback_penalty(),
            failure: Some(FailureNotice {
                message: "Unexpected error: the test run did not produce a usable report."
                    .to_string(),
                log: aux_log,
            }),
        }
    }
}
