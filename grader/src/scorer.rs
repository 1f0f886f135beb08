//! # Scorer Module
//!
//! This module contains the scoring rules that convert a tree of suites and tests into a
//! single [`ScoreTally`]. [`score_suite`] computes one suite's contribution;
//! [`score_report`] sums the contributions across a report in suite order.

use crate::outcome::test_passed;
use crate::points::declared_points;
use crate::types::{Report, ScoreTally, Suite};
use tracing::debug;

/// One suite's contribution to the report total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteScore {
    /// Points the suite earned.
    pub points: u32,
    /// Points the suite could have earned.
    pub max_points: u32,
}

/// Computes a suite's `(points, max_points)` contribution.
///
/// Point sources are resolved in a three-tier precedence, which lets a suite mix an
/// explicit total value with either weighted or unweighted children without
/// double-counting:
///
/// 1. The suite declares its own value (`"Bonus (5)"`) and its tests carry their own
///    weights: the suite contributes the sum of passed-test points, capped at the
///    declared value, out of the declared value.
/// 2. The suite declares its own value but no test carries a weight: all-or-nothing.
///    The suite contributes the declared value if every test passed, else zero, out
///    of the declared value.
/// 3. No declared suite value: the sum of passed-test points out of the sum of all
///    test points when any test is weighted, else one point per passed test out of
///    one point per test.
///
/// The result always satisfies `points <= max_points`.
///
/// # Example
///
/// ```
/// use grader::scorer::score_suite;
/// use grader::types::{Suite, TestCase};
///
/// let suite = Suite {
///     name: Some("Extra".to_string()),
///     tests: vec![
///         TestCase { name: Some("t1".to_string()), error: None, result: None },
///         TestCase { name: Some("t2".to_string()), error: None, result: Some("failed".to_string()) },
///     ],
/// };
///
/// // No point annotations anywhere: one point per test, one passed.
/// let score = score_suite(&suite);
/// assert_eq!(score.points, 1);
/// assert_eq!(score.max_points, 2);
/// ```
pub fn score_suite(suite: &Suite) -> SuiteScore {
    let mut test_points = 0u32;
    let mut test_max_points = 0u32;
    let mut passed_count = 0u32;
    let total_count = suite.tests.len() as u32;

    for test in &suite.tests {
        let value = declared_points(test.name.as_deref()).unwrap_or(0);
        // Annotations are individually bounded but nothing bounds their sum;
        // saturate rather than overflow, consistent with the silent handling
        // of unparsable annotations.
        test_max_points = test_max_points.saturating_add(value);
        if test_passed(test) {
            test_points = test_points.saturating_add(value);
            passed_count += 1;
        }
    }
    let all_passed = passed_count == total_count;

    let score = match declared_points(suite.name.as_deref()) {
        // The declared value caps whatever the tests sum to. A declared value of
        // zero carries no information and falls through to the lower tiers.
        Some(declared) if declared > 0 => {
            if test_max_points > 0 {
                SuiteScore {
                    points: test_points.min(declared),
                    max_points: declared,
                }
            } else if all_passed {
                SuiteScore {
                    points: declared,
                    max_points: declared,
                }
            } else {
                SuiteScore {
                    points: 0,
                    max_points: declared,
                }
            }
        }
        _ if test_max_points > 0 => SuiteScore {
            points: test_points,
            max_points: test_max_points,
        },
        _ => SuiteScore {
            points: passed_count,
            max_points: total_count,
        },
    };

    debug!(
        suite = suite.name.as_deref().unwrap_or("<unnamed>"),
        points = score.points,
        max_points = score.max_points,
        "scored suite"
    );
    score
}

/// Sums every suite's contribution into the report total, in suite order.
///
/// The order does not affect the sum, but iterating in document order keeps logs
/// reproducible across runs.
pub fn score_report(report: &Report) -> ScoreTally {
    let mut points = 0u32;
    let mut max_points = 0u32;

    for suite in &report.suites {
        let score = score_suite(suite);
        points = points.saturating_add(score.points);
        max_points = max_points.saturating_add(score.max_points);
    }

    ScoreTally { points, max_points }
}
