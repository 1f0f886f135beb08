//! A renderer that produces a plain-text list report, suitable for terminals and CI logs.

use crate::report::RenderPayload;
use crate::traits::renderer::Renderer;
use std::fmt::Write;

/// Renders the report as numbered suites with one bullet row per test.
///
/// Test rows are prefixed `* Success!` or `* Fail!`; suite headings carry the earned
/// and attainable points. The auxiliary log on the failure path is included verbatim.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, payload: &RenderPayload) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Test Report");
        let _ = writeln!(out, "Generated: {}", payload.generated_at);

        if let Some(failure) = &payload.failure {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", failure.message);
            if !failure.log.is_empty() {
                let _ = writeln!(out);
                out.push_str(&failure.log);
                // A truncated log may lack a final newline; the body must still end
                // on one so the totals trailer stays framed by a blank line.
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            return out;
        }

        for (index, suite) in payload.suites.iter().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}. {} [{}/{}]:",
                index + 1,
                suite.name,
                suite.points,
                suite.max_points
            );
            for test in &suite.tests {
                let marker = if test.passed { "Success!" } else { "Fail!" };
                let _ = writeln!(out, "* {} {}", marker, test.name);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{FailureNotice, SuitePayload, TestPayload};
    use crate::types::ScoreTally;

    fn scored_payload() -> RenderPayload {
        RenderPayload {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            suites: vec![SuitePayload {
                name: "Basics (10)".to_string(),
                points: 4,
                max_points: 10,
                tests: vec![
                    TestPayload {
                        name: "t1 (4)".to_string(),
                        passed: true,
                        points: 4,
                    },
                    TestPayload {
                        name: "t2 (6)".to_string(),
                        passed: false,
                        points: 6,
                    },
                ],
            }],
            tally: ScoreTally {
                points: 4,
                max_points: 10,
            },
            failure: None,
        }
    }

    #[test]
    fn test_renders_suite_heading_and_test_rows() {
        let rendered = TextRenderer.render(&scored_payload());
        assert!(rendered.contains("1. Basics (10) [4/10]:"));
        assert!(rendered.contains("* Success! t1 (4)"));
        assert!(rendered.contains("* Fail! t2 (6)"));
    }

    #[test]
    fn test_failure_path_includes_message_and_log() {
        let payload = RenderPayload {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            suites: vec![],
            tally: ScoreTally::fallback_penalty(),
            failure: Some(FailureNotice {
                message: "Unexpected error: the test run did not produce a usable report."
                    .to_string(),
                log: "session terminated\n".to_string(),
            }),
        };
        let rendered = TextRenderer.render(&payload);
        assert!(rendered.contains("Unexpected error"));
        assert!(rendered.contains("session terminated"));
    }

    /// A log capture cut off mid-line must not run into the totals trailer.
    #[test]
    fn test_unterminated_log_still_frames_trailer() {
        let payload = RenderPayload {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            suites: vec![],
            tally: ScoreTally::fallback_penalty(),
            failure: Some(FailureNotice {
                message: "Unexpected error: the test run did not produce a usable report."
                    .to_string(),
                log: "exit code 137 <killed>".to_string(),
            }),
        };
        let rendered = TextRenderer.render(&payload);
        assert!(rendered.ends_with('\n'));

        let combined = format!("{}{}", rendered, payload.tally.trailer());
        assert!(combined.contains("\n\nTotalPoints: 0\nMaxPoints: 1\n"));
    }

    #[test]
    fn test_never_emits_trailer_lines() {
        let rendered = TextRenderer.render(&scored_payload());
        assert!(!rendered.contains("TotalPoints:"));
        assert!(!rendered.contains("MaxPoints:"));
    }
}
