//! # Grader Library
//!
//! This crate converts a test runner's JSON execution report into a human-readable
//! rendered report and a numeric score: `points` earned out of `max_points` possible.
//! It is built for automated grading and CI, where suites and tests carry point values
//! embedded in their display names and partial credit is computed from pass/fail/error
//! status.
//!
//! ## Key Concepts
//! - **RenderJob**: the main struct representing one scoring-and-rendering pass.
//! - **Point annotations**: a trailing `(<n>)` or `(<n>p)` suffix on a suite or test
//!   name declares its point value (see [`points`]).
//! - **Renderers**: pluggable strategies for producing the report body (text, HTML).
//! - **Fallback penalty**: a run that produced no report scores a fixed `0/1`,
//!   distinguishing "no usable output" from "output with zero passing tests".

pub mod config;
pub mod error;
pub mod loader;
pub mod outcome;
pub mod points;
pub mod renderers;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;

use crate::config::GraderConfig;
use crate::error::GraderError;
use crate::loader::{LoadedReport, load_report, read_aux_log};
use crate::renderers::text::TextRenderer;
use crate::report::RenderPayload;
use crate::traits::renderer::Renderer;
use crate::types::ScoreTally;
use tracing::info;

/// The result of one pass: the rendered report body and the score.
///
/// Callers print `rendered` first and the tally's trailer second; the ordering is part
/// of the stdout contract consumed by the grading harness.
#[derive(Debug)]
pub struct RenderOutcome {
    /// The complete rendered report body.
    pub rendered: String,
    /// The final score.
    pub tally: ScoreTally,
}

/// Represents one scoring-and-rendering pass over a report file.
///
/// The job owns its configuration and filenames; the renderer is a swappable strategy
/// defaulting to [`TextRenderer`]. The whole pass is synchronous and single-threaded:
/// one file read, one parse, one linear pass over suites and tests.
pub struct RenderJob<'a> {
    config: GraderConfig,
    report_filename: String,
    aux_log_filename: Option<String>,
    renderer: Box<dyn Renderer + 'a>,
}

impl<'a> RenderJob<'a> {
    /// Create a new job for the given report file, resolved against the config's
    /// base directory.
    pub fn new(config: GraderConfig, report_filename: impl Into<String>) -> Self {
        Self {
            config,
            report_filename: report_filename.into(),
            aux_log_filename: None,
            renderer: Box::new(TextRenderer),
        }
    }

    /// Attach an auxiliary raw-log capture, shown verbatim when the report is missing.
    pub fn with_aux_log(mut self, filename: impl Into<String>) -> Self {
        self.aux_log_filename = Some(filename.into());
        self
    }

    /// Set a custom renderer strategy for this job.
    pub fn with_renderer<R: Renderer + 'a>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Run the pass: load, score, build the render payload, render.
    ///
    /// A missing report file is handled, not fatal: the outcome carries the fixed
    /// `0/1` penalty tally and a report body explaining the failure, with the
    /// auxiliary log embedded when available.
    ///
    /// # Errors
    ///
    /// Returns [`GraderError::InvalidJson`] when the report file exists but is not a
    /// valid report document, and [`GraderError::IoError`] when it exists but cannot
    /// be read. Both are integration faults with the upstream runner, not runtime
    /// conditions to recover from.
    pub fn run(self) -> Result<RenderOutcome, GraderError> {
        let payload = match load_report(&self.config, &self.report_filename)? {
            LoadedReport::Parsed(report) => {
                info!(
                    report = %self.report_filename,
                    suites = report.suites.len(),
                    "scoring report"
                );
                RenderPayload::scored(&report)
            }
            LoadedReport::Missing => {
                info!(
                    report = %self.report_filename,
                    "report missing, applying fallback penalty"
                );
                let aux_log = read_aux_log(&self.config, self.aux_log_filename.as_deref());
                RenderPayload::missing(aux_log)
            }
        };

        let rendered = self.renderer.render(&payload);
        Ok(RenderOutcome {
            rendered,
            tally: payload.tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::html::HtmlRenderer;

    fn fixture_config() -> GraderConfig {
        GraderConfig::new("src/test_files/loader")
    }

    #[test]
    fn test_run_scores_and_renders_report() {
        let job = RenderJob::new(fixture_config(), "case1/report.json");
        let outcome = job.run().expect("job should succeed");

        // Basics (10): weighted tests, 4 of 10. Extra: unit scoring, 1 of 2.
        assert_eq!(outcome.tally.points, 5);
        assert_eq!(outcome.tally.max_points, 12);
        assert!(outcome.rendered.contains("Basics (10)"));
        assert!(outcome.rendered.contains("* Fail! t2 (6)"));
    }

    #[test]
    fn test_missing_report_applies_fallback_penalty() {
        let job =
            RenderJob::new(fixture_config(), "does-not-exist.json").with_aux_log("case1/run.log");
        let outcome = job.run().expect("missing report is handled, not fatal");

        assert_eq!(outcome.tally, ScoreTally::fallback_penalty());
        assert!(outcome.rendered.contains("Unexpected error"));
        assert!(outcome.rendered.contains("session terminated"));
    }

    #[test]
    fn test_missing_report_without_aux_log() {
        let job = RenderJob::new(fixture_config(), "does-not-exist.json");
        let outcome = job.run().expect("missing report is handled, not fatal");

        assert_eq!(outcome.tally, ScoreTally::fallback_penalty());
        assert!(outcome.rendered.contains("Unexpected error"));
    }

    #[test]
    fn test_malformed_report_propagates() {
        let job = RenderJob::new(fixture_config(), "case2/report.json");
        let result = job.run();
        assert!(matches!(result, Err(GraderError::InvalidJson(_))));
    }

    #[test]
    fn test_custom_renderer_is_used() {
        let job = RenderJob::new(fixture_config(), "case1/report.json").with_renderer(HtmlRenderer);
        let outcome = job.run().expect("job should succeed");
        assert!(outcome.rendered.contains("<ol>"));
        assert!(outcome.rendered.contains("check-success"));
    }

    /// Running twice over the same file yields identical totals.
    #[test]
    fn test_repeat_runs_are_deterministic() {
        let first = RenderJob::new(fixture_config(), "case1/report.json")
            .run()
            .unwrap();
        let second = RenderJob::new(fixture_config(), "case1/report.json")
            .run()
            .unwrap();
        assert_eq!(first.tally, second.tally);
    }
}
