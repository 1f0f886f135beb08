//! A renderer that produces an HTML list report with escaped content.
//!
//! Suites render as an ordered list of `check-level` items; each test renders as a
//! `check-success` or `check-fail` row. All names and the embedded auxiliary log are
//! HTML-escaped, so runner-controlled strings cannot inject markup into the results page.

use crate::report::RenderPayload;
use crate::traits::renderer::Renderer;
use std::fmt::Write;

/// Escapes the five characters with meaning in HTML text and attribute contexts.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the report as nested HTML lists.
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, payload: &RenderPayload) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<h1>Test Report</h1>");
        let _ = writeln!(
            out,
            "<p class=\"generated-at\">Generated: {}</p>",
            escape_html(&payload.generated_at)
        );

        if let Some(failure) = &payload.failure {
            let _ = writeln!(
                out,
                "<p class=\"check-fail\">{}</p>",
                escape_html(&failure.message)
            );
            if !failure.log.is_empty() {
                let _ = writeln!(out, "<pre>{}</pre>", escape_html(&failure.log));
            }
            return out;
        }

        let _ = writeln!(out, "<ol>");
        for suite in &payload.suites {
            let _ = writeln!(
                out,
                "<li class=\"check-level\"><strong>{}</strong> ({}/{})",
                escape_html(&suite.name),
                suite.points,
                suite.max_points
            );
            let _ = writeln!(out, "<ul>");
            for test in &suite.tests {
                let row = if test.passed {
                    format!(
                        "<li class=\"check-success\"><span class=\"text-success\">\u{2714}</span> {}</li>",
                        escape_html(&test.name)
                    )
                } else {
                    format!(
                        "<li class=\"check-fail\"><span class=\"text-danger\">\u{2a2f}</span> {}</li>",
                        escape_html(&test.name)
                    )
                };
                let _ = writeln!(out, "{row}");
            }
            let _ = writeln!(out, "</ul>");
            let _ = writeln!(out, "</li>");
        }
        let _ = writeln!(out, "</ol>");

        out
    }
}
