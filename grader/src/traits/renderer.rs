use crate::report::RenderPayload;

/// Renderer is a strategy trait for producing the human-readable report.
/// Each implementation turns the same [`RenderPayload`] into a different output
/// surface; the scoring core never does any string templating itself.
pub trait Renderer: Send + Sync {
    /// Render the payload into the complete report body.
    ///
    /// The returned string is written to stdout ahead of the machine-readable
    /// totals trailer, so it must not contain a line starting with `TotalPoints:`.
    fn render(&self, payload: &RenderPayload) -> String;
}
