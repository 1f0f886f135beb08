//! Test outcome classification.

use crate::types::TestCase;

/// Returns whether a test passed.
///
/// A test passed iff it carries no `error` and its `result`, when present, is not
/// `"failed"`. An attached `error` dominates: a test with `result == "success"` but a
/// defined `error` is still a failure.
///
/// A test with neither field is treated as passed, since some runners omit the status on
/// success. This is permissive: a runner that omitted `result` on a genuine failure
/// without setting `error` would be mis-scored as passing. Hardening that belongs in
/// the upstream report format, not here.
pub fn test_passed(test: &TestCase) -> bool {
    test.error.is_none() && test.result.as_deref() != Some("failed")
}
