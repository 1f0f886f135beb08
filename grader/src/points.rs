//! Point annotation extraction.
//!
//! Suites and tests declare their point value by suffixing the display name with a
//! parenthesized annotation: `"Basics (10)"` or `"t1 (4p)"`. This module provides the
//! pure string-to-optional-integer extraction for that annotation, stateless and
//! testable in isolation from the suite/test tree.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a trailing `(<digits>)` or `(<digits>p)` annotation, anchored at the end of
/// the name so a parenthesized group in the middle of a title does not count.
fn points_regex() -> &'static Regex {
    static POINTS_RE: OnceLock<Regex> = OnceLock::new();
    POINTS_RE.get_or_init(|| Regex::new(r"\((?P<points>\d+)[pP]?\)\s*$").unwrap())
}

/// Extracts the declared point value from an item's display name, if any.
///
/// Returns `None` for an absent name, a name without a trailing annotation, or a value
/// too large to represent. A name with no parsable point suffix simply carries no
/// points; most names carry none.
pub fn declared_points(name: Option<&str>) -> Option<u32> {
    let name = name?;
    points_regex()
        .captures(name)
        .and_then(|c| c.name("points"))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
