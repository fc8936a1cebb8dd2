//! Pure predicates over raw form input.
//!
//! None of these mark fields or log; the caller decides how to surface a
//! rejected value.

use crate::calculator::grade::{Grade, normalize};
use crate::calculator::utility::parse_number;

/// Smallest accepted credit hours for a course.
pub const MIN_HOURS: f64 = 1.0;

/// Upper bound of the grading scale.
pub const MAX_GPA: f64 = 4.0;

/// `true` for a recognized grade token, or for empty input (not yet entered).
pub fn validate_grade(raw: &str) -> bool {
    let token = normalize(raw);
    token.is_empty() || token.parse::<Grade>().is_ok()
}

/// `true` iff `raw` is a number of at least [`MIN_HOURS`].
pub fn validate_hours(raw: &str) -> bool {
    parse_number(raw).is_some_and(|h| h >= MIN_HOURS)
}

/// `true` for empty input, or a number within `0.0..=4.0`.
pub fn validate_prior_gpa(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    parse_number(raw).is_some_and(|g| (0.0..=MAX_GPA).contains(&g))
}

/// `true` for empty input, or a non-negative number.
pub fn validate_prior_hours(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return true;
    }
    parse_number(raw).is_some_and(|h| h >= 0.0)
}
