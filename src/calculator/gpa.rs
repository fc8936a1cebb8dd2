use tracing::debug;

use crate::calculator::types::{CourseEntry, GpaResult, PriorRecord, SemesterTotals};
use crate::calculator::validate::MAX_GPA;
use crate::error::GpaError;

/// Sums quality points and hours over the entries that carry positive hours.
pub fn compute_semester(entries: &[CourseEntry]) -> SemesterTotals {
    let mut totals = SemesterTotals::default();

    for entry in entries {
        if entry.hours.is_nan() || entry.hours <= 0.0 {
            continue;
        }
        totals.total_points += entry.quality_points();
        totals.total_hours += entry.hours;
    }

    debug!(
        entries = entries.len(),
        total_points = totals.total_points,
        total_hours = totals.total_hours,
        "Semester totals computed"
    );
    totals
}

/// Folds a prior record into the semester totals.
///
/// # Errors
///
/// - [`GpaError::OutOfRangeGpa`] if the prior GPA is outside `0.0..=4.0`,
///   checked before anything else.
/// - [`GpaError::InvalidHours`] if the prior hours are negative.
/// - [`GpaError::NoData`] if neither the semester nor the prior record
///   contributes any hours.
pub fn compute_cumulative(
    totals: SemesterTotals,
    prior: Option<PriorRecord>,
) -> Result<GpaResult, GpaError> {
    if let Some(p) = prior {
        if !(0.0..=MAX_GPA).contains(&p.gpa) {
            return Err(GpaError::OutOfRangeGpa(p.gpa));
        }
        if p.hours.is_nan() || p.hours < 0.0 {
            return Err(GpaError::InvalidHours(p.hours.to_string()));
        }
    }

    let prior_points = prior.map_or(0.0, |p| p.quality_points());
    let prior_hours = prior.map_or(0.0, |p| p.hours);

    if totals.total_hours == 0.0 && prior_hours == 0.0 {
        return Err(GpaError::NoData);
    }

    let cumulative_points = totals.total_points + prior_points;
    let cumulative_hours = totals.total_hours + prior_hours;
    let cumulative_gpa = if cumulative_hours == 0.0 {
        0.0
    } else {
        cumulative_points / cumulative_hours
    };

    Ok(GpaResult {
        semester_hours: totals.total_hours,
        cumulative_hours,
        semester_gpa: totals.gpa(),
        cumulative_gpa,
    })
}

/// Semester then cumulative figures in one call.
pub fn calculate(
    entries: &[CourseEntry],
    prior: Option<PriorRecord>,
) -> Result<GpaResult, GpaError> {
    compute_cumulative(compute_semester(entries), prior)
}
