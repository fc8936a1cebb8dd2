//! Forward-looking helpers built on top of a computed GPA.

use serde::Serialize;

use crate::calculator::validate::MAX_GPA;
use crate::error::GpaError;

/// Academic standing band for a GPA.
///
/// | Range   | Standing     |
/// |---------|--------------|
/// | >= 3.5  | Excellent    |
/// | >= 3.0  | Good         |
/// | >= 2.0  | Satisfactory |
/// | < 2.0   | AtRisk       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Excellent,
    Good,
    Satisfactory,
    AtRisk,
}

impl Standing {
    pub fn from_gpa(gpa: f64) -> Self {
        match gpa {
            g if g >= 3.5 => Standing::Excellent,
            g if g >= 3.0 => Standing::Good,
            g if g >= 2.0 => Standing::Satisfactory,
            _ => Standing::AtRisk,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Standing::Excellent => "excellent",
            Standing::Good => "good",
            Standing::Satisfactory => "satisfactory",
            Standing::AtRisk => "at_risk",
        }
    }
}

/// GPA needed over `remaining_hours` to lift a record to `target_gpa`.
///
/// Returns 0 when there are no remaining hours.
pub fn required_gpa(
    target_gpa: f64,
    current_gpa: f64,
    current_hours: f64,
    remaining_hours: f64,
) -> f64 {
    if remaining_hours <= 0.0 {
        return 0.0;
    }
    let total_points_needed = target_gpa * (current_hours + remaining_hours);
    let current_points = current_gpa * current_hours;
    (total_points_needed - current_points) / remaining_hours
}

/// Which way a projection came out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    NoRemainingHours,
    AlreadyMet,
    Reachable,
    OutOfReach,
}

/// Outcome of a target-GPA projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plan {
    pub target_gpa: f64,
    pub remaining_hours: f64,
    pub required_gpa: f64,
    /// The requirement fits on the 4.0 scale.
    pub achievable: bool,
    /// The target holds even with zero points from the remaining hours.
    pub already_met: bool,
}

impl Plan {
    pub fn project(
        target_gpa: f64,
        current_gpa: f64,
        current_hours: f64,
        remaining_hours: f64,
    ) -> Self {
        let required = required_gpa(target_gpa, current_gpa, current_hours, remaining_hours);
        Plan {
            target_gpa,
            remaining_hours,
            required_gpa: required,
            achievable: remaining_hours > 0.0 && required <= MAX_GPA,
            already_met: remaining_hours > 0.0 && required <= 0.0,
        }
    }

    /// [`Plan::project`] after checking the inputs.
    ///
    /// # Errors
    ///
    /// [`GpaError::OutOfRangeTarget`] or [`GpaError::OutOfRangeGpa`] for a
    /// GPA off the 0.0-4.0 scale, and [`GpaError::InvalidHours`] for negative
    /// or non-finite hours.
    pub fn try_project(
        target_gpa: f64,
        current_gpa: f64,
        current_hours: f64,
        remaining_hours: f64,
    ) -> Result<Self, GpaError> {
        if !on_scale(target_gpa) {
            return Err(GpaError::OutOfRangeTarget(target_gpa));
        }
        if !on_scale(current_gpa) {
            return Err(GpaError::OutOfRangeGpa(current_gpa));
        }
        for hours in [current_hours, remaining_hours] {
            if !hours.is_finite() || hours < 0.0 {
                return Err(GpaError::InvalidHours(hours.to_string()));
            }
        }
        Ok(Self::project(target_gpa, current_gpa, current_hours, remaining_hours))
    }

    pub fn outcome(&self) -> PlanOutcome {
        if self.remaining_hours <= 0.0 {
            PlanOutcome::NoRemainingHours
        } else if self.already_met {
            PlanOutcome::AlreadyMet
        } else if self.achievable {
            PlanOutcome::Reachable
        } else {
            PlanOutcome::OutOfReach
        }
    }
}

fn on_scale(gpa: f64) -> bool {
    (0.0..=MAX_GPA).contains(&gpa)
}
