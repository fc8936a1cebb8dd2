//! Data types passed through the GPA pipeline.

use serde::{Deserialize, Serialize};

use crate::calculator::grade::Grade;

/// One course in the current term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub grade: Grade,
    pub hours: f64,
}

impl CourseEntry {
    pub fn new(grade: Grade, hours: f64) -> Self {
        Self { grade, hours }
    }

    /// Grade points times hours.
    pub fn quality_points(&self) -> f64 {
        self.grade.points() * self.hours
    }
}

/// Academic history before the current term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorRecord {
    pub gpa: f64,
    pub hours: f64,
}

impl PriorRecord {
    pub fn new(gpa: f64, hours: f64) -> Self {
        Self { gpa, hours }
    }

    pub fn quality_points(&self) -> f64 {
        self.gpa * self.hours
    }
}

/// Sums over the contributing entries of one term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SemesterTotals {
    pub total_points: f64,
    pub total_hours: f64,
}

impl SemesterTotals {
    /// Weighted average, or 0 when no hours contributed.
    pub fn gpa(&self) -> f64 {
        if self.total_hours == 0.0 {
            0.0
        } else {
            self.total_points / self.total_hours
        }
    }
}

/// Semester and cumulative figures for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpaResult {
    pub semester_hours: f64,
    pub cumulative_hours: f64,
    pub semester_gpa: f64,
    pub cumulative_gpa: f64,
}
