//! Grade table, input validation and GPA arithmetic.
//!
//! Everything here is pure: callers pass course entries and an optional
//! prior record in and receive figures or a [`GpaError`](crate::error::GpaError)
//! back.

pub mod gpa;
pub mod grade;
pub mod planner;
pub mod types;
pub mod utility;
pub mod validate;

pub use gpa::{calculate, compute_cumulative, compute_semester};
pub use grade::{Grade, points_for};
pub use types::{CourseEntry, GpaResult, PriorRecord, SemesterTotals};
pub use validate::{validate_grade, validate_hours, validate_prior_gpa, validate_prior_hours};
