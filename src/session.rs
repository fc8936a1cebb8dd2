//! The caller-owned list of course rows for one calculation.
//!
//! Rows hold raw text exactly as entered. [`CourseList::entries`] turns them
//! into typed [`CourseEntry`] values under an [`UnknownGradePolicy`];
//! the calculator itself only ever sees the typed values.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::calculator::grade::{Grade, normalize};
use crate::calculator::utility::parse_number;
use crate::calculator::validate::{
    validate_grade, validate_hours, validate_prior_gpa, validate_prior_hours,
};
use crate::calculator::{CourseEntry, GpaResult, PriorRecord, calculate};
use crate::config::UnknownGradePolicy;
use crate::error::GpaError;

/// One subject row as typed by the student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub hours: String,
}

impl CourseRow {
    pub fn new(grade: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            course: None,
            grade: grade.into(),
            hours: hours.into(),
        }
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Neither field filled in yet.
    pub fn is_blank(&self) -> bool {
        self.grade.trim().is_empty() && self.hours.trim().is_empty()
    }

    /// One field filled in and the other still empty.
    pub fn is_incomplete(&self) -> bool {
        !self.is_blank() && (self.grade.trim().is_empty() || self.hours.trim().is_empty())
    }

    /// Every problem with this row, hours before grade. Empty fields are not
    /// errors.
    ///
    /// Unknown grade tokens are reported regardless of policy; the policy
    /// only matters once the row is converted.
    pub fn problems(&self) -> Vec<GpaError> {
        let mut problems = Vec::new();
        if !self.hours.trim().is_empty() && !validate_hours(&self.hours) {
            problems.push(GpaError::InvalidHours(self.hours.trim().to_string()));
        }
        if !validate_grade(&self.grade) {
            problems.push(GpaError::InvalidGrade(self.grade.trim().to_string()));
        }
        problems
    }

    /// The first of [`CourseRow::problems`], if any.
    pub fn check(&self) -> Result<(), GpaError> {
        match self.problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Ordered course rows plus the prior-record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseList {
    rows: Vec<CourseRow>,
    prior_gpa: String,
    prior_hours: String,
}

impl CourseList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<CourseRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Appends a row and returns its index.
    pub fn add(&mut self, row: CourseRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Removes the row at `index`, shifting later rows down.
    pub fn remove(&mut self, index: usize) -> Option<CourseRow> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// Drops every row and empties the prior fields.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.prior_gpa.clear();
        self.prior_hours.clear();
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CourseRow> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn set_prior(&mut self, gpa: impl Into<String>, hours: impl Into<String>) {
        self.prior_gpa = gpa.into();
        self.prior_hours = hours.into();
    }

    /// Indices of rows that currently hold an invalid value.
    pub fn invalid_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.check().is_err())
            .map(|(i, _)| i)
            .collect()
    }

    /// Row problems that make [`CourseList::entries`] refuse under `policy`,
    /// paired with the row index. Unknown grades only block under
    /// [`UnknownGradePolicy::Reject`]; bad hours block under every policy.
    pub fn blocking_problems(&self, policy: UnknownGradePolicy) -> Vec<(usize, GpaError)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(index, row)| row.problems().into_iter().map(move |err| (index, err)))
            .filter(|(_, err)| {
                policy == UnknownGradePolicy::Reject || !matches!(err, GpaError::InvalidGrade(_))
            })
            .collect()
    }

    /// Parses the prior fields. Both empty means no prior record; a single
    /// empty field reads as zero.
    pub fn prior(&self) -> Result<Option<PriorRecord>, GpaError> {
        if self.prior_gpa.trim().is_empty() && self.prior_hours.trim().is_empty() {
            return Ok(None);
        }
        if !validate_prior_gpa(&self.prior_gpa) {
            return Err(match parse_number(&self.prior_gpa) {
                Some(gpa) => GpaError::OutOfRangeGpa(gpa),
                None => GpaError::InvalidPriorGpa(self.prior_gpa.trim().to_string()),
            });
        }
        if !validate_prior_hours(&self.prior_hours) {
            return Err(GpaError::InvalidHours(self.prior_hours.trim().to_string()));
        }
        let gpa = parse_number(&self.prior_gpa).unwrap_or(0.0);
        let hours = parse_number(&self.prior_hours).unwrap_or(0.0);
        Ok(Some(PriorRecord::new(gpa, hours)))
    }

    /// Converts rows into entries. Blank and incomplete rows are left out.
    ///
    /// # Errors
    ///
    /// [`GpaError::InvalidHours`] for any row with bad hours, and
    /// [`GpaError::InvalidGrade`] for an unknown grade under
    /// [`UnknownGradePolicy::Reject`], even on a row whose hours are empty.
    pub fn entries(&self, policy: UnknownGradePolicy) -> Result<Vec<CourseEntry>, GpaError> {
        let mut entries = Vec::with_capacity(self.rows.len());

        for (index, row) in self.rows.iter().enumerate() {
            if row.is_blank() {
                continue;
            }
            if !row.hours.trim().is_empty() && !validate_hours(&row.hours) {
                return Err(GpaError::InvalidHours(row.hours.trim().to_string()));
            }
            if policy == UnknownGradePolicy::Reject && !validate_grade(&row.grade) {
                return Err(GpaError::InvalidGrade(row.grade.trim().to_string()));
            }
            if row.is_incomplete() {
                debug!(index, "Skipping incomplete row");
                continue;
            }
            let hours = parse_number(&row.hours).unwrap_or(0.0);

            let grade = match row.grade.parse::<Grade>() {
                Ok(grade) => grade,
                Err(err) => match policy {
                    UnknownGradePolicy::Reject => return Err(err),
                    UnknownGradePolicy::Skip => {
                        warn!(index, grade = %normalize(&row.grade), "Skipping unknown grade");
                        continue;
                    }
                    UnknownGradePolicy::Zero => {
                        warn!(index, grade = %normalize(&row.grade), "Counting unknown grade as zero points");
                        Grade::F
                    }
                },
            };
            entries.push(CourseEntry::new(grade, hours));
        }

        Ok(entries)
    }

    /// Validates every row and the prior fields, then calculates.
    #[instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn calculate(&self, policy: UnknownGradePolicy) -> Result<GpaResult, GpaError> {
        // The prior range check comes first so it wins over every other error.
        let prior = self.prior()?;
        let entries = self.entries(policy)?;
        let result = calculate(&entries, prior)?;
        info!(
            semester_gpa = result.semester_gpa,
            cumulative_gpa = result.cumulative_gpa,
            cumulative_hours = result.cumulative_hours,
            "GPA calculated"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::utility::round_to;

    fn list(rows: &[(&str, &str)]) -> CourseList {
        CourseList::from_rows(rows.iter().map(|(g, h)| CourseRow::new(*g, *h)).collect())
    }

    #[test]
    fn test_add_remove_clear() {
        let mut courses = CourseList::new();
        assert!(courses.is_empty());

        assert_eq!(courses.add(CourseRow::new("A", "3")), 0);
        assert_eq!(courses.add(CourseRow::new("B", "2")), 1);
        assert_eq!(courses.add(CourseRow::new("C", "1")), 2);

        let removed = courses.remove(1).unwrap();
        assert_eq!(removed.grade, "B");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses.rows()[1].grade, "C");
        assert!(courses.remove(5).is_none());

        courses.set_prior("3.0", "30");
        courses.clear();
        assert!(courses.is_empty());
        assert_eq!(courses.prior(), Ok(None));
    }

    #[test]
    fn test_edit_row_in_place() {
        let mut courses = list(&[("A", "3")]);
        courses.get_mut(0).unwrap().grade = "c".to_string();
        let result = courses.calculate(UnknownGradePolicy::Reject).unwrap();
        assert_eq!(result.semester_gpa, 2.0);
    }

    #[test]
    fn test_row_check() {
        assert!(CourseRow::new("", "").check().is_ok());
        assert!(CourseRow::new("b+", "").check().is_ok());
        assert_eq!(
            CourseRow::new("E", "3").check(),
            Err(GpaError::InvalidGrade("E".to_string()))
        );
        assert_eq!(
            CourseRow::new("A", "0").check(),
            Err(GpaError::InvalidHours("0".to_string()))
        );
    }

    #[test]
    fn test_invalid_rows() {
        let courses = list(&[("A", "3"), ("Q", "3"), ("B", "-1"), ("", "")]);
        assert_eq!(courses.invalid_rows(), vec![1, 2]);
    }

    #[test]
    fn test_calculate_with_prior() {
        let mut courses = list(&[("A", "3"), ("c", "2")]);
        courses.set_prior("3.0", "30");

        let result = courses.calculate(UnknownGradePolicy::Reject).unwrap();
        assert_eq!(result.semester_hours, 5.0);
        assert_eq!(result.cumulative_hours, 35.0);
        assert_eq!(round_to(result.semester_gpa, 2), 3.20);
        assert_eq!(round_to(result.cumulative_gpa, 2), 3.03);
    }

    #[test]
    fn test_blank_and_incomplete_rows_do_not_contribute() {
        let courses = list(&[("A", "3"), ("", ""), ("B", ""), ("", "4")]);
        let result = courses.calculate(UnknownGradePolicy::Reject).unwrap();
        assert_eq!(result.semester_hours, 3.0);
        assert_eq!(result.semester_gpa, 4.0);
    }

    #[test]
    fn test_only_blank_rows_is_no_data() {
        let courses = list(&[("", ""), ("", "")]);
        assert_eq!(
            courses.calculate(UnknownGradePolicy::Reject),
            Err(GpaError::NoData)
        );
    }

    #[test]
    fn test_unknown_grade_policies() {
        let courses = list(&[("A", "3"), ("E", "3")]);

        assert_eq!(
            courses.calculate(UnknownGradePolicy::Reject),
            Err(GpaError::InvalidGrade("E".to_string()))
        );

        let skipped = courses.calculate(UnknownGradePolicy::Skip).unwrap();
        assert_eq!(skipped.semester_hours, 3.0);
        assert_eq!(skipped.semester_gpa, 4.0);

        let zeroed = courses.calculate(UnknownGradePolicy::Zero).unwrap();
        assert_eq!(zeroed.semester_hours, 6.0);
        assert_eq!(zeroed.semester_gpa, 2.0);
    }

    #[test]
    fn test_unknown_grade_without_hours_is_rejected() {
        let courses = list(&[("A", "3"), ("E", "")]);
        assert_eq!(courses.invalid_rows(), vec![1]);
        assert_eq!(
            courses.calculate(UnknownGradePolicy::Reject),
            Err(GpaError::InvalidGrade("E".to_string()))
        );

        // Lenient policies leave the incomplete row out as before.
        for policy in [UnknownGradePolicy::Skip, UnknownGradePolicy::Zero] {
            let result = courses.calculate(policy).unwrap();
            assert_eq!(result.semester_hours, 3.0);
            assert_eq!(result.semester_gpa, 4.0);
        }
    }

    #[test]
    fn test_row_problems_lists_hours_then_grade() {
        let row = CourseRow::new("E", "abc");
        assert_eq!(
            row.problems(),
            vec![
                GpaError::InvalidHours("abc".to_string()),
                GpaError::InvalidGrade("E".to_string()),
            ]
        );
        assert_eq!(row.check(), Err(GpaError::InvalidHours("abc".to_string())));
        assert!(CourseRow::new("B", "3").problems().is_empty());
    }

    #[test]
    fn test_blocking_problems_follow_policy() {
        let courses = list(&[("A", "3"), ("E", "abc"), ("Q", "2")]);

        assert_eq!(
            courses.blocking_problems(UnknownGradePolicy::Skip),
            vec![(1, GpaError::InvalidHours("abc".to_string()))]
        );
        assert_eq!(
            courses.blocking_problems(UnknownGradePolicy::Reject),
            vec![
                (1, GpaError::InvalidHours("abc".to_string())),
                (1, GpaError::InvalidGrade("E".to_string())),
                (2, GpaError::InvalidGrade("Q".to_string())),
            ]
        );

        // The error calculate returns is always among the listed problems.
        for policy in [UnknownGradePolicy::Reject, UnknownGradePolicy::Skip] {
            let err = courses.calculate(policy).unwrap_err();
            assert!(courses.blocking_problems(policy).iter().any(|(_, e)| *e == err));
        }

        assert!(list(&[("E", "3")]).blocking_problems(UnknownGradePolicy::Zero).is_empty());
    }

    #[test]
    fn test_bad_hours_rejected_under_every_policy() {
        let courses = list(&[("A", "abc")]);
        for policy in [
            UnknownGradePolicy::Reject,
            UnknownGradePolicy::Skip,
            UnknownGradePolicy::Zero,
        ] {
            assert_eq!(
                courses.calculate(policy),
                Err(GpaError::InvalidHours("abc".to_string()))
            );
        }
    }

    #[test]
    fn test_prior_out_of_range_wins() {
        let mut courses = list(&[("E", "0")]);
        courses.set_prior("4.5", "10");
        assert_eq!(
            courses.calculate(UnknownGradePolicy::Reject),
            Err(GpaError::OutOfRangeGpa(4.5))
        );
    }

    #[test]
    fn test_prior_fields() {
        let mut courses = CourseList::new();

        courses.set_prior("", "");
        assert_eq!(courses.prior(), Ok(None));

        courses.set_prior("3.5", "");
        assert_eq!(courses.prior(), Ok(Some(PriorRecord::new(3.5, 0.0))));

        courses.set_prior("x", "10");
        assert_eq!(courses.prior(), Err(GpaError::InvalidPriorGpa("x".to_string())));

        courses.set_prior("3.0", "-2");
        assert_eq!(courses.prior(), Err(GpaError::InvalidHours("-2".to_string())));
    }

    #[test]
    fn test_prior_only_record() {
        let mut courses = CourseList::new();
        courses.set_prior("2.8", "40");
        let result = courses.calculate(UnknownGradePolicy::Reject).unwrap();
        assert_eq!(result.semester_hours, 0.0);
        assert_eq!(result.cumulative_gpa, 2.8);
    }
}
