//! Course input parsing: CSV files and `GRADE:HOURS` arguments.

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::session::CourseRow;

/// Reads course rows from CSV with a `grade,hours` header and an optional
/// `course` column. Column order does not matter.
///
/// # Errors
///
/// Returns an error if a record cannot be deserialized. Invalid grade or
/// hour values are not errors here; they are kept raw for validation.
pub fn parse_courses<R: Read>(reader: R) -> Result<Vec<CourseRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let row: CourseRow = result.with_context(|| format!("bad course record {}", line + 1))?;
        rows.push(row);
    }

    debug!(rows = rows.len(), "Parsed course rows");
    Ok(rows)
}

/// Opens `path` and parses it with [`parse_courses`].
pub fn load_courses(path: &str) -> Result<Vec<CourseRow>> {
    let file = File::open(path).with_context(|| format!("failed to open course file '{path}'"))?;
    parse_courses(file).with_context(|| format!("failed to parse course file '{path}'"))
}

/// Parses a `GRADE:HOURS` pair such as `B+:3`.
pub fn parse_course_arg(arg: &str) -> Result<CourseRow> {
    let (grade, hours) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("expected GRADE:HOURS, got '{arg}'"))?;
    Ok(CourseRow::new(grade.trim(), hours.trim()))
}
