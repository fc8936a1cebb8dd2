//! Output formatting and persistence for GPA results.
//!
//! Supports a localized text report, JSON serialization, and CSV append.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::calculator::grade::Grade;
use crate::calculator::planner::{Plan, Standing};
use crate::calculator::utility::round_to;
use crate::calculator::GpaResult;
use crate::locale::{Direction, Locale};

/// A timestamped, rounded result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaRecord {
    pub timestamp: DateTime<Utc>,
    pub semester_hours: f64,
    pub cumulative_hours: f64,
    pub semester_gpa: f64,
    pub cumulative_gpa: f64,
    pub standing: Standing,
}

impl GpaRecord {
    /// GPA figures are rounded to `decimals` places; hours are kept as is.
    pub fn from_result(result: &GpaResult, decimals: u32) -> Self {
        GpaRecord {
            timestamp: Utc::now(),
            semester_hours: result.semester_hours,
            cumulative_hours: result.cumulative_hours,
            semester_gpa: round_to(result.semester_gpa, decimals),
            cumulative_gpa: round_to(result.cumulative_gpa, decimals),
            standing: Standing::from_gpa(result.cumulative_gpa),
        }
    }
}

/// Logs a record using Rust's debug pretty-print format.
pub fn print_pretty(record: &GpaRecord) {
    debug!("{:#?}", record);
}

/// Pretty-printed JSON of any serializable value.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Appends a [`GpaRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &GpaRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Formats hours without a trailing `.0` for whole numbers.
fn hours(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label}: {value}\n"));
}

/// Text report for a calculation.
pub fn render_result(result: &GpaResult, locale: Locale, decimals: u32) -> String {
    let labels = locale.labels();
    let places = decimals as usize;
    let mut out = String::new();

    row(&mut out, labels.semester_hours, &hours(result.semester_hours));
    row(&mut out, labels.total_hours, &hours(result.cumulative_hours));
    row(
        &mut out,
        labels.semester_gpa,
        &format!("{:.places$}", result.semester_gpa),
    );
    row(
        &mut out,
        labels.cumulative_gpa,
        &format!("{:.places$}", result.cumulative_gpa),
    );
    row(
        &mut out,
        labels.standing,
        locale.advice(Standing::from_gpa(result.cumulative_gpa)),
    );
    out
}

/// Text report for a target-GPA projection.
pub fn render_plan(plan: &Plan, locale: Locale, decimals: u32) -> String {
    let labels = locale.labels();
    let places = decimals as usize;
    let mut out = String::new();

    row(&mut out, labels.target_gpa, &format!("{:.places$}", plan.target_gpa));
    row(&mut out, labels.remaining_hours, &hours(plan.remaining_hours));
    row(
        &mut out,
        labels.required_gpa,
        &format!("{:.places$}", plan.required_gpa),
    );
    out.push_str(&format!("{}\n", locale.plan_verdict(plan)));
    out
}

/// The grading scale as an aligned table.
pub fn render_scale(locale: Locale) -> String {
    let info = locale.info();
    let [grade_col, points_col, pct_col] = info.grading_columns;
    let mut out = String::new();

    out.push_str(&format!("{}\n", info.grading_heading));
    out.push_str(&format!("{grade_col:<14}{points_col:<14}{pct_col}\n"));
    for grade in Grade::ALL {
        let (low, high) = grade.percentage_band();
        let band = if low == 0 {
            format!("{} {}%", info.below, high + 1)
        } else {
            format!("{low}-{high}%")
        };
        out.push_str(&format!("{:<14}{:<14.1}{}\n", grade.as_str(), grade.points(), band));
    }
    out
}

/// The full info page: about, grading scale, FAQ and tips.
pub fn render_info(locale: Locale) -> String {
    let info = locale.info();
    let mut out = String::new();

    // Right-to-left mark for bidi-aware terminals.
    if locale.direction() == Direction::Rtl {
        out.push('\u{200F}');
    }
    out.push_str(&format!("{}\n\n", info.title));

    out.push_str(&format!("{}\n", info.about_heading));
    for paragraph in info.about {
        out.push_str(&format!("{paragraph}\n"));
    }
    out.push('\n');

    out.push_str(&render_scale(locale));
    out.push('\n');

    out.push_str(&format!("{}\n", info.faq_heading));
    for (question, answer) in info.faq {
        out.push_str(&format!("> {question}\n"));
        for line in answer.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out.push('\n');

    out.push_str(&format!("{}\n", info.tips_heading));
    for tip in info.tips {
        out.push_str(&format!("- {tip}\n"));
    }
    out
}
