use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GpaError;

/// Letter grades on the 4.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// Grade to point mapping, highest first.
///
/// | Grade | Points | Percentage |
/// |-------|--------|------------|
/// | A     | 4.0    | 90-100     |
/// | B+    | 3.5    | 82-89      |
/// | B     | 3.0    | 74-81      |
/// | C+    | 2.5    | 66-73      |
/// | C     | 2.0    | 58-65      |
/// | D     | 1.5    | 50-57      |
/// | F     | 0.0    | below 50   |
static GRADE_POINTS: &[(Grade, &str, f64)] = &[
    (Grade::A, "A", 4.0),
    (Grade::BPlus, "B+", 3.5),
    (Grade::B, "B", 3.0),
    (Grade::CPlus, "C+", 2.5),
    (Grade::C, "C", 2.0),
    (Grade::D, "D", 1.5),
    (Grade::F, "F", 0.0),
];

impl Grade {
    /// Every grade in table order.
    pub const ALL: [Grade; 7] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    fn entry(self) -> &'static (Grade, &'static str, f64) {
        // Variants are declared in table order.
        &GRADE_POINTS[self as usize]
    }

    /// Grade points earned per credit hour.
    pub fn points(self) -> f64 {
        self.entry().2
    }

    /// Canonical uppercase token, e.g. `"B+"`.
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Inclusive percentage band `(low, high)` shown in the grading scale.
    /// `F` starts at zero and ends below 50.
    pub fn percentage_band(self) -> (u8, u8) {
        match self {
            Grade::A => (90, 100),
            Grade::BPlus => (82, 89),
            Grade::B => (74, 81),
            Grade::CPlus => (66, 73),
            Grade::C => (58, 65),
            Grade::D => (50, 57),
            Grade::F => (0, 49),
        }
    }

    /// Looks up an already-normalized token.
    fn lookup(token: &str) -> Option<Grade> {
        GRADE_POINTS
            .iter()
            .find(|(_, name, _)| *name == token)
            .map(|(g, _, _)| *g)
    }
}

/// Trims and uppercases raw grade input.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl FromStr for Grade {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::lookup(&normalize(s)).ok_or_else(|| GpaError::InvalidGrade(s.trim().to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade points for a raw token, case-insensitive.
///
/// Anything outside the table yields `0.0`; use [`Grade::from_str`] where an
/// unknown token must be reported instead.
pub fn points_for(grade: &str) -> f64 {
    Grade::lookup(&normalize(grade))
        .map(Grade::points)
        .unwrap_or(0.0)
}
