//! Calculator settings.
//!
//! Stored as a JSON object on disk, every key optional:
//! ```json
//! {
//!   "locale": "ar",
//!   "unknown_grade": "skip",
//!   "decimals": 2
//! }
//! ```
//! Environment variables `GPA_LOCALE`, `GPA_UNKNOWN_GRADE` and `GPA_DECIMALS`
//! override the file.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::locale::Locale;

/// Env var naming the JSON config file.
pub const CONFIG_PATH_VAR: &str = "GPA_CONFIG";

/// What to do with a grade token outside the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownGradePolicy {
    /// Refuse to calculate.
    #[default]
    Reject,
    /// Drop the row from the calculation.
    Skip,
    /// Count the row as zero grade points with its hours included.
    Zero,
}

impl FromStr for UnknownGradePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(UnknownGradePolicy::Reject),
            "skip" => Ok(UnknownGradePolicy::Skip),
            "zero" => Ok(UnknownGradePolicy::Zero),
            other => Err(ConfigError::UnknownGradePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for UnknownGradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnknownGradePolicy::Reject => "reject",
            UnknownGradePolicy::Skip => "skip",
            UnknownGradePolicy::Zero => "zero",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub locale: Locale,
    pub unknown_grade: UnknownGradePolicy,
    /// Decimal places shown for GPA figures.
    pub decimals: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            unknown_grade: UnknownGradePolicy::Reject,
            decimals: 2,
        }
    }
}

impl CalculatorConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{path}'"))?;
        let config: CalculatorConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file '{path}'"))?;
        debug!(path, ?config, "Loaded config file");
        Ok(config)
    }

    /// Defaults, then the file at `path` (or `$GPA_CONFIG`), then the
    /// process environment.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_PATH_VAR).ok();
        let base = match path.or(env_path.as_deref()) {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok())?)
    }

    /// Applies `GPA_*` overrides obtained through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GPA_LOCALE") {
            self.locale = v.parse()?;
        }
        if let Some(v) = lookup("GPA_UNKNOWN_GRADE") {
            self.unknown_grade = v.parse()?;
        }
        if let Some(v) = lookup("GPA_DECIMALS") {
            self.decimals = v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|d| *d <= 6)
                .ok_or(ConfigError::InvalidDecimals(v))?;
        }
        Ok(self)
    }
}
