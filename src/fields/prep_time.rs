use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Result, ValidationError};

// `[0-9]` rather than `\d`: the latter matches every Unicode digit
static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):([0-5][0-9])$").expect("H:MM pattern is a valid regex")
});

/// Preparation time in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PreparationTime(u32);

impl PreparationTime {
    pub const MIN_MINUTES: u32 = 15;
    pub const MAX_MINUTES: u32 = 300;

    pub fn new(minutes: i64) -> Result<Self> {
        match u32::try_from(minutes) {
            Ok(m) if (Self::MIN_MINUTES..=Self::MAX_MINUTES).contains(&m) => {
                Ok(PreparationTime(m))
            }
            _ => Err(out_of_range()),
        }
    }

    /// Parse an `H:MM` string such as `"1:30"`.
    ///
    /// Hours may have any number of digits, minutes must be `00`..`59`. The
    /// total goes through [`PreparationTime::new`], so the same range applies.
    pub fn from_format(formatted: &str) -> Result<Self> {
        let caps = HOURS_MINUTES
            .captures(formatted.trim())
            .ok_or_else(|| {
                ValidationError::invalid("preparation_time", "must use the H:MM format (e.g. 1:30)")
            })?;

        // an hour count too large for i64 is out of range either way
        let hours: i64 = caps[1].parse().map_err(|_| out_of_range())?;
        let minutes: i64 = caps[2].parse().map_err(|_| out_of_range())?;

        let total = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .ok_or_else(out_of_range)?;

        Self::new(total)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 60.0
    }

    /// `H:MM` form, e.g. `"1:30"` for 90 minutes
    pub fn format(&self) -> String {
        format!("{}:{:02}", self.0 / 60, self.0 % 60)
    }

    pub fn equals(&self, other: &PreparationTime) -> bool {
        self == other
    }
}

fn out_of_range() -> ValidationError {
    ValidationError::invalid(
        "preparation_time",
        format!(
            "must be between {} and {} minutes",
            PreparationTime::MIN_MINUTES,
            PreparationTime::MAX_MINUTES
        ),
    )
}

impl fmt::Display for PreparationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for PreparationTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_format(s)
    }
}

impl TryFrom<i64> for PreparationTime {
    type Error = ValidationError;

    fn try_from(minutes: i64) -> Result<Self> {
        Self::new(minutes)
    }
}

impl From<PreparationTime> for u32 {
    fn from(time: PreparationTime) -> Self {
        time.0
    }
}
