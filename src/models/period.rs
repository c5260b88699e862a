use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, Result};

/// A calendar month, used as the grouping and join key between sensor
/// aggregates and the norm table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ProcessingError::InvalidFormat(format!(
                "Month must be between 1 and 12, got: {}",
                month
            )));
        }

        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn from_datetime(timestamp: NaiveDateTime) -> Self {
        Self::from_date(timestamp.date())
    }
}

impl FromStr for MonthPeriod {
    type Err = ProcessingError;

    /// Parse `YYYY-MM` (e.g. `2025-10`).
    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")?;
        Ok(Self::from_date(date))
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
