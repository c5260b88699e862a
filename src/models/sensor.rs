use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::MonthPeriod;

/// One sample from the local sensor feed.
///
/// Calendar fields are derived from `timestamp` on construction; a sample whose
/// timestamp could not be parsed keeps its readings but has no calendar fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRow {
    pub timestamp: Option<NaiveDateTime>,
    pub celsius: Option<f64>,
    pub humidity: Option<f64>,
    pub month: Option<MonthPeriod>,
    pub date: Option<NaiveDate>,
    pub hour: Option<u32>,
    /// Monday = 0 .. Sunday = 6
    pub weekday: Option<u32>,
}

impl SensorRow {
    pub fn new(
        timestamp: Option<NaiveDateTime>,
        celsius: Option<f64>,
        humidity: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            celsius,
            humidity,
            month: timestamp.map(MonthPeriod::from_datetime),
            date: timestamp.map(|t| t.date()),
            hour: timestamp.map(|t| t.hour()),
            weekday: timestamp.map(|t| t.weekday().num_days_from_monday()),
        }
    }

    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// All samples loaded from one sensor file, in file order.
#[derive(Debug, Clone, Default)]
pub struct SensorSet {
    pub rows: Vec<SensorRow>,
}

impl SensorSet {
    pub fn new(rows: Vec<SensorRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn invalid_timestamp_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.has_timestamp()).count()
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.rows.iter().filter_map(|r| r.timestamp).min()
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.rows.iter().filter_map(|r| r.timestamp).max()
    }

    /// Whole days elapsed since the earliest timestamp, one entry per row.
    ///
    /// Rows without a timestamp count as day 0, which pulls the trend line
    /// toward the start of the series.
    pub fn elapsed_days(&self) -> Vec<i64> {
        let start = match self.start() {
            Some(start) => start,
            None => return vec![0; self.rows.len()],
        };

        self.rows
            .iter()
            .map(|r| {
                r.timestamp
                    .map(|t| t.signed_duration_since(start).num_days())
                    .unwrap_or(0)
            })
            .collect()
    }
}
