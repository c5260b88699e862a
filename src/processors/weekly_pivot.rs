use crate::error::{ProcessingError, Result};
use crate::models::SensorSet;
use chrono::{Datelike, Duration, NaiveDate};
use statrs::statistics::Statistics;
use std::collections::{BTreeMap, BTreeSet};

/// Mean celsius of one calendar week (Monday..Sunday), labelled by its Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyMean {
    pub week_ending: NaiveDate,
    pub mean_celsius: Option<f64>,
}

/// Week index x weekday index grid of weekly means.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayGrid {
    /// Weekday index (Monday = 0) of each column
    pub weekdays: Vec<u32>,
    /// `cells[week][column]`
    pub cells: Vec<Vec<f64>>,
}

impl WeekdayGrid {
    pub fn week_count(&self) -> usize {
        self.cells.len()
    }
}

fn week_ending(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - date.weekday().num_days_from_monday() as i64)
}

/// Resample celsius to weekly means covering every week from the first to the
/// last sample. Weeks without readings have no mean.
pub fn weekly_means(sensors: &SensorSet) -> Vec<WeeklyMean> {
    let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for row in &sensors.rows {
        if let Some(date) = row.date {
            let bucket = buckets.entry(week_ending(date)).or_default();
            if let Some(celsius) = row.celsius {
                bucket.push(celsius);
            }
        }
    }

    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    let mut weeks = Vec::new();
    let mut week = first;
    while week <= last {
        let mean_celsius = buckets
            .get(&week)
            .filter(|values| !values.is_empty())
            .map(|values| values.iter().mean());
        weeks.push(WeeklyMean {
            week_ending: week,
            mean_celsius,
        });
        week += Duration::days(7);
    }

    weeks
}

/// Pivot weekly means into rows by week position and columns by the weekday
/// of each week's label. Missing cells are 0.0, which renders as a cold cell
/// rather than as a gap.
pub fn pivot_by_weekday(weeks: &[WeeklyMean]) -> Result<WeekdayGrid> {
    if weeks.is_empty() {
        return Err(ProcessingError::InsufficientData(
            "No timestamped samples to resample into weeks".to_string(),
        ));
    }

    let weekdays: Vec<u32> = weeks
        .iter()
        .map(|w| w.week_ending.weekday().num_days_from_monday())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let cells = weeks
        .iter()
        .map(|w| {
            let day = w.week_ending.weekday().num_days_from_monday();
            weekdays
                .iter()
                .map(|&column| {
                    if column == day {
                        w.mean_celsius.unwrap_or(0.0)
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect();

    Ok(WeekdayGrid { weekdays, cells })
}
