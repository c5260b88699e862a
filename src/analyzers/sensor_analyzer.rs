use crate::error::{ProcessingError, Result};
use crate::models::SensorSet;
use chrono::NaiveDateTime;
use statrs::statistics::Statistics;

#[derive(Debug)]
pub struct SensorStatistics {
    pub total_rows: usize,
    pub invalid_timestamps: usize,
    pub time_range: Option<(NaiveDateTime, NaiveDateTime)>,
    pub celsius: Option<ReadingStats>,
    pub humidity: Option<ReadingStats>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ReadingStats {
    fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        Some(Self {
            count: values.len(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: values.iter().mean(),
        })
    }
}

pub struct SensorAnalyzer;

impl SensorAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, sensors: &SensorSet) -> Result<SensorStatistics> {
        if sensors.is_empty() {
            return Err(ProcessingError::InsufficientData(
                "Sensor file contains no rows".to_string(),
            ));
        }

        let celsius: Vec<f64> = sensors.rows.iter().filter_map(|r| r.celsius).collect();
        let humidity: Vec<f64> = sensors.rows.iter().filter_map(|r| r.humidity).collect();

        Ok(SensorStatistics {
            total_rows: sensors.len(),
            invalid_timestamps: sensors.invalid_timestamp_count(),
            time_range: sensors.start().zip(sensors.end()),
            celsius: ReadingStats::from_values(&celsius),
            humidity: ReadingStats::from_values(&humidity),
        })
    }
}

impl Default for SensorAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorStatistics {
    pub fn valid_timestamp_percentage(&self) -> f64 {
        let valid = self.total_rows - self.invalid_timestamps;
        (valid as f64 / self.total_rows as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        let range = match self.time_range {
            Some((start, end)) => format!(
                "{} to {} ({} days)",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M"),
                end.signed_duration_since(start).num_days()
            ),
            None => "No valid timestamps".to_string(),
        };

        format!(
            "Sensor Readings: Temperature, Humidity\n\
            Rows: {} total, {} with unparseable timestamps ({:.1}% valid)\n\
            Time Range: {}\n\
            Temperature: {}\n\
            Humidity: {}",
            self.total_rows,
            self.invalid_timestamps,
            self.valid_timestamp_percentage(),
            range,
            describe(self.celsius.as_ref(), "°C"),
            describe(self.humidity.as_ref(), "%"),
        )
    }
}

fn describe(stats: Option<&ReadingStats>, unit: &str) -> String {
    match stats {
        Some(s) => format!(
            "{:.1}{unit} to {:.1}{unit}, mean {:.1}{unit} ({} readings)",
            s.min, s.max, s.mean, s.count
        ),
        None => "No valid measurements".to_string(),
    }
}
