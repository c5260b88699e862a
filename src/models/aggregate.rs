use serde::{Deserialize, Serialize};

use crate::models::MonthPeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: MonthPeriod,
    pub mean_celsius: Option<f64>,
    pub mean_humidity: Option<f64>,
    pub sample_count: usize,
}

/// One month of the sensor-vs-norm comparison. Either side may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub month: MonthPeriod,
    pub mean_celsius: Option<f64>,
    pub mean_humidity: Option<f64>,
    pub celsius_norm: Option<f64>,
    pub humidity_norm: Option<f64>,
}

impl ComparisonRow {
    pub fn empty(month: MonthPeriod) -> Self {
        Self {
            month,
            mean_celsius: None,
            mean_humidity: None,
            celsius_norm: None,
            humidity_norm: None,
        }
    }

    pub fn celsius_delta(&self) -> Option<f64> {
        Some(self.mean_celsius? - self.celsius_norm?)
    }

    pub fn humidity_delta(&self) -> Option<f64> {
        Some(self.mean_humidity? - self.humidity_norm?)
    }

    pub fn has_sensor_data(&self) -> bool {
        self.mean_celsius.is_some() || self.mean_humidity.is_some()
    }

    pub fn has_norm(&self) -> bool {
        self.celsius_norm.is_some() || self.humidity_norm.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        let mut row = ComparisonRow::empty(MonthPeriod::new(2025, 11).unwrap());
        assert_eq!(row.celsius_delta(), None);

        row.mean_celsius = Some(5.0);
        assert_eq!(row.celsius_delta(), None);

        row.celsius_norm = Some(4.2);
        assert!((row.celsius_delta().unwrap() - 0.8).abs() < 1e-9);
        assert!(row.has_sensor_data());
        assert!(row.has_norm());
    }
}
