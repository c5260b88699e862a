use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::MonthPeriod;

/// Long-term monthly climate norm for the reference location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateNormRow {
    pub month: MonthPeriod,
    pub celsius_norm: f64,
    pub humidity_norm: f64,
}

impl ClimateNormRow {
    pub fn new(month: MonthPeriod, celsius_norm: f64, humidity_norm: f64) -> Self {
        Self {
            month,
            celsius_norm,
            humidity_norm,
        }
    }
}

/// The four months covered by the European comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EuropeMonth {
    October,
    November,
    December,
    January,
}

impl EuropeMonth {
    pub const ALL: [EuropeMonth; 4] = [
        EuropeMonth::October,
        EuropeMonth::November,
        EuropeMonth::December,
        EuropeMonth::January,
    ];

    pub fn index(&self) -> usize {
        match self {
            EuropeMonth::October => 0,
            EuropeMonth::November => 1,
            EuropeMonth::December => 2,
            EuropeMonth::January => 3,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            EuropeMonth::October => "Oct",
            EuropeMonth::November => "Nov",
            EuropeMonth::December => "Dec",
            EuropeMonth::January => "Jan",
        }
    }
}

impl fmt::Display for EuropeMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Monthly temperature (and, where published, humidity) for one European city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EuropeCityRow {
    pub city: String,
    pub celsius: [f64; 4],
    pub humidity: [Option<f64>; 4],
}

impl EuropeCityRow {
    pub fn new(city: &str, celsius: [f64; 4], humidity: [Option<f64>; 4]) -> Self {
        Self {
            city: city.to_string(),
            celsius,
            humidity,
        }
    }

    pub fn celsius_for(&self, month: EuropeMonth) -> f64 {
        self.celsius[month.index()]
    }

    pub fn humidity_for(&self, month: EuropeMonth) -> Option<f64> {
        self.humidity[month.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_row_lookup() {
        let row = EuropeCityRow::new(
            "Berlin",
            [9.0, 4.0, 0.5, -0.5],
            [Some(80.0), Some(87.0), None, None],
        );

        assert_eq!(row.celsius_for(EuropeMonth::January), -0.5);
        assert_eq!(row.humidity_for(EuropeMonth::November), Some(87.0));
        assert_eq!(row.humidity_for(EuropeMonth::December), None);
    }

    #[test]
    fn test_month_order() {
        let names: Vec<&str> = EuropeMonth::ALL.iter().map(|m| m.short_name()).collect();
        assert_eq!(names, vec!["Oct", "Nov", "Dec", "Jan"]);
    }
}
