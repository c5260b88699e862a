//! Static reference tables shipped with the report: the monthly climate norm
//! for the sensor's location and a comparison table of European cities.

use crate::error::Result;
use crate::models::{ClimateNormRow, EuropeCityRow, MonthPeriod};

/// (month, celsius norm, humidity norm)
const CLIMATE_NORMS: [(&str, f64, f64); 4] = [
    ("2025-10", 9.5, 82.0),
    ("2025-11", 4.2, 88.0),
    ("2025-12", 0.8, 90.0),
    ("2026-01", -0.5, 89.0),
];

/// (city, Oct/Nov/Dec/Jan celsius, Oct/Nov humidity)
const EUROPE_CITIES: [(&str, [f64; 4], [f64; 2]); 11] = [
    ("Köthen", [4.5, 3.5, 1.0, 0.5], [75.0, 85.0]),
    ("Berlin", [9.0, 4.0, 0.5, -0.5], [80.0, 87.0]),
    ("Warsaw", [8.5, 3.5, 0.0, -1.5], [82.0, 88.0]),
    ("Prague", [9.2, 4.2, 0.8, -1.0], [78.0, 86.0]),
    ("Vienna", [10.0, 5.0, 1.5, 0.0], [77.0, 85.0]),
    ("Budapest", [10.5, 5.5, 1.8, 0.5], [76.0, 84.0]),
    ("Bucharest", [11.0, 6.0, 2.0, 1.0], [75.0, 83.0]),
    ("Krakow", [8.0, 3.8, 0.2, -2.0], [83.0, 87.0]),
    ("Bratislava", [9.8, 4.8, 1.2, 0.2], [79.0, 86.0]),
    ("Dresden", [9.2, 4.5, 0.8, -0.5], [81.0, 88.0]),
    ("Leipzig", [9.0, 4.0, 0.5, -0.2], [80.0, 87.0]),
];

/// Monthly climate norm table for the sensor location, ordered by month.
pub fn climate_norms() -> Result<Vec<ClimateNormRow>> {
    CLIMATE_NORMS
        .iter()
        .map(|(month, celsius, humidity)| -> Result<ClimateNormRow> {
            Ok(ClimateNormRow::new(
                month.parse::<MonthPeriod>()?,
                *celsius,
                *humidity,
            ))
        })
        .collect()
}

/// European comparison table in its published city order.
pub fn europe_cities() -> Vec<EuropeCityRow> {
    EUROPE_CITIES
        .iter()
        .map(|(city, celsius, [oct_h, nov_h])| {
            EuropeCityRow::new(city, *celsius, [Some(*oct_h), Some(*nov_h), None, None])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EuropeMonth;

    #[test]
    fn test_climate_norms() {
        let norms = climate_norms().unwrap();

        assert_eq!(norms.len(), 4);
        assert_eq!(norms[0].month.to_string(), "2025-10");
        assert_eq!(norms[3].month.to_string(), "2026-01");
        assert_eq!(norms[3].celsius_norm, -0.5);
        assert!(norms.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn test_europe_cities() {
        let cities = europe_cities();

        assert_eq!(cities.len(), 11);
        assert_eq!(cities[0].city, "Köthen");
        assert_eq!(cities[7].celsius_for(EuropeMonth::January), -2.0);
        assert_eq!(cities[10].humidity_for(EuropeMonth::October), Some(80.0));
        assert!(cities
            .iter()
            .all(|c| c.humidity_for(EuropeMonth::January).is_none()));
    }
}
