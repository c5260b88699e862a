use crate::models::{MonthPeriod, MonthlyAggregate, SensorSet};
use statrs::statistics::Statistics;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Default)]
struct MonthSamples {
    celsius: Vec<f64>,
    humidity: Vec<f64>,
    rows: usize,
}

pub struct MonthlyAggregator;

impl MonthlyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Mean celsius and humidity per month, ordered by month.
    ///
    /// Rows without a month are skipped; absent readings are left out of the
    /// mean, so a month whose readings are all absent has no mean.
    pub fn aggregate(&self, sensors: &SensorSet) -> Vec<MonthlyAggregate> {
        let grouped = self.group_by_month(sensors);

        let aggregates: Vec<MonthlyAggregate> = grouped
            .into_iter()
            .map(|(month, samples)| MonthlyAggregate {
                month,
                mean_celsius: mean_of(&samples.celsius),
                mean_humidity: mean_of(&samples.humidity),
                sample_count: samples.rows,
            })
            .collect();

        debug!(months = aggregates.len(), "Aggregated sensor rows by month");
        aggregates
    }

    fn group_by_month(&self, sensors: &SensorSet) -> BTreeMap<MonthPeriod, MonthSamples> {
        let mut grouped: BTreeMap<MonthPeriod, MonthSamples> = BTreeMap::new();

        for row in &sensors.rows {
            let Some(month) = row.month else {
                continue;
            };

            let entry = grouped.entry(month).or_default();
            entry.rows += 1;
            if let Some(celsius) = row.celsius {
                entry.celsius.push(celsius);
            }
            if let Some(humidity) = row.humidity {
                entry.humidity.push(humidity);
            }
        }

        grouped
    }
}

impl Default for MonthlyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().mean())
    }
}
