use crate::models::{ClimateNormRow, ComparisonRow, MonthPeriod, MonthlyAggregate};
use std::collections::BTreeMap;
use tracing::debug;

pub struct ComparisonMerger;

impl ComparisonMerger {
    pub fn new() -> Self {
        Self
    }

    /// Outer join of sensor monthly means and the norm table on month.
    ///
    /// Every month from either side appears exactly once, sorted by month;
    /// fields from the side that lacks the month stay `None`.
    pub fn merge(
        &self,
        aggregates: &[MonthlyAggregate],
        norms: &[ClimateNormRow],
    ) -> Vec<ComparisonRow> {
        let mut merged: BTreeMap<MonthPeriod, ComparisonRow> = BTreeMap::new();

        for aggregate in aggregates {
            let entry = merged
                .entry(aggregate.month)
                .or_insert_with(|| ComparisonRow::empty(aggregate.month));
            entry.mean_celsius = aggregate.mean_celsius;
            entry.mean_humidity = aggregate.mean_humidity;
        }

        for norm in norms {
            let entry = merged
                .entry(norm.month)
                .or_insert_with(|| ComparisonRow::empty(norm.month));
            entry.celsius_norm = Some(norm.celsius_norm);
            entry.humidity_norm = Some(norm.humidity_norm);
        }

        debug!(
            sensor_months = aggregates.len(),
            norm_months = norms.len(),
            merged_months = merged.len(),
            "Merged monthly comparison"
        );

        merged.into_values().collect()
    }

    /// Plain-text table of the comparison, one line per month.
    pub fn report(&self, rows: &[ComparisonRow]) -> String {
        let mut lines = vec![format!(
            "{:<8} {:>9} {:>9} {:>8} {:>10} {:>10} {:>8}",
            "Month", "Sensor°C", "Norm°C", "Δ°C", "Sensor%", "Norm%", "Δ%"
        )];

        for row in rows {
            lines.push(format!(
                "{:<8} {:>9} {:>9} {:>8} {:>10} {:>10} {:>8}",
                row.month.to_string(),
                format_value(row.mean_celsius),
                format_value(row.celsius_norm),
                format_delta(row.celsius_delta()),
                format_value(row.mean_humidity),
                format_value(row.humidity_norm),
                format_delta(row.humidity_delta()),
            ));
        }

        lines.join("\n")
    }
}

impl Default for ComparisonMerger {
    fn default() -> Self {
        Self::new()
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn format_delta(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:+.1}", v))
}
