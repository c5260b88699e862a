use super::{bounds, category_label, padded_range, Figure};
use crate::error::{ProcessingError, Result};
use crate::models::SensorSet;
use crate::utils::constants::WEEKDAY_NAMES;
use plotters::coord::Shift;
use plotters::data::Quartiles;
use plotters::prelude::*;
use std::collections::BTreeMap;

/// Distribution of raw temperature readings per weekday.
#[derive(Debug, Clone)]
pub struct WeekdayBoxplotFigure {
    /// (weekday index, readings), only weekdays that have readings
    pub groups: Vec<(u32, Vec<f64>)>,
}

impl WeekdayBoxplotFigure {
    pub fn prepare(sensors: &SensorSet) -> Result<Self> {
        let mut grouped: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for row in &sensors.rows {
            if let (Some(weekday), Some(celsius)) = (row.weekday, row.celsius) {
                grouped.entry(weekday).or_default().push(celsius);
            }
        }

        if grouped.is_empty() {
            return Err(ProcessingError::InsufficientData(
                "No dated temperature readings to group by weekday".to_string(),
            ));
        }

        Ok(Self {
            groups: grouped.into_iter().collect(),
        })
    }

    pub fn quartiles(&self) -> Vec<(u32, Quartiles)> {
        self.groups
            .iter()
            .map(|(day, values)| (*day, Quartiles::new(values)))
            .collect()
    }
}

impl Figure for WeekdayBoxplotFigure {
    fn title(&self) -> String {
        "Temperature by weekday".to_string()
    }

    fn size_inches(&self) -> (f64, f64) {
        (8.0, 5.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let quartiles = self.quartiles();
        let labels: Vec<String> = WEEKDAY_NAMES.iter().map(|d| d.to_string()).collect();

        let (lo, hi) = bounds(
            self.groups
                .iter()
                .flat_map(|(_, values)| values.iter().copied())
                .chain(
                    quartiles
                        .iter()
                        .flat_map(|(_, q)| q.values().into_iter().map(f64::from)),
                ),
        )
        .unwrap_or((0.0, 1.0));
        let y_range = padded_range(lo, hi);

        let mut chart = ChartBuilder::on(root)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                -0.5..(WEEKDAY_NAMES.len() as f64 - 0.5),
                (y_range.start as f32)..(y_range.end as f32),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(WEEKDAY_NAMES.len())
            .x_label_formatter(&|v: &f64| category_label(&labels, *v))
            .x_desc("Weekday")
            .y_desc("Temperature [°C]")
            .draw()?;

        chart.draw_series(quartiles.iter().map(|(day, q)| {
            Boxplot::new_vertical(*day as f64, q)
                .width(30)
                .whisker_width(0.5)
                .style(BLUE.stroke_width(2))
        }))?;

        // Readings beyond the whiskers
        chart.draw_series(quartiles.iter().zip(&self.groups).flat_map(|((day, q), (_, values))| {
            let [lower_fence, _, _, _, upper_fence] = q.values();
            values
                .iter()
                .map(|v| *v as f32)
                .filter(move |v| *v < lower_fence || *v > upper_fence)
                .map(move |v| Circle::new((*day as f64, v), 3, BLACK.stroke_width(1)))
        }))?;

        Ok(())
    }
}
