use super::{bounds, padded_range, Figure};
use crate::analyzers::LinearFit;
use crate::error::{ProcessingError, Result};
use crate::models::SensorSet;
use chrono::{Duration, NaiveDateTime};
use plotters::coord::types::RangedDateTime;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Temperature over time with a least-squares trend in °C per day.
#[derive(Debug, Clone)]
pub struct TrendFigure {
    pub series: Vec<(NaiveDateTime, f64)>,
    pub trend: Vec<(NaiveDateTime, f64)>,
    pub fit: LinearFit,
}

impl TrendFigure {
    /// Regress celsius on whole days since the first sample. Rows without a
    /// timestamp enter the fit at day 0; rows without celsius are dropped.
    pub fn prepare(sensors: &SensorSet) -> Result<Self> {
        let days = sensors.elapsed_days();

        let fit = LinearFit::fit_present(
            days.iter()
                .zip(&sensors.rows)
                .map(|(day, row)| (Some(*day as f64), row.celsius)),
        )?;

        let mut series: Vec<(NaiveDateTime, f64)> = sensors
            .rows
            .iter()
            .filter_map(|r| Some((r.timestamp?, r.celsius?)))
            .collect();
        series.sort_by_key(|(t, _)| *t);

        let mut trend: Vec<(NaiveDateTime, f64)> = days
            .iter()
            .zip(&sensors.rows)
            .filter_map(|(day, r)| Some((r.timestamp?, fit.predict(*day as f64))))
            .collect();
        trend.sort_by_key(|(t, _)| *t);

        if series.is_empty() {
            return Err(ProcessingError::InsufficientData(
                "No timestamped temperature readings to plot".to_string(),
            ));
        }

        Ok(Self { series, trend, fit })
    }

    pub fn legend_label(&self) -> String {
        format!(
            "Trend: {:.3}°C/day (R²={:.3})",
            self.fit.slope,
            self.fit.r_squared()
        )
    }

    fn time_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.series[0].0;
        let end = self.series[self.series.len() - 1].0;
        if end > start {
            (start, end)
        } else {
            (start, start + Duration::hours(1))
        }
    }
}

impl Figure for TrendFigure {
    fn title(&self) -> String {
        "Temperature trend".to_string()
    }

    fn size_inches(&self) -> (f64, f64) {
        (12.0, 4.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (start, end) = self.time_range();
        let (lo, hi) = bounds(self.series.iter().chain(&self.trend).map(|(_, v)| *v))
            .unwrap_or((0.0, 1.0));

        let mut chart = ChartBuilder::on(root)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(RangedDateTime::from(start..end), padded_range(lo, hi))?;

        chart
            .configure_mesh()
            .x_desc("Time")
            .y_desc("Temperature [°C]")
            .x_label_formatter(&|dt: &NaiveDateTime| dt.format("%Y-%m-%d").to_string())
            .light_line_style(BLACK.mix(0.15))
            .draw()?;

        chart.draw_series(LineSeries::new(
            self.series.iter().copied(),
            BLUE.mix(0.5).stroke_width(1),
        ))?;

        chart
            .draw_series(LineSeries::new(
                self.trend.iter().copied(),
                RED.stroke_width(2),
            ))?
            .label(self.legend_label())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}
