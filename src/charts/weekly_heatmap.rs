use super::heatmap::{Heatmap, Palette};
use super::Figure;
use crate::error::Result;
use crate::models::SensorSet;
use crate::processors::{pivot_by_weekday, weekly_means, WeekdayGrid};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Weekly mean temperature, one row per week.
#[derive(Debug, Clone)]
pub struct WeeklyHeatmapFigure {
    pub grid: WeekdayGrid,
}

impl WeeklyHeatmapFigure {
    pub fn prepare(sensors: &SensorSet) -> Result<Self> {
        let grid = pivot_by_weekday(&weekly_means(sensors))?;
        Ok(Self { grid })
    }
}

impl Figure for WeeklyHeatmapFigure {
    fn title(&self) -> String {
        "Weekly temperature heatmap".to_string()
    }

    fn size_inches(&self) -> (f64, f64) {
        (10.0, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let row_labels: Vec<String> = (0..self.grid.week_count()).map(|w| w.to_string()).collect();
        let column_labels: Vec<String> = self.grid.weekdays.iter().map(|d| d.to_string()).collect();

        Heatmap {
            cells: &self.grid.cells,
            row_labels: &row_labels,
            column_labels: &column_labels,
            x_desc: "Weekday",
            y_desc: "Week",
            scale_desc: "Temperature [°C]",
            palette: Palette::RedYellowBlue,
        }
        .draw(root, caption)
    }
}
