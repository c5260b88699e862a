use super::heatmap::{Heatmap, Palette};
use super::Figure;
use crate::models::{EuropeCityRow, EuropeMonth};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Month x city temperature grid for the European comparison table.
#[derive(Debug, Clone)]
pub struct EuropeHeatmapFigure {
    pub cities: Vec<String>,
    pub months: Vec<EuropeMonth>,
    /// `cells[month][city]`
    pub cells: Vec<Vec<f64>>,
}

impl EuropeHeatmapFigure {
    pub fn prepare(cities: &[EuropeCityRow]) -> Self {
        let months = EuropeMonth::ALL.to_vec();
        let cells = months
            .iter()
            .map(|month| cities.iter().map(|c| c.celsius_for(*month)).collect())
            .collect();

        Self {
            cities: cities.iter().map(|c| c.city.clone()).collect(),
            months,
            cells,
        }
    }
}

impl Figure for EuropeHeatmapFigure {
    fn title(&self) -> String {
        "Europe heatmap".to_string()
    }

    fn size_inches(&self) -> (f64, f64) {
        (8.0, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let month_labels: Vec<String> = self.months.iter().map(|m| m.to_string()).collect();

        Heatmap {
            cells: &self.cells,
            row_labels: &month_labels,
            column_labels: &self.cities,
            x_desc: "City",
            y_desc: "Month",
            scale_desc: "°C",
            palette: Palette::CoolWarm,
        }
        .draw(root, caption)
    }
}
