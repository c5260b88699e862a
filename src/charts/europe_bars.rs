use super::{bounds, category_label, padded_range, Figure};
use crate::models::{EuropeCityRow, EuropeMonth};
use plotters::coord::Shift;
use plotters::prelude::*;

/// One month's temperature across the European comparison cities.
#[derive(Debug, Clone)]
pub struct EuropeBarFigure {
    pub month: EuropeMonth,
    pub bars: Vec<(String, f64)>,
}

impl EuropeBarFigure {
    pub fn prepare(cities: &[EuropeCityRow], month: EuropeMonth) -> Self {
        Self {
            month,
            bars: cities
                .iter()
                .map(|c| (c.city.clone(), c.celsius_for(month)))
                .collect(),
        }
    }

    /// One figure per month, October through January.
    pub fn for_each_month(cities: &[EuropeCityRow]) -> Vec<Self> {
        EuropeMonth::ALL
            .iter()
            .map(|month| Self::prepare(cities, *month))
            .collect()
    }
}

impl Figure for EuropeBarFigure {
    fn title(&self) -> String {
        format!("{} comparison Europe", self.month)
    }

    fn size_inches(&self) -> (f64, f64) {
        (12.0, 6.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let labels: Vec<String> = self.bars.iter().map(|(city, _)| city.clone()).collect();
        // Bars start at zero, so zero is always on the axis
        let (lo, hi) = bounds(self.bars.iter().map(|(_, v)| *v).chain([0.0])).unwrap_or((0.0, 1.0));

        let mut chart = ChartBuilder::on(root)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(50)
            .build_cartesian_2d(
                -0.5..(self.bars.len() as f64 - 0.5),
                padded_range(lo, hi),
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(self.bars.len())
            .x_label_formatter(&|v: &f64| category_label(&labels, *v))
            .y_desc("Temperature [°C]")
            .draw()?;

        chart.draw_series(self.bars.iter().enumerate().map(|(i, (_, value))| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, *value)], BLUE.mix(0.8).filled())
        }))?;

        Ok(())
    }
}
