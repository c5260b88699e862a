use super::{bounds, padded_range, Figure};
use crate::analyzers::LinearFit;
use crate::error::Result;
use crate::models::SensorSet;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Humidity against temperature with a fitted line.
#[derive(Debug, Clone)]
pub struct CorrelationFigure {
    /// (celsius, humidity) pairs where both readings are present
    pub points: Vec<(f64, f64)>,
    pub fit: LinearFit,
}

impl CorrelationFigure {
    pub fn prepare(sensors: &SensorSet) -> Result<Self> {
        let points: Vec<(f64, f64)> = sensors
            .rows
            .iter()
            .filter_map(|r| Some((r.celsius?, r.humidity?)))
            .collect();

        let (xs, ys): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        let fit = LinearFit::fit(&xs, &ys)?;

        Ok(Self { points, fit })
    }

    pub fn legend_label(&self) -> String {
        format!("slope={:.3}", self.fit.slope)
    }
}

impl Figure for CorrelationFigure {
    fn title(&self) -> String {
        "Correlation".to_string()
    }

    fn size_inches(&self) -> (f64, f64) {
        (6.0, 5.0)
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let (x_lo, x_hi) = bounds(self.points.iter().map(|(x, _)| *x)).unwrap_or((0.0, 1.0));
        let line = [
            (x_lo, self.fit.predict(x_lo)),
            (x_hi, self.fit.predict(x_hi)),
        ];
        let (y_lo, y_hi) = bounds(
            self.points
                .iter()
                .chain(line.iter())
                .map(|(_, y)| *y),
        )
        .unwrap_or((0.0, 1.0));

        let mut chart = ChartBuilder::on(root)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))?;

        chart
            .configure_mesh()
            .x_desc("Temp [°C]")
            .y_desc("Humidity [%]")
            .light_line_style(BLACK.mix(0.15))
            .draw()?;

        chart.draw_series(
            self.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 1, BLUE.mix(0.3).filled())),
        )?;

        chart
            .draw_series(LineSeries::new(line, RED.stroke_width(2)))?
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
