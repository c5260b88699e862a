use super::{
    ChartWriter, CorrelationFigure, EuropeBarFigure, EuropeHeatmapFigure, Figure, FigureCounter,
    TrendFigure, WeekdayBoxplotFigure, WeeklyHeatmapFigure,
};
use crate::error::Result;
use crate::models::{EuropeCityRow, SensorSet};
use crate::utils::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::info;

/// Figures 14 through 22.
pub const REPORT_FIGURE_COUNT: u64 = 9;

/// Renders the report figures in order, each one finished before the next
/// starts. Any figure that cannot be built stops the report.
pub struct ReportRenderer {
    writer: ChartWriter,
}

impl ReportRenderer {
    pub fn new(writer: ChartWriter) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &ChartWriter {
        &self.writer
    }

    pub fn render_all(
        &self,
        sensors: &SensorSet,
        cities: &[EuropeCityRow],
        counter: &mut FigureCounter,
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(self.writer.output_dir())?;
        let mut written = Vec::with_capacity(REPORT_FIGURE_COUNT as usize);

        written.push(self.emit(counter, &TrendFigure::prepare(sensors)?, progress)?);
        written.push(self.emit(counter, &WeeklyHeatmapFigure::prepare(sensors)?, progress)?);
        written.push(self.emit(counter, &WeekdayBoxplotFigure::prepare(sensors)?, progress)?);
        written.push(self.emit(counter, &CorrelationFigure::prepare(sensors)?, progress)?);

        for figure in EuropeBarFigure::for_each_month(cities) {
            written.push(self.emit(counter, &figure, progress)?);
        }

        written.push(self.emit(counter, &EuropeHeatmapFigure::prepare(cities), progress)?);

        Ok(written)
    }

    fn emit<F: Figure>(
        &self,
        counter: &mut FigureCounter,
        figure: &F,
        progress: Option<&ProgressReporter>,
    ) -> Result<PathBuf> {
        if let Some(progress) = progress {
            progress.set_message(&format!("Rendering {}...", figure.title()));
        }

        let path = self.writer.write(counter, figure)?;
        info!(path = %path.display(), "Wrote chart");

        if let Some(progress) = progress {
            progress.increment(1);
        }

        Ok(path)
    }
}
