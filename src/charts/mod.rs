pub mod correlation;
pub mod europe_bars;
pub mod europe_heatmap;
pub mod heatmap;
pub mod report;
pub mod trend;
pub mod weekday_boxplot;
pub mod weekly_heatmap;

pub use correlation::CorrelationFigure;
pub use europe_bars::EuropeBarFigure;
pub use europe_heatmap::EuropeHeatmapFigure;
pub use report::ReportRenderer;
pub use trend::TrendFigure;
pub use weekday_boxplot::WeekdayBoxplotFigure;
pub use weekly_heatmap::WeeklyHeatmapFigure;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::FIRST_FIGURE_NUMBER;
use crate::utils::filename::figure_filename;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One report chart. Implementations hold the data they plot; drawing is
/// generic over the plotters backend so the same figure renders to PNG or SVG.
pub trait Figure {
    fn title(&self) -> String;

    /// Figure size in inches, scaled by the configured DPI.
    fn size_inches(&self) -> (f64, f64);

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

/// Hands out consecutive figure numbers, starting at 14.
#[derive(Debug, Clone)]
pub struct FigureCounter {
    next: u32,
}

impl FigureCounter {
    pub fn new() -> Self {
        Self::starting_at(FIRST_FIGURE_NUMBER)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn next_number(&mut self) -> u32 {
        let number = self.next;
        self.next += 1;
        number
    }
}

impl Default for FigureCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FigureCounter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_number())
    }
}

/// Writes figures into an output directory, one file per figure.
pub struct ChartWriter {
    output_dir: PathBuf,
    format: ChartFormat,
    dpi: u32,
}

impl ChartWriter {
    pub fn new(output_dir: &Path, format: ChartFormat, dpi: u32) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            format,
            dpi,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn pixel_size<F: Figure>(&self, figure: &F) -> (u32, u32) {
        let (width, height) = figure.size_inches();
        (
            (width * self.dpi as f64).round() as u32,
            (height * self.dpi as f64).round() as u32,
        )
    }

    /// Render `figure` under the next number from `counter` and return the
    /// written path.
    pub fn write<F: Figure>(&self, counter: &mut FigureCounter, figure: &F) -> Result<PathBuf> {
        let number = counter.next_number();
        let title = figure.title();
        let caption = format!("{}. {}", number, title);
        let path = self
            .output_dir
            .join(figure_filename(number, &title, self.format));
        let size = self.pixel_size(figure);

        debug!(figure = number, path = %path.display(), ?size, "Rendering chart");

        let rendered = match self.format {
            ChartFormat::Png => render(BitMapBackend::new(&path, size).into_drawing_area(), figure, &caption),
            ChartFormat::Svg => render(SVGBackend::new(&path, size).into_drawing_area(), figure, &caption),
        };

        rendered.map_err(|e| ProcessingError::Chart(format!("figure {} ({}): {:#}", number, title, e)))?;

        Ok(path)
    }
}

fn render<DB, F>(root: DrawingArea<DB, Shift>, figure: &F, caption: &str) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Figure,
{
    root.fill(&WHITE)?;
    figure.draw(&root, caption)?;
    root.present()?;
    Ok(())
}

/// Axis range around `[lo, hi]` with 10% headroom, widened when flat.
pub(crate) fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    let padding = if (hi - lo).abs() > 1e-6 {
        (hi - lo) * 0.1
    } else {
        1.0
    };
    (lo - padding)..(hi + padding)
}

pub(crate) fn bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Label for a categorical axis whose categories sit on integer positions.
pub(crate) fn category_label(labels: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}
