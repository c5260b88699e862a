use super::{bounds, category_label};
use plotters::coord::Shift;
use plotters::prelude::*;

const COLORBAR_STEPS: usize = 100;

/// Diverging colour scales for heatmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Blue (cold) through pale yellow to red (warm)
    RedYellowBlue,
    /// Blue through grey to red
    CoolWarm,
}

impl Palette {
    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            Palette::RedYellowBlue => &[
                (49, 54, 149),
                (116, 173, 209),
                (255, 255, 191),
                (244, 109, 67),
                (165, 0, 38),
            ],
            Palette::CoolWarm => &[(59, 76, 192), (221, 221, 221), (180, 4, 38)],
        }
    }

    /// Colour for `t` in `[0, 1]`; values outside are clamped.
    pub fn color(&self, t: f64) -> RGBColor {
        let stops = self.stops();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - index as f64;

        let (r0, g0, b0) = stops[index];
        let (r1, g1, b1) = stops[index + 1];
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

        RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

/// A labelled grid of values, `cells[row][column]`, drawn with row 0 at the top.
pub struct Heatmap<'a> {
    pub cells: &'a [Vec<f64>],
    pub row_labels: &'a [String],
    pub column_labels: &'a [String],
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub scale_desc: &'a str,
    pub palette: Palette,
}

impl Heatmap<'_> {
    fn value_range(&self) -> (f64, f64) {
        match bounds(self.cells.iter().flatten().copied()) {
            Some((lo, hi)) if hi > lo => (lo, hi),
            Some((lo, _)) => (lo - 0.5, lo + 0.5),
            None => (0.0, 1.0),
        }
    }

    pub fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, caption: &str) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let rows = self.cells.len();
        let columns = self.cells.iter().map(Vec::len).max().unwrap_or(0);
        if rows == 0 || columns == 0 {
            anyhow::bail!("heatmap has no cells");
        }

        let (lo, hi) = self.value_range();
        let (grid_area, scale_area) = root.split_horizontally(85.percent_width());

        let mut chart = ChartBuilder::on(&grid_area)
            .caption(caption, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(
                -0.5..(columns as f64 - 0.5),
                -0.5..(rows as f64 - 0.5),
            )?;

        // Row 0 is drawn at the top, so y positions count down from the last row.
        let flip = |row: f64| (rows - 1) as f64 - row;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(columns)
            .y_labels(rows)
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .x_label_formatter(&|v: &f64| category_label(self.column_labels, *v))
            .y_label_formatter(&|v: &f64| category_label(self.row_labels, flip(*v)))
            .draw()?;

        chart.draw_series(self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, &value)| {
                let x = c as f64;
                let y = flip(r as f64);
                let color = self.palette.color((value - lo) / (hi - lo));
                Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], color.filled())
            })
        }))?;

        let mut scale = ChartBuilder::on(&scale_area)
            .margin_top(44)
            .margin_bottom(70)
            .margin_right(10)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..1.0, lo..hi)?;

        scale
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_desc(self.scale_desc)
            .draw()?;

        let step = (hi - lo) / COLORBAR_STEPS as f64;
        scale.draw_series((0..COLORBAR_STEPS).map(|i| {
            let start = lo + step * i as f64;
            let color = self.palette.color((i as f64 + 0.5) / COLORBAR_STEPS as f64);
            Rectangle::new([(0.0, start), (1.0, start + step)], color.filled())
        }))?;

        Ok(())
    }
}
