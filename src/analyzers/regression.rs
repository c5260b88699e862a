use crate::error::{ProcessingError, Result};
use statrs::statistics::Statistics;

/// Ordinary least-squares fit of `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    pub sample_count: usize,
}

impl LinearFit {
    /// Fit paired samples. Fails on fewer than two pairs or when every `x` is
    /// identical, since the slope is undefined.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(ProcessingError::InsufficientData(format!(
                "Regression inputs differ in length: {} x values, {} y values",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(ProcessingError::InsufficientData(format!(
                "Regression needs at least 2 samples, got {}",
                xs.len()
            )));
        }

        let var_x = xs.iter().variance();
        if var_x == 0.0 {
            return Err(ProcessingError::InsufficientData(
                "Cannot fit a regression line when all x values are identical".to_string(),
            ));
        }

        let var_y = ys.iter().variance();
        let cov_xy = xs.iter().covariance(ys.iter());

        let slope = cov_xy / var_x;
        let intercept = ys.iter().mean() - slope * xs.iter().mean();
        let r_value = if var_y == 0.0 {
            0.0
        } else {
            (cov_xy / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
        };

        Ok(Self {
            slope,
            intercept,
            r_value,
            sample_count: xs.len(),
        })
    }

    /// Fit only the pairs where both values are present.
    pub fn fit_present(pairs: impl IntoIterator<Item = (Option<f64>, Option<f64>)>) -> Result<Self> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs
            .into_iter()
            .filter_map(|(x, y)| Some((x?, y?)))
            .unzip();
        Self::fit(&xs, &ys)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}
