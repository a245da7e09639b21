//! Summary statistics and least-squares regression.
//!
//! These back the trend-line layer: the fitted line is drawn through the
//! retained points and annotated with r-squared. All functions operate on
//! `f64` slices and follow the population (not sample) conventions.

/// Arithmetic mean of a numeric sequence.
///
/// Returns `NaN` on an empty slice; callers on the render path guarantee at
/// least one retained row before fitting.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divisor = count, not count - 1).
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    let mu = mean(values);
    (values.iter().map(|v| (v - mu) * (v - mu)).sum::<f64>() / values.len() as f64).sqrt()
}

/// Pearson correlation coefficient over two equal-length sequences.
///
/// Returns `NaN` when either sequence has zero variance. That is accepted
/// degenerate-input behavior, not a guarded error.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let mx = mean(xs);
    let my = mean(ys);

    let covariance: f64 = xs.iter().zip(ys).map(|(x, y)| (x - mx) * (y - my)).sum();
    let sx: f64 = xs.iter().map(|x| (x - mx) * (x - mx)).sum::<f64>().sqrt();
    let sy: f64 = ys.iter().map(|y| (y - my) * (y - my)).sum::<f64>().sqrt();

    covariance / (sx * sy)
}

/// A fitted linear model `y = intercept + slope * x`.
///
/// Exposes both directions of evaluation: [`forward`](Self::forward) maps
/// x to y, [`invert`](Self::invert) maps y back to x. The inverse is what
/// clips the trend line to the visible y-range.
#[derive(Debug, Clone, Copy)]
pub struct LeastSquares {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Y-intercept of the fitted line.
    pub intercept: f64,
    correlation: f64,
}

impl LeastSquares {
    /// Fit a line to paired observations by least squares.
    ///
    /// Uses `slope = pearson * sd(y) / sd(x)`; a zero-variance x side yields
    /// non-finite coefficients that propagate into drawn-as-is geometry.
    #[must_use]
    pub fn fit(xs: &[f64], ys: &[f64]) -> Self {
        let r = pearson(xs, ys);
        let slope = r * std_dev(ys) / std_dev(xs);
        Self {
            slope,
            intercept: mean(ys) - slope * mean(xs),
            correlation: r,
        }
    }

    /// Evaluate the model at `x`.
    #[must_use]
    pub fn forward(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Solve the model for the `x` that produces `y`.
    #[must_use]
    pub fn invert(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    /// Coefficient of determination (Pearson squared).
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.correlation * self.correlation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_std_dev_population() {
        // Population sd of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(std_dev(&values), 2.0);
    }

    #[test]
    fn test_pearson_self_correlation() {
        let xs = [1.0, 3.0, 2.0, 7.0, 5.0];
        assert_relative_eq!(pearson(&xs, &xs), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_symmetric() {
        let xs = [1.0, 2.0, 4.0, 8.0];
        let ys = [3.0, 1.0, 5.0, 2.0];
        assert_relative_eq!(pearson(&xs, &ys), pearson(&ys, &xs));
    }

    #[test]
    fn test_pearson_anticorrelated() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [3.0, 2.0, 1.0];
        assert_relative_eq!(pearson(&xs, &ys), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_zero_variance_is_nan() {
        let xs = [2.0, 2.0, 2.0];
        let ys = [1.0, 2.0, 3.0];
        assert!(pearson(&xs, &ys).is_nan());
    }

    #[test]
    fn test_fit_doubling_data() {
        let fit = LeastSquares::fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_forward_invert_roundtrip() {
        let fit = LeastSquares::fit(&[1.0, 2.0, 4.0, 8.0], &[3.0, 1.0, 5.0, 2.0]);
        for x in [-10.0, 0.0, 0.5, 17.25] {
            assert_relative_eq!(fit.invert(fit.forward(x)), x, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fit_zero_x_variance_is_non_finite() {
        let fit = LeastSquares::fit(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]);
        assert!(!fit.slope.is_finite());
    }
}
