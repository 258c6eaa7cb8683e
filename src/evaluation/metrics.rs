use std::fmt;

use smartcore::metrics;

// ---------------------------------------------------------------------------
// Metrics snapshot
// ---------------------------------------------------------------------------

/// Regression error metrics for one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Mean absolute error.
    pub mae: f64,
    /// Mean squared error.
    pub mse: f64,
    /// Coefficient of determination.
    pub r2: f64,
}

impl Metrics {
    /// Label / formatted-value pairs in display order.
    pub fn entries(&self) -> [(&'static str, String); 3] {
        [
            ("Mean Absolute Error (MAE):", format!("{:.3}", self.mae)),
            ("Mean Squared Error (MSE):", format!("{:.3}", self.mse)),
            ("R-squared (R²):", format!("{:.3}", self.r2)),
        ]
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            writeln!(f, "{label}")?;
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Metric functions
// ---------------------------------------------------------------------------

/// Compute MAE, MSE and R² for paired `actual` / `predicted` slices.
pub fn compute_metrics(actual: &[f64], predicted: &[f64]) -> Metrics {
    debug_assert_eq!(actual.len(), predicted.len());
    Metrics {
        mae: mean_absolute_error(actual, predicted),
        mse: mean_squared_error(actual, predicted),
        r2: r2_score(actual, predicted),
    }
}

pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    metrics::mean_absolute_error(&actual.to_vec(), &predicted.to_vec())
}

pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    metrics::mean_squared_error(&actual.to_vec(), &predicted.to_vec())
}

/// `1 − SS_res / SS_tot`.
///
/// Degenerate inputs:
/// * fewer than two observations → NaN
/// * constant `actual` → 1.0 for a perfect fit, 0.0 otherwise
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() < 2 {
        return f64::NAN;
    }
    if actual.iter().all(|&a| a == actual[0]) {
        return if actual == predicted { 1.0 } else { 0.0 };
    }
    metrics::r2(&actual.to_vec(), &predicted.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn small_example_matches_hand_computation() {
        let m = compute_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]);
        assert!((m.mae - 1.0 / 3.0).abs() < EPS);
        assert!((m.mse - 1.0 / 3.0).abs() < EPS);
        // SS_res = 1, SS_tot = 2
        assert!((m.r2 - 0.5).abs() < EPS);
    }

    #[test]
    fn perfect_fit_has_zero_error_and_unit_r2() {
        let y = [2.0, -1.0, 7.5, 3.25];
        let m = compute_metrics(&y, &y);
        assert_eq!(m.mae, 0.0);
        assert_eq!(m.mse, 0.0);
        assert!((m.r2 - 1.0).abs() < EPS);
    }

    #[test]
    fn errors_are_never_negative() {
        let m = compute_metrics(&[5.0, 1.0, -2.0], &[-5.0, 3.0, -2.5]);
        assert!(m.mae >= 0.0);
        assert!(m.mse >= 0.0);
    }

    #[test]
    fn r2_is_negative_when_worse_than_the_mean() {
        let r2 = r2_score(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(r2 < 0.0, "r2 = {r2}");
    }

    #[test]
    fn r2_with_constant_actual() {
        assert_eq!(r2_score(&[3.0, 3.0, 3.0], &[3.0, 3.0, 3.0]), 1.0);
        assert_eq!(r2_score(&[3.0, 3.0, 3.0], &[2.0, 3.0, 4.0]), 0.0);
    }

    #[test]
    fn r2_with_spread_out_actual() {
        // mean 15, SS_tot 50, SS_res 8
        let r2 = r2_score(&[10.0, 20.0], &[12.0, 18.0]);
        assert!((r2 - 0.84).abs() < EPS, "r2 = {r2}");
    }

    #[test]
    fn r2_is_undefined_for_a_single_observation() {
        assert!(r2_score(&[1.0], &[1.0]).is_nan());
    }

    #[test]
    fn display_uses_three_decimals() {
        let m = compute_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]);
        assert_eq!(
            m.to_string(),
            "Mean Absolute Error (MAE):\n0.333\n\n\
             Mean Squared Error (MSE):\n0.333\n\n\
             R-squared (R²):\n0.500"
        );
    }

    #[test]
    fn nan_r2_is_shown_as_nan() {
        let m = compute_metrics(&[4.0], &[4.5]);
        assert_eq!(m.entries()[2].1, "NaN");
        assert_eq!(m.entries()[0].1, "0.500");
    }
}
