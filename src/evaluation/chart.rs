// ---------------------------------------------------------------------------
// Backend-independent chart descriptions
// ---------------------------------------------------------------------------

/// Fractional padding added to each side of an auto-scaled axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// A named point cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub name: &'static str,
    pub points: Vec<[f64; 2]>,
}

/// A dashed guide drawn behind the scatter.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceLine {
    /// Finite segment between two points.
    Segment {
        name: &'static str,
        from: [f64; 2],
        to: [f64; 2],
    },
    /// Horizontal line spanning the whole plot at `y`.
    Horizontal { name: &'static str, y: f64 },
}

/// Everything a plotting backend needs to draw one diagnostic chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub scatter: Scatter,
    pub reference: ReferenceLine,
}

// ---------------------------------------------------------------------------
// Axis limits
// ---------------------------------------------------------------------------

/// Auto-scaled `(lo, hi)` limits for an axis showing `values`.
///
/// The data range is padded by [`AXIS_MARGIN`] of its span on each side.
/// A zero span is first widened by the same fraction of the value's
/// magnitude (or to `±AXIS_MARGIN` around zero), then padded as usual.
pub fn auto_limits(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return (0.0, 1.0);
    }

    let tiny = min.abs().max(max.abs()) * 1e-15;
    if max - min <= tiny {
        if min == 0.0 && max == 0.0 {
            (min, max) = (-AXIS_MARGIN, AXIS_MARGIN);
        } else {
            min -= AXIS_MARGIN * min.abs();
            max += AXIS_MARGIN * max.abs();
        }
    }
    let span = max - min;
    (min - AXIS_MARGIN * span, max + AXIS_MARGIN * span)
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

/// Scatter of (actual, predicted) with the y = x ideal-fit line.
///
/// The line spans the union of both axes' auto-scaled limits rather than
/// the raw data extent.
pub fn predicted_vs_actual(actual: &[f64], predicted: &[f64]) -> Chart {
    let (x_lo, x_hi) = auto_limits(actual.iter().copied());
    let (y_lo, y_hi) = auto_limits(predicted.iter().copied());
    let lo = x_lo.min(y_lo);
    let hi = x_hi.max(y_hi);

    Chart {
        title: "Predicted vs. Actual Values",
        x_label: "Actual Values",
        y_label: "Predicted Values",
        scatter: Scatter {
            name: "Data Points",
            points: pairs(actual, predicted),
        },
        reference: ReferenceLine::Segment {
            name: "Ideal Fit",
            from: [lo, lo],
            to: [hi, hi],
        },
    }
}

/// Scatter of (actual, residual) with a zero-error line.
pub fn residuals(actual: &[f64], residuals: &[f64]) -> Chart {
    Chart {
        title: "Residual Plot",
        x_label: "Actual Values",
        y_label: "Residual (Predicted - Actual)",
        scatter: Scatter {
            name: "Residuals",
            points: pairs(actual, residuals),
        },
        reference: ReferenceLine::Horizontal {
            name: "Zero Error",
            y: 0.0,
        },
    }
}

fn pairs(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect()
}
