//! Evaluation layer: metric computation and chart descriptions.
//!
//! [`evaluate`] is a pure function of the dataset; the UI keeps the
//! result and redraws from it every frame.

pub mod chart;
pub mod metrics;

use crate::data::model::Dataset;

use chart::Chart;
use metrics::Metrics;

/// Metrics snapshot plus both diagnostic charts for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub metrics: Metrics,
    pub predicted_vs_actual: Chart,
    pub residuals: Chart,
}

pub fn evaluate(dataset: &Dataset) -> Evaluation {
    let series = dataset.series();
    Evaluation {
        metrics: metrics::compute_metrics(&series.actual, &series.predicted),
        predicted_vs_actual: chart::predicted_vs_actual(&series.actual, &series.predicted),
        residuals: chart::residuals(&series.actual, &series.residuals),
    }
}
