use serde::Deserialize;

// ---------------------------------------------------------------------------
// Observation – one row of the CSV
// ---------------------------------------------------------------------------

/// A ground-truth value paired with the model's prediction for it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "Actual")]
    pub actual: f64,
    #[serde(rename = "Predicted")]
    pub predicted: f64,
}

impl Observation {
    /// Prediction error for this row (predicted − actual).
    pub fn residual(&self) -> f64 {
        self.predicted - self.actual
    }
}

// ---------------------------------------------------------------------------
// DerivedSeries – columns extracted for metrics and plotting
// ---------------------------------------------------------------------------

/// Equal-length numeric columns extracted from a [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSeries {
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
    pub residuals: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded Actual/Predicted table, held wholesale in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub observations: Vec<Observation>,
}

impl Dataset {
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Dataset { observations }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Split the rows into the actual, predicted and residual series.
    pub fn series(&self) -> DerivedSeries {
        let n = self.len();
        let mut series = DerivedSeries {
            actual: Vec::with_capacity(n),
            predicted: Vec::with_capacity(n),
            residuals: Vec::with_capacity(n),
        };
        for obs in &self.observations {
            series.actual.push(obs.actual);
            series.predicted.push(obs.predicted);
            series.residuals.push(obs.residual());
        }
        series
    }
}
