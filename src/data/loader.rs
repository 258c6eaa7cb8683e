use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, anyhow};
use thiserror::Error;

use super::model::{Dataset, Observation};

/// Columns every evaluation CSV must carry (exact, case-sensitive names).
pub const REQUIRED_COLUMNS: [&str; 2] = ["Actual", "Predicted"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a dataset could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The header row lacks one or both required columns.
    #[error("CSV must contain 'Actual' and 'Predicted' columns.")]
    MissingColumns { missing: Vec<&'static str> },

    /// The file could not be read or parsed as a numeric table.
    #[error("{0:#}")]
    Parse(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an Actual/Predicted dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_csv_from_reader(file)
}

/// CSV layout: header row, then one observation per line.
/// `Actual` and `Predicted` must parse as finite floats; any other
/// columns are ignored.
pub fn load_csv_from_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(source);

    let headers = reader.headers().context("reading CSV header")?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(anyhow!("no columns to parse from file").into());
    }

    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|h| h == *required))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { missing });
    }

    let mut observations = Vec::new();
    for (row_no, result) in reader.deserialize::<Observation>().enumerate() {
        let row = row_no + 1;
        let obs = result.with_context(|| format!("CSV row {row}"))?;
        if !obs.actual.is_finite() || !obs.predicted.is_finite() {
            return Err(anyhow!("CSV row {row}: values must be finite numbers").into());
        }
        observations.push(obs);
    }

    let dataset = Dataset::from_observations(observations);
    if dataset.is_empty() {
        return Err(anyhow!("CSV contains no data rows").into());
    }
    Ok(dataset)
}
