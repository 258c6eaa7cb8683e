use std::path::Path;

use crate::data::loader::{self, LoadError};
use crate::data::model::Dataset;
use crate::evaluation::chart::Chart;
use crate::evaluation::metrics::Metrics;
use crate::evaluation::{self, Evaluation};

pub const PLACEHOLDER_TEXT: &str = "Load a dataset to generate plot";
pub const PREDICTED_VS_ACTUAL_TITLE: &str = "Predicted vs. Actual";
pub const RESIDUALS_TITLE: &str = "Residuals";
pub const WELCOME_MESSAGE: &str =
    "Please load a CSV dataset containing 'Actual' and 'Predicted' columns.";

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Text shown in the single-line status area.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    /// Rendered in a distinct error colour.
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(s) | Status::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

// ---------------------------------------------------------------------------
// Chart panes
// ---------------------------------------------------------------------------

/// What one chart pane currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPane {
    Placeholder { title: &'static str },
    Chart(Chart),
}

impl ChartPane {
    pub fn title(&self) -> &'static str {
        match self {
            ChartPane::Placeholder { title } => title,
            ChartPane::Chart(chart) => chart.title,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Either `dataset` is `None` and every pane is a placeholder, or it holds
/// a validated dataset and the panes show its evaluation.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Status / error message shown in the top bar.
    pub status: Status,

    pub predicted_vs_actual: ChartPane,
    pub residuals: ChartPane,

    /// Latest metrics snapshot, shown in the metrics text area.
    pub metrics: Option<Metrics>,

    /// Bumped on every render so plots drop zoom state from older data.
    pub revision: u64,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            dataset: None,
            status: Status::Info(WELCOME_MESSAGE.to_string()),
            predicted_vs_actual: ChartPane::Placeholder {
                title: PREDICTED_VS_ACTUAL_TITLE,
            },
            residuals: ChartPane::Placeholder {
                title: RESIDUALS_TITLE,
            },
            metrics: None,
            revision: 0,
        };
        state.clear_to_placeholder();
        state
    }
}

impl AppState {
    /// Whether a validated dataset is currently shown.
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Contents of the read-only metrics text area.
    pub fn metrics_text(&self) -> String {
        self.metrics.map(|m| m.to_string()).unwrap_or_default()
    }

    /// Read `path`, validate it and, on success, show its evaluation.
    ///
    /// Any failure leaves the window empty with the reason on the status line.
    pub fn load_dataset(&mut self, path: &Path) {
        match loader::load_csv(path) {
            Ok(dataset) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                log::info!("Loaded {} rows from {}", dataset.len(), path.display());
                self.status = Status::Info(format!("Loaded: {name}"));
                self.dataset = Some(dataset);
                self.render_evaluation();
            }
            Err(LoadError::MissingColumns { missing }) => {
                log::warn!("{} is missing columns {missing:?}", path.display());
                self.status = Status::Error(
                    "Error: CSV must contain 'Actual' and 'Predicted' columns.".to_string(),
                );
                self.dataset = None;
                self.clear_to_placeholder();
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status = Status::Error(format!("Error loading CSV: {e}"));
                self.dataset = None;
                self.clear_to_placeholder();
            }
        }
    }

    /// Reset both chart panes to their placeholder and empty the metrics.
    pub fn clear_to_placeholder(&mut self) {
        self.predicted_vs_actual = ChartPane::Placeholder {
            title: PREDICTED_VS_ACTUAL_TITLE,
        };
        self.residuals = ChartPane::Placeholder {
            title: RESIDUALS_TITLE,
        };
        self.metrics = None;
    }

    /// Recompute metrics and both charts from the current dataset.
    pub fn render_evaluation(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.clear_to_placeholder();
            return;
        };

        let Evaluation {
            metrics,
            predicted_vs_actual,
            residuals,
        } = evaluation::evaluate(dataset);
        log::info!(
            "MAE {:.3}, MSE {:.3}, R² {:.3} over {} rows",
            metrics.mae,
            metrics.mse,
            metrics.r2,
            dataset.len()
        );

        self.metrics = Some(metrics);
        self.predicted_vs_actual = ChartPane::Chart(predicted_vs_actual);
        self.residuals = ChartPane::Chart(residuals);
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::evaluation::chart::ReferenceLine;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn assert_empty(state: &AppState) {
        assert!(!state.is_loaded());
        assert!(state.metrics.is_none());
        assert!(state.metrics_text().is_empty());
        assert_eq!(
            state.predicted_vs_actual,
            ChartPane::Placeholder { title: PREDICTED_VS_ACTUAL_TITLE }
        );
        assert_eq!(
            state.residuals,
            ChartPane::Placeholder { title: RESIDUALS_TITLE }
        );
    }

    #[test]
    fn starts_empty_with_welcome_message() {
        let state = AppState::default();
        assert_empty(&state);
        assert_eq!(state.status, Status::Info(WELCOME_MESSAGE.to_string()));
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn valid_file_loads_and_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "model_a.csv", "Actual,Predicted\n1,1\n2,2\n3,4\n");

        let mut state = AppState::default();
        state.load_dataset(&path);

        assert!(state.is_loaded());
        assert_eq!(state.status, Status::Info("Loaded: model_a.csv".to_string()));
        let metrics = state.metrics.unwrap();
        assert!((metrics.mae - 1.0 / 3.0).abs() < 1e-12);
        assert!((metrics.r2 - 0.5).abs() < 1e-12);
        assert!(state.metrics_text().contains("0.333"));
        assert_eq!(state.predicted_vs_actual.title(), "Predicted vs. Actual Values");
        assert_eq!(state.residuals.title(), "Residual Plot");
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn missing_column_leaves_window_empty_without_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "no_pred.csv", "Actual,Guess\n1,1\n2,3\n");

        let mut state = AppState::default();
        state.load_dataset(&path);

        assert_empty(&state);
        assert_eq!(state.revision, 0);
        assert_eq!(
            state.status,
            Status::Error("Error: CSV must contain 'Actual' and 'Predicted' columns.".to_string())
        );
    }

    #[test]
    fn reload_replaces_previous_evaluation() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_csv(&dir, "first.csv", "Actual,Predicted\n1,1\n2,2\n3,4\n");
        let second = write_csv(&dir, "second.csv", "Actual,Predicted\n10,12\n20,18\n");

        let mut state = AppState::default();
        state.load_dataset(&first);
        state.load_dataset(&second);

        assert_eq!(state.status.text(), "Loaded: second.csv");
        assert_eq!(state.dataset.as_ref().map(Dataset::len), Some(2));
        assert_eq!(state.revision, 2);
        match &state.residuals {
            ChartPane::Chart(chart) => {
                assert_eq!(chart.scatter.points, vec![[10.0, 2.0], [20.0, -2.0]]);
                assert!(matches!(chart.reference, ReferenceLine::Horizontal { .. }));
            }
            other => panic!("expected a chart, got {other:?}"),
        }
        match &state.predicted_vs_actual {
            ChartPane::Chart(chart) => assert_eq!(chart.scatter.points.len(), 2),
            other => panic!("expected a chart, got {other:?}"),
        }
        let text = state.metrics_text();
        assert!(text.contains("4.000"), "{text}");
    }

    #[test]
    fn failed_load_after_success_returns_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(&dir, "good.csv", "Actual,Predicted\n1,2\n3,4\n");
        let corrupt = write_csv(&dir, "corrupt.csv", "Actual,Predicted\n1,x\n");

        let mut state = AppState::default();
        state.load_dataset(&good);
        assert!(state.is_loaded());

        state.load_dataset(&corrupt);
        assert_empty(&state);
        assert!(state.status.is_error());
        assert!(state.status.text().starts_with("Error loading CSV: "));
    }

    #[test]
    fn missing_column_after_success_returns_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_csv(&dir, "good.csv", "Actual,Predicted\n1,2\n3,4\n");
        let no_pred = write_csv(&dir, "no_pred.csv", "Actual,Guess\n1,2\n");

        let mut state = AppState::default();
        state.load_dataset(&good);
        assert!(state.is_loaded());
        assert_eq!(state.revision, 1);

        state.load_dataset(&no_pred);
        assert_empty(&state);
        assert_eq!(state.revision, 1);
        assert_eq!(
            state.status,
            Status::Error("Error: CSV must contain 'Actual' and 'Predicted' columns.".to_string())
        );
    }

    #[test]
    fn nonexistent_path_shows_error_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.load_dataset(&dir.path().join("nope.csv"));

        assert_empty(&state);
        assert!(state.status.is_error());
        assert!(state.status.text().contains("nope.csv"));
    }

    #[test]
    fn render_without_dataset_clears_panes() {
        let mut state = AppState::default();
        state.metrics = Some(Metrics { mae: 1.0, mse: 1.0, r2: 0.0 });
        state.render_evaluation();
        assert_empty(&state);
        assert_eq!(state.revision, 0);
    }
}
