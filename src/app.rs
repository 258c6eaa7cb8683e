use eframe::egui::{self, Ui};

use crate::color::ChartPalette;
use crate::state::AppState;
use crate::ui::{panels, plot};

const METRICS_MIN_WIDTH: f32 = 250.0;
const METRICS_MAX_WIDTH: f32 = 350.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ResidueApp {
    pub state: AppState,
}

impl eframe::App for ResidueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: load action + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::top_bar(ui, &mut self.state);
            ui.add_space(4.0);
        });

        // ---- Right side panel: metrics ----
        egui::SidePanel::right("metrics_panel")
            .default_width(METRICS_MIN_WIDTH)
            .width_range(METRICS_MIN_WIDTH..=METRICS_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                panels::metrics_panel(ui, &self.state);
            });

        // ---- Central panel: the two diagnostic charts ----
        let palette = ChartPalette::for_visuals(ctx.style().visuals.dark_mode);
        let state = &self.state;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns: &mut [Ui]| {
                plot::chart_pane(
                    &mut columns[0],
                    "predicted_vs_actual",
                    &state.predicted_vs_actual,
                    state.revision,
                    palette,
                );
                plot::chart_pane(
                    &mut columns[1],
                    "residuals",
                    &state.residuals,
                    state.revision,
                    palette,
                );
            });
        });
    }
}
