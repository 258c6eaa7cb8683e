use eframe::egui::{self, Align, Color32, Layout, RichText, TextEdit, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the load button and the status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Load CSV Dataset").clicked() {
            open_file_dialog(state);
        }

        ui.separator();

        let mut text = RichText::new(state.status.text());
        if state.status.is_error() {
            text = text.color(Color32::RED);
        }
        ui.with_layout(
            Layout::left_to_right(Align::Center)
                .with_main_align(Align::Center)
                .with_main_justify(true),
            |ui: &mut Ui| {
                ui.label(text);
            },
        );
    });
}

// ---------------------------------------------------------------------------
// Right side panel – metrics
// ---------------------------------------------------------------------------

/// Render the read-only metrics text area.
pub fn metrics_panel(ui: &mut Ui, state: &AppState) {
    ui.strong("Model Evaluation Metrics:");
    ui.separator();

    // A `&str` buffer makes the text edit read-only.
    let contents = state.metrics_text();
    let mut text = contents.as_str();
    ui.add_sized(
        ui.available_size(),
        TextEdit::multiline(&mut text).font(egui::TextStyle::Body),
    );
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV Dataset")
        .add_filter("CSV Files", &["csv"])
        .add_filter("All Files", &["*"])
        .pick_file();

    match file {
        Some(path) => state.load_dataset(&path),
        None => log::debug!("File selection cancelled"),
    }
}
