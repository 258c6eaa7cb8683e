use eframe::egui::{RichText, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::color::ChartPalette;
use crate::evaluation::chart::{Chart, ReferenceLine};
use crate::state::{ChartPane, PLACEHOLDER_TEXT};

// ---------------------------------------------------------------------------
// Chart panes (central panel)
// ---------------------------------------------------------------------------

/// Render one chart pane: its title, then either the chart or a placeholder.
pub fn chart_pane(ui: &mut Ui, id: &str, pane: &ChartPane, revision: u64, palette: ChartPalette) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(pane.title());
    });

    match pane {
        ChartPane::Placeholder { .. } => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new(PLACEHOLDER_TEXT).size(16.0).weak());
            });
        }
        ChartPane::Chart(chart) => scatter_chart(ui, id, chart, revision, palette),
    }
}

fn scatter_chart(ui: &mut Ui, id: &str, chart: &Chart, revision: u64, palette: ChartPalette) {
    // Keyed on the revision so a new dataset starts from fresh auto-bounds.
    Plot::new((id, revision))
        .legend(Legend::default())
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // Guide first so the markers sit on top of it.
            match &chart.reference {
                ReferenceLine::Segment { name, from, to } => {
                    let ends: PlotPoints = [*from, *to].into_iter().collect();
                    plot_ui.line(
                        Line::new(ends)
                            .name(*name)
                            .color(palette.reference)
                            .style(LineStyle::dashed_dense())
                            .width(1.5),
                    );
                }
                ReferenceLine::Horizontal { name, y } => {
                    plot_ui.hline(
                        HLine::new(*y)
                            .name(*name)
                            .color(palette.reference)
                            .style(LineStyle::dashed_dense())
                            .width(1.5),
                    );
                }
            }

            let points: PlotPoints = chart.scatter.points.iter().copied().collect();
            plot_ui.points(
                Points::new(points)
                    .name(chart.scatter.name)
                    .color(palette.points)
                    .radius(3.0),
            );
        });
}
