use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

const POINT_HUE: f32 = 205.0;
const REFERENCE_HUE: f32 = 0.0;

pub const POINT_ALPHA: f32 = 0.7;
pub const REFERENCE_ALPHA: f32 = 0.75;

/// Convert an HSL triple plus opacity into an egui colour.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgba_unmultiplied(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
        (alpha * 255.0).round() as u8,
    )
}

/// Colours for the scatter markers and the dashed guide lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub points: Color32,
    pub reference: Color32,
}

impl ChartPalette {
    /// Lighter tones on dark backgrounds so the markers stay visible.
    pub fn for_visuals(dark_mode: bool) -> Self {
        let lightness = if dark_mode { 0.62 } else { 0.42 };
        ChartPalette {
            points: hsl_color(POINT_HUE, 0.65, lightness, POINT_ALPHA),
            reference: hsl_color(REFERENCE_HUE, 0.8, lightness + 0.05, REFERENCE_ALPHA),
        }
    }
}
