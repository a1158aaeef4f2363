use palette::{Hsl, IntoColor, Srgb};
use serde::Serialize;

// ---------------------------------------------------------------------------
// RGB colour independent of the UI toolkit
// ---------------------------------------------------------------------------

/// Plain 8-bit RGB so chart descriptions stay serialisable and testable
/// without egui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(220, 30, 30);
}

impl From<Rgb> for eframe::egui::Color32 {
    fn from(c: Rgb) -> Self {
        eframe::egui::Color32::from_rgb(c.0, c.1, c.2)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
///
/// The hue walk starts at 200° so a single group is drawn in blue, away from
/// the red target line.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (200.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
