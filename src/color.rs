use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

// Premultiplied: blue at 60% and red at 80% opacity.
pub const POINT_FILL: Color32 = Color32::from_rgba_premultiplied(0, 74, 153, 153);
pub const MEAN_LINE: Color32 = Color32::from_rgba_premultiplied(204, 0, 0, 204);

/// Hue of the standard-deviation reference lines (orange).
const BAND_HUE: f32 = 39.0;

/// Colours for the `±k SD` reference lines, one per multiplier.
///
/// Same orange hue throughout; opacity starts at 0.6 and drops 0.2 per step,
/// floored at 0.1.
pub fn band_colors(n: usize) -> Vec<Color32> {
    let hsl = Hsl::new(BAND_HUE, 1.0, 0.5);
    let rgb: Srgb = hsl.into_color();
    let (r, g, b) = (
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    );

    (0..n)
        .map(|i| {
            let alpha = (0.6 - 0.2 * i as f32).max(0.1);
            Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0).round() as u8)
        })
        .collect()
}
