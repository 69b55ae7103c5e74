use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Accent used for anything without its own colour.
pub const ACCENT_RED: Color32 = Color32::from_rgb(239, 68, 68);

// ---------------------------------------------------------------------------
// Red-family accents
// ---------------------------------------------------------------------------

/// Hue window around pure red, in degrees: crimson through orange-red.
const HUE_START: f32 = -25.0;
const HUE_SPAN: f32 = 50.0;

/// Two lightness bands, alternated so neighbouring hues stay apart.
const LIGHTNESS: [f32; 2] = [0.58, 0.72];

/// `n` accents spread across the red hue window.
pub fn red_accents(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.5 };
            let hue = (HUE_START + t * HUE_SPAN).rem_euclid(360.0);
            let rgb: Srgb = Hsl::new(hue, 0.8, LIGHTNESS[i % 2]).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue]
                .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Maker → Color32
// ---------------------------------------------------------------------------

/// Maps each manufacturer in the catalog to a distinct accent colour.
#[derive(Debug, Clone, Default)]
pub struct MakerPalette {
    mapping: BTreeMap<String, Color32>,
}

impl MakerPalette {
    /// Assign accents in maker order; the same maker list always yields the
    /// same colours.
    pub fn new(makers: &[String]) -> Self {
        let mapping = makers
            .iter()
            .cloned()
            .zip(red_accents(makers.len()))
            .collect();
        MakerPalette { mapping }
    }

    pub fn color_for(&self, maker: &str) -> Color32 {
        self.mapping.get(maker).copied().unwrap_or(ACCENT_RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_stay_red_and_distinct() {
        let colors = red_accents(8);
        assert_eq!(colors.len(), 8);
        for c in &colors {
            assert!(c.r() > c.g() && c.r() > c.b(), "{c:?} is not red-dominant");
        }
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(red_accents(0).is_empty());
        assert_eq!(red_accents(1).len(), 1);
    }

    #[test]
    fn unknown_maker_falls_back_to_accent() {
        let makers = vec!["Acme".to_string(), "Zenith".to_string()];
        let palette = MakerPalette::new(&makers);
        assert_ne!(palette.color_for("Acme"), palette.color_for("Zenith"));
        assert_eq!(palette.color_for("Nobody"), ACCENT_RED);
        assert_eq!(MakerPalette::default().color_for("Acme"), ACCENT_RED);
    }

    #[test]
    fn same_makers_same_colors() {
        let makers = vec!["Acme".to_string(), "Lotus".to_string()];
        let a = MakerPalette::new(&makers);
        let b = MakerPalette::new(&makers);
        assert_eq!(a.color_for("Lotus"), b.color_for("Lotus"));
    }
}
