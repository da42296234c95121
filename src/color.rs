use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: year → Color32
// ---------------------------------------------------------------------------

/// Maps each observed year to a distinct colour, shared by the bar chart and
/// the pie wedges so a year reads the same across charts.
#[derive(Debug, Clone, Default)]
pub struct YearColors {
    mapping: BTreeMap<i32, Color32>,
}

impl YearColors {
    /// Build a colour map from the dataset's observed year set.
    pub fn new(years: &BTreeSet<i32>) -> Self {
        let palette = generate_palette(years.len());
        let mapping: BTreeMap<i32, Color32> = years
            .iter()
            .zip(palette.into_iter())
            .map(|(&year, color)| (year, color))
            .collect();

        YearColors { mapping }
    }

    /// Look up the colour for a year.
    pub fn color_for(&self, year: i32) -> Color32 {
        self.mapping.get(&year).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        let unique: std::collections::HashSet<_> = palette.iter().collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn unknown_year_falls_back_to_gray() {
        let years: BTreeSet<i32> = [1990, 1995].into_iter().collect();
        let colors = YearColors::new(&years);
        assert_ne!(colors.color_for(1990), Color32::GRAY);
        assert_eq!(colors.color_for(2001), Color32::GRAY);
    }
}
