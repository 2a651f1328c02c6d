use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

/// Hue (degrees) of the first category colour.
const CATEGORY_START_HUE: f32 = 210.0;
/// Golden angle: consecutive categories land far apart on the wheel.
const GOLDEN_ANGLE: f32 = 137.507_77;

const FAILURE_HUE: f32 = 5.0;
const SUCCESS_HUE: f32 = 135.0;

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// `n` distinct category colours stepping by the golden angle from blue.
///
/// The first colours stay the same when more categories are added.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| hsl((CATEGORY_START_HUE + i as f32 * GOLDEN_ANGLE) % 360.0, 0.7, 0.55))
        .collect()
}

/// Red for a failed launch (0), green for a successful one (1).
pub fn outcome_color(outcome_class: u8) -> Color32 {
    if outcome_class == 1 {
        hsl(SUCCESS_HUE, 0.55, 0.45)
    } else {
        hsl(FAILURE_HUE, 0.65, 0.5)
    }
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (booster versions, pie slices) to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map over the given labels; duplicates share a colour.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: std::collections::BTreeSet<String> =
            labels.into_iter().map(Into::into).collect();
        let palette = generate_palette(unique.len());
        let mapping = unique.into_iter().zip(palette).collect();

        ColorMap { mapping }
    }

    /// Fixed outcome colours for the single-site pie, keyed `"0"` / `"1"`.
    pub fn outcomes() -> Self {
        let mapping = [0u8, 1]
            .into_iter()
            .map(|c| (c.to_string(), outcome_color(c)))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }

    /// Return the legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping.iter().map(|(v, c)| (v.clone(), *c)).collect()
    }
}
