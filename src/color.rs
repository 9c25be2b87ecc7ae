use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

/// Fallback for categories the map was not built with.
pub const DEFAULT_COLOR: &str = "#9ca3af";

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, as
/// `#rrggbb` strings ready for SVG attributes.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

/// Fixed colours for the two launch outcomes.
pub fn outcome_color(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Success => "#059669",
        Outcome::Failure => "#dc2626",
    }
}

// ---------------------------------------------------------------------------
// Color mapping: category label → colour
// ---------------------------------------------------------------------------

/// Maps the labels of a categorical column to distinct colours.
///
/// Built from the full dataset's label list so a category keeps its colour
/// however the view is filtered.
#[derive(Debug, Clone)]
pub struct ColorMap {
    order: Vec<String>,
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let palette = generate_palette(labels.len());
        let order: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        let mapping = order.iter().cloned().zip(palette).collect();
        ColorMap { order, mapping }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> &str {
        self.mapping
            .get(label)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Legend entries (label → colour) in the order the map was built with.
    pub fn legend_entries(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .map(|l| (l.clone(), self.color_for(l).to_string()))
            .collect()
    }
}
