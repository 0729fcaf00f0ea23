use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Lift → colour gradient for scatter markers
// ---------------------------------------------------------------------------

/// Map a normalized position `t ∈ [0, 1]` onto a cold-to-warm hue ramp
/// (blue for the weakest lift, red for the strongest).
pub fn gradient_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hue = 220.0 * (1.0 - t);
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Maps lift values of the current filtered set to gradient colours.
#[derive(Debug, Clone, Copy)]
pub struct LiftColorMap {
    min: f64,
    max: f64,
}

impl LiftColorMap {
    /// Build a map over the lift range of the given values.
    pub fn new(lift_values: &[f64]) -> Self {
        let min = lift_values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = lift_values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        LiftColorMap { min, max }
    }

    /// Normalize a lift value into `[0, 1]` over the observed range.
    /// A degenerate range (all values equal) maps everything to the middle.
    pub fn normalized(&self, lift: f64) -> f32 {
        let range = self.max - self.min;
        if !range.is_finite() || range <= f64::EPSILON {
            0.5
        } else {
            ((lift - self.min) / range) as f32
        }
    }

    pub fn color_for(&self, lift: f64) -> Color32 {
        gradient_color(self.normalized(lift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_are_cold_and_warm() {
        let cold = gradient_color(0.0);
        let warm = gradient_color(1.0);
        assert!(cold.b() > cold.r());
        assert!(warm.r() > warm.b());
    }

    #[test]
    fn degenerate_range_maps_to_midpoint() {
        let map = LiftColorMap::new(&[1.5, 1.5]);
        assert_eq!(map.normalized(1.5), 0.5);
    }

    #[test]
    fn normalization_spans_the_observed_range() {
        let map = LiftColorMap::new(&[1.0, 3.0]);
        assert_eq!(map.normalized(1.0), 0.0);
        assert_eq!(map.normalized(3.0), 1.0);
        assert_eq!(map.normalized(2.0), 0.5);
    }
}
