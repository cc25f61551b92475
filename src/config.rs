// Configuration bundle supplied by the embedding page. Every field has a
// default so JS callers only set what they want to change.

use crate::color::Colour;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapesConfig {
    density: f64,
    avg_duration_secs: f64,
    shape_size: f64,
    colour: Colour,
    reference_unit: f64,
    repulsion_radius: f64,
    damping: f64,
    min_alpha: f64,
}

impl ShapesConfig {
    pub const DEFAULT_DENSITY: f64 = 45.0;
    pub const DEFAULT_AVG_DURATION_SECS: f64 = 15.0;
    pub const DEFAULT_SHAPE_SIZE: f64 = 20.0;
    // Width in pixels that `density` particles are spread over
    pub const REFERENCE_UNIT: f64 = 1000.0;
    pub const REPULSION_RADIUS: f64 = 100.0;
    pub const DAMPING: f64 = 15.0;
    pub const MIN_ALPHA: f64 = 0.15;

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    pub fn total_duration_ms(&self) -> f64 {
        self.avg_duration_secs * 1000.0
    }
}

impl Default for ShapesConfig {
    fn default() -> Self {
        ShapesConfig {
            density: ShapesConfig::DEFAULT_DENSITY,
            avg_duration_secs: ShapesConfig::DEFAULT_AVG_DURATION_SECS,
            shape_size: ShapesConfig::DEFAULT_SHAPE_SIZE,
            colour: Colour::WHITE,
            reference_unit: ShapesConfig::REFERENCE_UNIT,
            repulsion_radius: ShapesConfig::REPULSION_RADIUS,
            damping: ShapesConfig::DAMPING,
            min_alpha: ShapesConfig::MIN_ALPHA,
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[wasm_bindgen]
impl ShapesConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapesConfig {
        ShapesConfig::default()
    }

    #[wasm_bindgen(getter)]
    pub fn density(&self) -> f64 {
        self.density
    }

    // Zero is allowed and yields an empty background
    #[wasm_bindgen(setter)]
    pub fn set_density(&mut self, density: f64) {
        if density.is_finite() && density >= 0.0 {
            self.density = density;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn avg_duration_secs(&self) -> f64 {
        self.avg_duration_secs
    }

    #[wasm_bindgen(setter)]
    pub fn set_avg_duration_secs(&mut self, secs: f64) {
        if positive(secs) {
            self.avg_duration_secs = secs;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn shape_size(&self) -> f64 {
        self.shape_size
    }

    #[wasm_bindgen(setter)]
    pub fn set_shape_size(&mut self, size: f64) {
        if positive(size) {
            self.shape_size = size;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn reference_unit(&self) -> f64 {
        self.reference_unit
    }

    #[wasm_bindgen(setter)]
    pub fn set_reference_unit(&mut self, unit: f64) {
        if positive(unit) {
            self.reference_unit = unit;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn repulsion_radius(&self) -> f64 {
        self.repulsion_radius
    }

    #[wasm_bindgen(setter)]
    pub fn set_repulsion_radius(&mut self, radius: f64) {
        if radius.is_finite() && radius >= 0.0 {
            self.repulsion_radius = radius;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[wasm_bindgen(setter)]
    pub fn set_damping(&mut self, damping: f64) {
        if positive(damping) {
            self.damping = damping;
        }
    }

    #[wasm_bindgen(getter)]
    pub fn min_alpha(&self) -> f64 {
        self.min_alpha
    }

    #[wasm_bindgen(setter)]
    pub fn set_min_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() && alpha >= 0.0 && alpha <= 1.0 {
            self.min_alpha = alpha;
        }
    }

    /// Sets the fill colour from a packed `0xRRGGBBAA` value.
    pub fn set_colour_u32(&mut self, rgba: u32) {
        self.colour = Colour::from_u32(rgba);
    }

    pub fn set_colour_rgba(&mut self, r: u8, g: u8, b: u8, a: f64) {
        self.colour = Colour::new(r, g, b, 1.0).with_alpha(a);
    }

    /// Fill colour as a CSS `rgba(...)` string.
    pub fn colour_css(&self) -> String {
        self.colour.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_landing_page() {
        let config = ShapesConfig::new();
        assert_eq!(config.density(), 45.0);
        assert_eq!(config.avg_duration_secs(), 15.0);
        assert_eq!(config.shape_size(), 20.0);
        assert_eq!(config.colour(), Colour::WHITE);
        assert_eq!(config.reference_unit(), 1000.0);
        assert_eq!(config.repulsion_radius(), 100.0);
        assert_eq!(config.damping(), 15.0);
        assert_eq!(config.min_alpha(), 0.15);
        assert_eq!(config.total_duration_ms(), 15_000.0);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut config = ShapesConfig::new();
        config.set_avg_duration_secs(0.0);
        config.set_shape_size(f64::NAN);
        config.set_density(-3.0);
        config.set_damping(f64::INFINITY);
        config.set_min_alpha(1.5);
        assert_eq!(config, ShapesConfig::default());

        config.set_density(0.0);
        assert_eq!(config.density(), 0.0);
    }

    #[test]
    fn colour_setters() {
        let mut config = ShapesConfig::new();
        config.set_colour_u32(0x7f00_ffff);
        assert_eq!(config.colour_css(), "rgba(127, 0, 255, 1)");
        config.set_colour_rgba(220, 20, 60, 0.85);
        assert_eq!(config.colour_css(), "rgba(220, 20, 60, 0.85)");
        config.set_colour(Colour::new(1, 2, 3, 0.5));
        assert_eq!(config.colour(), Colour::new(1, 2, 3, 0.5));
    }
}
