// Simple colour struct used as the fill style of every shape.
// Channels are bytes, alpha is a fraction so it can be faded per frame.

use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Colour {
        Colour { r, g, b, a }
    }

    // Created from an unsigned 32 representing RRGGBBAA
    pub fn from_u32(num: u32) -> Colour {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Colour {
            r,
            g,
            b,
            a: a as f64 / 255.0,
        }
    }

    /// Same channels, alpha replaced and clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Colour {
        let a = if alpha.is_finite() {
            alpha.max(0.0).min(1.0)
        } else {
            0.0
        };
        Colour { a, ..self }
    }

    /// Canonical canvas fill style, e.g. `rgba(127, 0, 255, 0.85)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl Default for Colour {
    fn default() -> Self {
        Colour::WHITE
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_matches_canvas_syntax() {
        assert_eq!(Colour::new(127, 0, 255, 0.85).to_css(), "rgba(127, 0, 255, 0.85)");
        assert_eq!(Colour::WHITE.to_css(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn from_u32_unpacks_rrggbbaa() {
        let c = Colour::from_u32(0xdc14_3cff);
        assert_eq!((c.r, c.g, c.b), (220, 20, 60));
        assert_eq!(c.a, 1.0);
        assert_eq!(Colour::from_u32(0x0000_0000).a, 0.0);
    }

    #[test]
    fn with_alpha_clamps_and_keeps_channels() {
        let base = Colour::new(1, 2, 3, 0.5);
        assert_eq!(base.with_alpha(2.0), Colour::new(1, 2, 3, 1.0));
        assert_eq!(base.with_alpha(-0.3).a, 0.0);
        assert_eq!(base.with_alpha(f64::NAN).a, 0.0);
        assert_eq!(base.with_alpha(0.25).a, 0.25);
    }
}
