//! Display color carried by bodies for the rendering shell.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Creates a color, clamping every channel into `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_clamps_channels() {
        let c = Color::new(1.5, -0.2, 0.5, 2.0);
        assert_eq!(c, Color { r: 1.0, g: 0.0, b: 0.5, a: 1.0 });
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(Color::default().a, 1.0);
    }
}
