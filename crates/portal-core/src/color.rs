//! RGB color math for the effect palette.

use ratatui::style::Color;

/// An 8-bit RGB color with float scaling, used for depth fading and glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const MATRIX_GREEN: Rgb = Rgb::new(0, 200, 0);
/// Bright white-green used for a stream head.
pub const MATRIX_HEAD: Rgb = Rgb::new(200, 255, 200);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by an alpha in [0, 1] (clamped).
    pub fn scaled(self, alpha: f32) -> Rgb {
        let a = alpha.clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f32 * a) as u8,
            g: (self.g as f32 * a) as u8,
            b: (self.b as f32 * a) as u8,
        }
    }

    /// Channel-wise interpolation toward `other`, `factor` in [0, 1].
    pub fn lerp(self, other: Rgb, factor: f32) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f32 + (other.r as f32 - self.r as f32) * f) as u8,
            g: (self.g as f32 + (other.g as f32 - self.g as f32) * f) as u8,
            b: (self.b as f32 + (other.b as f32 - self.b as f32) * f) as u8,
        }
    }

    pub fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_clamps_alpha() {
        assert_eq!(CYAN.scaled(1.0), CYAN);
        assert_eq!(CYAN.scaled(2.0), CYAN);
        assert_eq!(CYAN.scaled(-1.0), Rgb::new(0, 0, 0));
        assert_eq!(CYAN.scaled(0.5), Rgb::new(0, 127, 127));
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(CYAN.lerp(MAGENTA, 0.0), CYAN);
        assert_eq!(CYAN.lerp(MAGENTA, 1.0), MAGENTA);
    }
}
