//! The canonical color record.

use crate::math;

/// The single authoritative ARGB value from which every other representation
/// is derived.
///
/// Channels are stored as `f64` in `[0, 255]`. The bounds are enforced at the
/// edit boundary (validators, clamped slider entry points), not at the type
/// level, so intermediate fractional values survive a round trip through the
/// conversion math without precision loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Alpha channel in `[0, 255]`.
    pub a: f64,
    /// Red channel in `[0, 255]`.
    pub r: f64,
    /// Green channel in `[0, 255]`.
    pub g: f64,
    /// Blue channel in `[0, 255]`.
    pub b: f64,
}

impl Color {
    /// Create a color from ARGB doubles.
    pub fn new(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color from RGB bytes.
    pub fn from_rgb_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb_bytes(255, r, g, b)
    }

    /// Create a color from ARGB bytes.
    pub fn from_argb_bytes(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            a: a as f64,
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Narrow to ARGB bytes using the crate rounding rule.
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            math::round_to_byte(self.a),
            math::round_to_byte(self.r),
            math::round_to_byte(self.g),
            math::round_to_byte(self.b),
        ]
    }

    /// RGB channels normalized to `[0, 1]`.
    pub fn normalized_rgb(&self) -> (f64, f64, f64) {
        (
            self.r / math::CHANNEL_MAX,
            self.g / math::CHANNEL_MAX,
            self.b / math::CHANNEL_MAX,
        )
    }

    /// Whether two colors agree at byte resolution.
    pub fn same_bytes(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Default for Color {
    /// Opaque mid-gray, the conventional starting color for the picker.
    fn default() -> Self {
        Self::from_rgb_bytes(128, 128, 128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_narrowing_rounds_half_up() {
        let color = Color::new(255.0, 127.5, 127.49, 0.2);
        assert_eq!(color.to_bytes(), [255, 128, 127, 0]);
    }

    #[test]
    fn fractional_channels_survive() {
        let color = Color::new(255.0, 10.25, 0.0, 0.0);
        assert_eq!(color.r, 10.25);
        assert_eq!(color.to_bytes()[1], 10);
    }

    #[test]
    fn default_is_opaque_gray() {
        assert_eq!(Color::default().to_bytes(), [255, 128, 128, 128]);
    }
}
