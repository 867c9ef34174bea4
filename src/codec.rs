//! String parsing, formatting and validation for the editable fields.
//!
//! Each editable field has its own validation rule; a failed parse never
//! touches the underlying value, it only flags the field so the next
//! successful edit can restore its display text.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;
use crate::math;
use crate::state::Channel;

/// Optional `#`, then exactly 6 (opaque RGB) or 8 (ARGB, alpha first) hex
/// digits. Shorthand 3-digit form is deliberately rejected.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").expect("hex pattern is valid")
});

/// Integer hue in `[0, 360]`, enumerated by range so that "360" is valid
/// while "361" and any fractional form are not.
static HUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(360|3[0-5][0-9]|[12][0-9]{2}|[1-9]?[0-9])$").expect("hue pattern is valid")
});

/// A text edit that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Hex string is not `#`-optional 6 or 8 hex digits
    #[error("invalid hex color string: {0:?}")]
    InvalidHex(String),

    /// Text does not parse as a real number
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Number parsed but falls outside the field's range
    #[error("value {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    /// Hue text is not an integer in [0, 360]
    #[error("invalid hue string: {0:?}")]
    InvalidHue(String),
}

/// Parse a hex color string into a [`Color`].
///
/// 6 digits are opaque RGB; 8 digits are ARGB with alpha first.
pub fn parse_hex(text: &str) -> Result<Color, FieldError> {
    let trimmed = text.trim();
    let captures = HEX_RE
        .captures(trimmed)
        .ok_or_else(|| FieldError::InvalidHex(text.to_string()))?;
    let digits = &captures[1];

    let byte_at = |index: usize| -> Result<u8, FieldError> {
        u8::from_str_radix(&digits[index..index + 2], 16)
            .map_err(|_| FieldError::InvalidHex(text.to_string()))
    };

    if digits.len() == 8 {
        Ok(Color::from_argb_bytes(
            byte_at(0)?,
            byte_at(2)?,
            byte_at(4)?,
            byte_at(6)?,
        ))
    } else {
        Ok(Color::from_rgb_bytes(byte_at(0)?, byte_at(2)?, byte_at(4)?))
    }
}

/// Format a color as `#AARRGGBB` uppercase.
pub fn format_hex(color: &Color) -> String {
    let [a, r, g, b] = color.to_bytes();
    format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
}

/// Display text for a byte-valued channel.
pub fn format_byte_text(value: f64) -> String {
    math::round_to_byte(value).to_string()
}

/// Display text for the hue field (integer degrees).
pub fn format_hue_text(value: f64) -> String {
    (value.round() as i64).to_string()
}

/// Display text for a unit-interval field (saturation, lightness, value).
pub fn format_unit_text(value: f64) -> String {
    format!("{value:.3}")
}

/// Validate a byte-field edit: any real number in `[0, 255]`.
///
/// Fractional input is valid; it is narrowed to a byte only at display.
pub fn validate_byte_text(text: &str) -> Result<f64, FieldError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(text.to_string()))?;
    if !value.is_finite() || !(0.0..=math::CHANNEL_MAX).contains(&value) {
        return Err(FieldError::OutOfRange {
            value,
            min: 0.0,
            max: math::CHANNEL_MAX,
        });
    }
    Ok(value)
}

/// Validate a hue-field edit: an integer in `[0, 360]`.
pub fn validate_hue_text(text: &str) -> Result<f64, FieldError> {
    let trimmed = text.trim();
    if !HUE_RE.is_match(trimmed) {
        return Err(FieldError::InvalidHue(text.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| FieldError::InvalidHue(text.to_string()))
}

/// Validate a unit-interval edit: a real number in `[0.0, 1.0]`.
pub fn validate_unit_text(text: &str) -> Result<f64, FieldError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| FieldError::NotANumber(text.to_string()))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(FieldError::OutOfRange {
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(value)
}

/// Dispatch to the validator for a channel's text representation.
pub fn validate_channel_text(channel: Channel, text: &str) -> Result<f64, FieldError> {
    match channel {
        Channel::Hue => validate_hue_text(text),
        Channel::Saturation | Channel::Lightness | Channel::Value => validate_unit_text(text),
        Channel::Alpha | Channel::Red | Channel::Green | Channel::Blue => validate_byte_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_six_and_eight_digits() {
        assert_eq!(
            parse_hex("FF0000").map(|c| c.to_bytes()),
            Ok([255, 255, 0, 0])
        );
        assert_eq!(
            parse_hex("#FF0000").map(|c| c.to_bytes()),
            Ok([255, 255, 0, 0])
        );
        // 8-digit form is ARGB, alpha first.
        assert_eq!(
            parse_hex("#80FF8000").map(|c| c.to_bytes()),
            Ok([128, 255, 128, 0])
        );
    }

    #[test]
    fn hex_rejects_shorthand_and_garbage() {
        assert!(parse_hex("F00").is_err());
        assert!(parse_hex("#F00").is_err());
        assert!(parse_hex("#FF00001").is_err());
        assert!(parse_hex("GG0000").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn hex_formats_argb_uppercase() {
        let color = Color::from_argb_bytes(128, 255, 128, 0);
        assert_eq!(format_hex(&color), "#80FF8000");
        assert_eq!(format_hex(&Color::from_rgb_bytes(1, 2, 3)), "#FF010203");
    }

    #[test]
    fn hue_validator_boundaries() {
        assert_eq!(validate_hue_text("0"), Ok(0.0));
        assert_eq!(validate_hue_text("360"), Ok(360.0));
        assert_eq!(validate_hue_text("200"), Ok(200.0));
        assert!(validate_hue_text("361").is_err());
        assert!(validate_hue_text("360.1").is_err());
        assert!(validate_hue_text("-1").is_err());
        assert!(validate_hue_text("12.5").is_err());
        assert!(validate_hue_text("abc").is_err());
    }

    #[test]
    fn unit_validator_boundaries() {
        assert_eq!(validate_unit_text("1.0"), Ok(1.0));
        assert_eq!(validate_unit_text("0"), Ok(0.0));
        assert_eq!(validate_unit_text("0.25"), Ok(0.25));
        assert!(validate_unit_text("1.01").is_err());
        assert!(validate_unit_text("-0.1").is_err());
        assert!(validate_unit_text("NaN").is_err());
    }

    #[test]
    fn byte_validator_accepts_fractional() {
        assert_eq!(validate_byte_text("255"), Ok(255.0));
        assert_eq!(validate_byte_text("127.5"), Ok(127.5));
        assert!(validate_byte_text("256").is_err());
        assert!(validate_byte_text("-1").is_err());
        assert!(validate_byte_text("inf").is_err());
    }

    #[test]
    fn channel_dispatch_uses_field_rules() {
        assert!(validate_channel_text(Channel::Hue, "12.5").is_err());
        assert_eq!(validate_channel_text(Channel::Red, "12.5"), Ok(12.5));
        assert_eq!(validate_channel_text(Channel::Lightness, "0.5"), Ok(0.5));
        assert!(validate_channel_text(Channel::Saturation, "2").is_err());
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format_byte_text(127.5), "128");
        assert_eq!(format_hue_text(199.7), "200");
        assert_eq!(format_unit_text(0.5), "0.500");
    }
}
