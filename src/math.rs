//! Pure color-model conversion functions.
//!
//! All functions here are stateless: RGB channels are `f64` in `[0, 255]`,
//! hue is in degrees `[0, 360]`, saturation/lightness/value are in `[0, 1]`.
//! Byte truncation happens only at presentation boundaries through
//! [`round_to_byte`], which is the single rounding rule for the whole crate.

use crate::state::ColorModel;

/// Upper bound of an RGB/alpha channel.
pub const CHANNEL_MAX: f64 = 255.0;
/// Upper bound of the hue circle in degrees.
pub const HUE_MAX: f64 = 360.0;

/// The crate-wide byte rounding rule: round half away from zero, clamped.
///
/// Every place that narrows a channel to a byte (hex strings, display text,
/// byte-typed outputs) must go through this function so that golden values
/// stay consistent.
pub fn round_to_byte(value: f64) -> u8 {
    value.clamp(0.0, CHANNEL_MAX).round() as u8
}

/// Hue in degrees from normalized RGB with precomputed min/max.
///
/// Returns 0.0 when chroma is zero; callers that care about grayscale must
/// special-case that before trusting the result.
pub fn hue_from_minmax(r: f64, g: f64, b: f64, min: f64, max: f64) -> f64 {
    let chroma = max - min;
    if chroma == 0.0 {
        return 0.0;
    }
    let mut hue = if max == r {
        (g - b) / chroma
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    hue *= 60.0;
    if hue < 0.0 {
        hue += HUE_MAX;
    }
    hue
}

/// Hue in degrees from RGB channels in `[0, 255]`.
pub fn hue_from_rgb(r: f64, g: f64, b: f64) -> f64 {
    let (rn, gn, bn) = (r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX);
    let min = rn.min(gn).min(bn);
    let max = rn.max(gn).max(bn);
    hue_from_minmax(rn, gn, bn, min, max)
}

/// HSL lightness from normalized min/max.
pub fn lightness_from_minmax(min: f64, max: f64) -> f64 {
    (max + min) / 2.0
}

/// HSL saturation from normalized min/max.
///
/// Short-circuits to 0.0 at zero chroma, where the textbook formula divides
/// by zero.
pub fn hsl_saturation_from_minmax(min: f64, max: f64) -> f64 {
    let chroma = max - min;
    if chroma == 0.0 {
        return 0.0;
    }
    let lightness = lightness_from_minmax(min, max);
    if lightness <= 0.5 {
        chroma / (max + min)
    } else {
        chroma / (2.0 - max - min)
    }
}

/// HSV value from the normalized maximum channel.
pub fn value_from_minmax(_min: f64, max: f64) -> f64 {
    max
}

/// HSV saturation from normalized min/max; 0.0 when the color is black.
pub fn hsv_saturation_from_minmax(min: f64, max: f64) -> f64 {
    if max == 0.0 {
        0.0
    } else {
        1.0 - min / max
    }
}

/// Convert HSL to RGB channels in `[0, 255]`.
///
/// Sector boundaries are overlap-inclusive so exact multiples of 60 degrees
/// never fall through a gap.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r1, g1, b1) = if (0.0..=1.0).contains(&sector) {
        (chroma, x, 0.0)
    } else if sector <= 2.0 {
        (x, chroma, 0.0)
    } else if sector <= 3.0 {
        (0.0, chroma, x)
    } else if sector <= 4.0 {
        (0.0, x, chroma)
    } else if sector <= 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    (
        (r1 + m) * CHANNEL_MAX,
        (g1 + m) * CHANNEL_MAX,
        (b1 + m) * CHANNEL_MAX,
    )
}

/// Convert RGB channels in `[0, 255]` to HSL.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (rn, gn, bn) = (r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX);
    let min = rn.min(gn).min(bn);
    let max = rn.max(gn).max(bn);
    (
        hue_from_minmax(rn, gn, bn, min, max),
        hsl_saturation_from_minmax(min, max),
        lightness_from_minmax(min, max),
    )
}

/// Convert HSV to RGB channels in `[0, 255]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let sector = h / 60.0;
    let hi = (sector.floor() as i64).rem_euclid(6);
    let f = sector - sector.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r1, g1, b1) = match hi {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (r1 * CHANNEL_MAX, g1 * CHANNEL_MAX, b1 * CHANNEL_MAX)
}

/// Convert RGB channels in `[0, 255]` to HSV.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (rn, gn, bn) = (r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX);
    let min = rn.min(gn).min(bn);
    let max = rn.max(gn).max(bn);
    (
        hue_from_minmax(rn, gn, bn, min, max),
        hsv_saturation_from_minmax(min, max),
        value_from_minmax(min, max),
    )
}

/// Convert an (h, s, level) triple to RGB under the given model.
///
/// `level` is lightness under HSL and value under HSV.
pub fn model_to_rgb(model: ColorModel, h: f64, s: f64, level: f64) -> (f64, f64, f64) {
    match model {
        ColorModel::Hsl => hsl_to_rgb(h, s, level),
        ColorModel::Hsv => hsv_to_rgb(h, s, level),
    }
}

/// Convert RGB to an (h, s, level) triple under the given model.
pub fn rgb_to_model(model: ColorModel, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    match model {
        ColorModel::Hsl => rgb_to_hsl(r, g, b),
        ColorModel::Hsv => rgb_to_hsv(r, g, b),
    }
}

/// Model-dispatched saturation from normalized min/max.
pub fn saturation_from_minmax(model: ColorModel, min: f64, max: f64) -> f64 {
    match model {
        ColorModel::Hsl => hsl_saturation_from_minmax(min, max),
        ColorModel::Hsv => hsv_saturation_from_minmax(min, max),
    }
}

/// Model-dispatched level (lightness or value) from normalized min/max.
pub fn level_from_minmax(model: ColorModel, min: f64, max: f64) -> f64 {
    match model {
        ColorModel::Hsl => lightness_from_minmax(min, max),
        ColorModel::Hsv => value_from_minmax(min, max),
    }
}
