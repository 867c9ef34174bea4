//! Derived read-only colors for rendering collaborators.
//!
//! Slider tracks and the hue ring read these instead of recomputing
//! conversions per frame. Everything here is a pure function of current
//! state, recomputed on every commit.

use crate::color::Color;
use crate::math;
use crate::state::ColorModel;

/// Gradient endpoint colors for one slider track: the channel at its minimum
/// and at its maximum, all other channels held at their current values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSweep {
    /// Color at the channel's minimum.
    pub start: Color,
    /// Color at the channel's maximum.
    pub end: Color,
}

/// The full set of derived visual colors.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeVisuals {
    /// Alpha sweep over the current RGB.
    pub alpha: ChannelSweep,
    /// Red sweep holding G and B fixed.
    pub red: ChannelSweep,
    /// Green sweep holding R and B fixed.
    pub green: ChannelSweep,
    /// Blue sweep holding R and G fixed.
    pub blue: ChannelSweep,
    /// Saturation sweep at the current hue and level.
    pub saturation: ChannelSweep,
    /// Level (lightness or value) sweep at the current hue and saturation.
    pub level: ChannelSweep,
    /// Sample colors at 0/60/120/180/240/300 degrees, full saturation.
    pub hue_sectors: [Color; 6],
    /// The current hue at full saturation.
    pub pure_hue: Color,
}

impl RangeVisuals {
    /// Recompute every derived color from the given state.
    pub fn compute(
        model: ColorModel,
        color: &Color,
        hue: f64,
        saturation: f64,
        level: f64,
    ) -> Self {
        let sweep = |start: Color, end: Color| ChannelSweep { start, end };

        // Level midpoint that renders a hue at full intensity: mid lightness
        // under HSL, full value under HSV.
        let pure_level = match model {
            ColorModel::Hsl => 0.5,
            ColorModel::Hsv => 1.0,
        };

        let model_color = |h: f64, s: f64, lvl: f64| -> Color {
            let (r, g, b) = math::model_to_rgb(model, h, s, lvl);
            Color::new(math::CHANNEL_MAX, r, g, b)
        };

        let mut hue_sectors = [Color::default(); 6];
        for (index, sample) in hue_sectors.iter_mut().enumerate() {
            *sample = model_color(index as f64 * 60.0, 1.0, pure_level);
        }

        Self {
            alpha: sweep(
                Color::new(0.0, color.r, color.g, color.b),
                Color::new(math::CHANNEL_MAX, color.r, color.g, color.b),
            ),
            red: sweep(
                Color::new(color.a, 0.0, color.g, color.b),
                Color::new(color.a, math::CHANNEL_MAX, color.g, color.b),
            ),
            green: sweep(
                Color::new(color.a, color.r, 0.0, color.b),
                Color::new(color.a, color.r, math::CHANNEL_MAX, color.b),
            ),
            blue: sweep(
                Color::new(color.a, color.r, color.g, 0.0),
                Color::new(color.a, color.r, color.g, math::CHANNEL_MAX),
            ),
            saturation: sweep(model_color(hue, 0.0, level), model_color(hue, 1.0, level)),
            level: sweep(
                model_color(hue, saturation, 0.0),
                model_color(hue, saturation, 1.0),
            ),
            hue_sectors,
            pure_hue: model_color(hue, 1.0, pure_level),
        }
    }
}
