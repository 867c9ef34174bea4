//! chromapick - color-model conversion and state-synchronization core
//!
//! An embeddable color-picker engine: one authoritative ARGB color kept
//! consistent across hex, HSL/HSV and per-field text representations, with
//! re-entrancy-guarded edit propagation and derived gradient colors for
//! rendering collaborators.

mod codec;
mod color;
mod engine;
mod math;
mod notify;
mod palette;
mod state;
mod visuals;

pub use codec::{
    format_byte_text, format_hex, format_hue_text, format_unit_text, parse_hex,
    validate_byte_text, validate_channel_text, validate_hue_text, validate_unit_text, FieldError,
};
pub use color::Color;
pub use engine::PickerEngine;
pub use math::{
    hsl_to_rgb, hsv_to_rgb, hue_from_rgb, model_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_model,
    round_to_byte,
};
pub use notify::Listener;
pub use palette::{ColorRecord, Palette, PaletteError};
pub use state::{
    Channel, ColorModel, EditOrigin, FieldSet, FieldText, GestureState, GestureSurface, SyncState,
};
pub use visuals::{ChannelSweep, RangeVisuals};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::engine::PickerEngine;
    pub use crate::state::{Channel, ColorModel, GestureSurface};
    pub use crate::visuals::RangeVisuals;
}
