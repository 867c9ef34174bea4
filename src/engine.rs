//! The color state-synchronization engine.
//!
//! [`PickerEngine`] owns the canonical ARGB color and keeps every other
//! representation (hex string, H/S/level triple, display-text mirrors,
//! gradient endpoints) consistent with it. Edits enter through one generic
//! channel dispatch and fan out through a single propagation cascade guarded
//! against re-entrance.

use crate::codec::{self, FieldError};
use crate::color::Color;
use crate::math;
use crate::notify::Listener;
use crate::palette::{Palette, PaletteError};
use crate::state::{
    Channel, ColorModel, EditOrigin, FieldSet, GestureState, GestureSurface, SyncState,
};
use crate::visuals::RangeVisuals;

/// Tolerance for deciding whether an H/S/level edit actually moved the RGB
/// point. Setting hue at zero saturation, for example, changes no RGB and
/// must not cascade.
const RGB_EPSILON: f64 = 1e-6;

/// The embeddable color-picker core.
///
/// Single-threaded and callback-driven: every operation runs to completion
/// on the caller's thread, and the [`SyncState`] guard only protects against
/// synchronous re-entrant calls.
pub struct PickerEngine {
    color: Color,
    hue: f64,
    saturation: f64,
    level: f64,
    model: ColorModel,
    active: Channel,
    sync: SyncState,
    gesture: GestureState,
    fields: FieldSet,
    visuals: RangeVisuals,
    palette: Palette,
    on_changed: Listener<Color>,
    on_selected: Listener<Color>,
    on_custom_saved: Listener<Color>,
}

impl PickerEngine {
    /// Create an engine at the default opaque mid-gray, HSL model.
    pub fn new() -> Self {
        Self::with_color(Color::default())
    }

    /// Create an engine seeded with a specific color.
    pub fn with_color(color: Color) -> Self {
        let model = ColorModel::default();
        let (hue, saturation, level) = math::rgb_to_model(model, color.r, color.g, color.b);
        let visuals = RangeVisuals::compute(model, &color, hue, saturation, level);
        let mut engine = Self {
            color,
            hue,
            saturation,
            level,
            model,
            active: Channel::Hue,
            sync: SyncState::default(),
            gesture: GestureState::default(),
            fields: FieldSet::default(),
            visuals,
            palette: Palette::new(),
            on_changed: Listener::none(),
            on_selected: Listener::none(),
            on_custom_saved: Listener::none(),
        };
        engine.refresh_mirrors();
        engine
    }

    /// Register the handler fired after every completed commit.
    pub fn on_current_color_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(Color) + 'static,
    {
        self.on_changed = Listener::new(f);
        self
    }

    /// Register the handler fired when the user confirms a choice.
    pub fn on_color_selected<F>(mut self, f: F) -> Self
    where
        F: Fn(Color) + 'static,
    {
        self.on_selected = Listener::new(f);
        self
    }

    /// Register the handler fired when a custom color is saved.
    pub fn on_custom_color_saved<F>(mut self, f: F) -> Self
    where
        F: Fn(Color) + 'static,
    {
        self.on_custom_saved = Listener::new(f);
        self
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// The canonical color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Current hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Current saturation in `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Current third component (lightness or value) in `[0, 1]`.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// The active color model.
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// The component the interactive surfaces currently edit.
    pub fn active_component(&self) -> Channel {
        self.active
    }

    /// The hex display text (`#AARRGGBB`).
    pub fn hex_text(&self) -> &str {
        self.fields.hex.text()
    }

    /// All display-text mirrors.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// The derived gradient endpoints and hue samples.
    pub fn visuals(&self) -> &RangeVisuals {
        &self.visuals
    }

    /// The saved custom colors.
    pub fn custom_colors(&self) -> &[Color] {
        self.palette.colors()
    }

    /// Current gesture arbitration state.
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// The stored value of one channel.
    pub fn channel_value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness | Channel::Value => self.level,
            Channel::Alpha => self.color.a,
            Channel::Red => self.color.r,
            Channel::Green => self.color.g,
            Channel::Blue => self.color.b,
        }
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Set one channel to a new value.
    ///
    /// Public setters trust the caller and do not clamp; slider-bound input
    /// should go through [`set_channel_clamped`](Self::set_channel_clamped).
    /// ARGB edits cascade when the value differs from the canonical channel.
    /// H/S/level edits are stored, then cascade only when the RGB the full
    /// current triple implies under the active model actually differs.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        if self.sync.is_propagating() {
            // A cascade is applying derived fields; record without re-entering.
            self.store_channel(channel, value);
            return;
        }

        if channel.is_argb() {
            let current = self.channel_value(channel);
            self.fields
                .channel_mut(channel)
                .refresh(codec::format_byte_text(value));
            if value == current {
                return;
            }
            self.store_channel(channel, value);
            self.process_color_change(EditOrigin::Channel(channel));
        } else {
            self.store_channel(channel, value);
            let text = match channel {
                Channel::Hue => codec::format_hue_text(value),
                _ => codec::format_unit_text(value),
            };
            self.fields.channel_mut(channel).refresh(text);

            let (r, g, b) = math::model_to_rgb(self.model, self.hue, self.saturation, self.level);
            let moved = (r - self.color.r).abs() > RGB_EPSILON
                || (g - self.color.g).abs() > RGB_EPSILON
                || (b - self.color.b).abs() > RGB_EPSILON;
            if moved {
                self.color.r = r;
                self.color.g = g;
                self.color.b = b;
                self.process_color_change(EditOrigin::Channel(channel));
            }
        }
    }

    /// Slider entry point: clamp to the channel bounds, then set.
    pub fn set_channel_clamped(&mut self, channel: Channel, value: f64) {
        let (min, max) = channel.bounds();
        self.set_channel(channel, value.clamp(min, max));
    }

    /// Apply a validated text edit to a channel field.
    ///
    /// Invalid input flags the field and leaves the underlying value
    /// untouched; the next completed cascade restores the display text.
    pub fn set_field_text(&mut self, channel: Channel, text: &str) -> Result<(), FieldError> {
        match codec::validate_channel_text(channel, text) {
            Ok(value) => {
                self.set_channel(channel, value);
                Ok(())
            }
            Err(err) => {
                self.fields.channel_mut(channel).reject(text.to_string());
                log::debug!("rejected {} field text {:?}: {}", channel.label(), text, err);
                Err(err)
            }
        }
    }

    /// Apply a hex text edit.
    ///
    /// Accepts 6-digit opaque RGB or 8-digit ARGB (alpha first), with an
    /// optional leading `#`.
    pub fn set_hex_text(&mut self, text: &str) -> Result<(), FieldError> {
        if self.sync.is_propagating() {
            return Ok(());
        }
        match codec::parse_hex(text) {
            Ok(parsed) => {
                if !parsed.same_bytes(&self.color) {
                    self.color = parsed;
                    self.process_color_change(EditOrigin::Hex);
                } else {
                    self.fields.hex.refresh(codec::format_hex(&parsed));
                }
                Ok(())
            }
            Err(err) => {
                self.fields.hex.reject(text.to_string());
                log::debug!("rejected hex text {:?}: {}", text, err);
                Err(err)
            }
        }
    }

    /// Switch between HSL and HSV semantics.
    ///
    /// R/G/B are untouched (the visible color is preserved); H/S/level are
    /// re-derived with the new model's formulas, so they routinely change.
    /// The stored hue is retained at zero chroma, where the re-derived hue
    /// would be meaningless.
    pub fn set_model(&mut self, model: ColorModel) {
        if model == self.model {
            return;
        }
        log::debug!("switching color model to {}", model.name());
        self.model = model;

        let (rn, gn, bn) = self.color.normalized_rgb();
        let min = rn.min(gn).min(bn);
        let max = rn.max(gn).max(bn);
        if max > min {
            self.hue = math::hue_from_minmax(rn, gn, bn, min, max);
        }
        self.saturation = math::saturation_from_minmax(model, min, max);
        self.level = math::level_from_minmax(model, min, max);

        self.refresh_mirrors();
        self.visuals =
            RangeVisuals::compute(self.model, &self.color, self.hue, self.saturation, self.level);
        self.on_changed.emit(self.color);
    }

    /// Select which component the 2D-area and slider surfaces edit.
    pub fn set_active_component(&mut self, channel: Channel) {
        self.active = channel;
    }

    /// Try to start a pointer gesture on an input surface.
    ///
    /// Returns `false` when another surface already drives the color.
    pub fn begin_gesture(&mut self, surface: GestureSurface) -> bool {
        let started = self.gesture.try_start(surface);
        if started {
            log::debug!("gesture started on {:?}", surface);
        }
        started
    }

    /// End the gesture owned by the given surface.
    pub fn end_gesture(&mut self, surface: GestureSurface) {
        if self.gesture.surface() == Some(surface) {
            log::debug!("gesture ended on {:?}", surface);
        }
        self.gesture.stop(surface);
    }

    /// Confirm the current color as the user's choice.
    pub fn select_current(&self) {
        self.on_selected.emit(self.color);
    }

    /// Save the current color to the custom palette.
    pub fn save_custom_color(&mut self) {
        self.palette.push(self.color);
        self.on_custom_saved.emit(self.color);
    }

    /// Replace the custom palette from its JSON exchange form.
    ///
    /// Malformed input is logged and ignored; no color change is applied.
    pub fn load_custom_colors_json(&mut self, json: &str) {
        match Palette::from_json(json) {
            Ok(palette) => self.palette = palette,
            Err(err) => log::warn!("ignoring unreadable custom colors: {}", err),
        }
    }

    /// Export the custom palette to its JSON exchange form.
    pub fn export_custom_colors_json(&self) -> Result<String, PaletteError> {
        self.palette.to_json()
    }

    // =========================================================================
    // Propagation
    // =========================================================================

    /// Record a channel value without propagating.
    fn store_channel(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Hue => self.hue = value,
            Channel::Saturation => self.saturation = value,
            Channel::Lightness | Channel::Value => self.level = value,
            Channel::Alpha => self.color.a = value,
            Channel::Red => self.color.r = value,
            Channel::Green => self.color.g = value,
            Channel::Blue => self.color.b = value,
        }
    }

    /// The edit-propagation cascade.
    ///
    /// Recomputes every derived representation from the canonical color,
    /// applying the boundary-preservation rules for hue and saturation, then
    /// fires exactly one change notification.
    fn process_color_change(&mut self, origin: EditOrigin) {
        if self.sync.is_propagating() {
            return;
        }
        self.sync.begin();
        log::debug!("color change cascade, origin {:?}", origin);

        let snapshot = self.color;
        self.fields.hex.refresh(codec::format_hex(&snapshot));
        self.fields
            .alpha
            .refresh(codec::format_byte_text(snapshot.a));
        self.fields.red.refresh(codec::format_byte_text(snapshot.r));
        self.fields
            .green
            .refresh(codec::format_byte_text(snapshot.g));
        self.fields
            .blue
            .refresh(codec::format_byte_text(snapshot.b));

        let (rn, gn, bn) = snapshot.normalized_rgb();
        let min = rn.min(gn).min(bn);
        let max = rn.max(gn).max(bn);
        let computed_hue = math::hue_from_minmax(rn, gn, bn, min, max);
        let computed_sat = math::saturation_from_minmax(self.model, min, max);
        let computed_level = math::level_from_minmax(self.model, min, max);

        // Boundary-preserving hue policy. At degenerate points (white, black,
        // gray) the recomputed hue collapses to 0; keeping the previous hue
        // lets a drag back from the extreme return to where it started. The
        // three conditions are deliberate UX behavior, not derivable from the
        // conversion math; do not simplify them.
        if !origin.is_channel(Channel::Hue) {
            let strictly_inside = computed_level > 0.0
                && computed_level < 1.0
                && computed_sat > 0.0
                && computed_sat < 1.0;
            let leaving_black = self.hue == 0.0 && computed_level > 0.0;
            let all_at_min = self.hue == 0.0 && computed_sat == 0.0 && computed_level == 0.0;
            if strictly_inside || leaving_black || all_at_min {
                self.hue = computed_hue;
            }
        }

        // Saturation keeps its stored value when a saturation or level edit
        // collapses chroma and the recomputed value lands on a degenerate
        // boundary, so pinning level to an extreme does not stomp the
        // saturation the user set; level is always applied unless it
        // originated the edit.
        let sat_at_boundary = computed_sat <= 0.0 || computed_sat >= 1.0;
        let sat_suppressible = origin.is_channel(Channel::Saturation) || origin.is_level();
        if !(sat_suppressible && sat_at_boundary) {
            self.saturation = computed_sat;
        }
        if !origin.is_level() {
            self.level = computed_level;
        }

        // Rewriting the mirrors from canonical state doubles as the recovery
        // path for fields left in a validation-error state.
        self.fields
            .hue
            .refresh(codec::format_hue_text(self.hue));
        self.fields
            .saturation
            .refresh(codec::format_unit_text(self.saturation));
        self.fields
            .level
            .refresh(codec::format_unit_text(self.level));

        self.visuals =
            RangeVisuals::compute(self.model, &self.color, self.hue, self.saturation, self.level);
        self.sync.finish();
        self.on_changed.emit(self.color);
    }

    /// Rewrite every display-text mirror from canonical state.
    fn refresh_mirrors(&mut self) {
        self.fields.hex.refresh(codec::format_hex(&self.color));
        self.fields
            .alpha
            .refresh(codec::format_byte_text(self.color.a));
        self.fields
            .red
            .refresh(codec::format_byte_text(self.color.r));
        self.fields
            .green
            .refresh(codec::format_byte_text(self.color.g));
        self.fields
            .blue
            .refresh(codec::format_byte_text(self.color.b));
        self.fields.hue.refresh(codec::format_hue_text(self.hue));
        self.fields
            .saturation
            .refresh(codec::format_unit_text(self.saturation));
        self.fields
            .level
            .refresh(codec::format_unit_text(self.level));
    }
}

impl Default for PickerEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn engine_with_change_counter() -> (PickerEngine, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let engine =
            PickerEngine::new().on_current_color_changed(move |_| seen.set(seen.get() + 1));
        (engine, count)
    }

    #[test]
    fn hsl_red_scenario() {
        let mut engine = PickerEngine::new();
        engine.set_channel(Channel::Hue, 0.0);
        engine.set_channel(Channel::Saturation, 1.0);
        engine.set_channel(Channel::Lightness, 0.5);
        assert_eq!(engine.color().to_bytes(), [255, 255, 0, 0]);
        assert_eq!(engine.hex_text(), "#FFFF0000");
    }

    #[test]
    fn hex_scenario_argb_order() {
        let mut engine = PickerEngine::new();
        engine.set_hex_text("#80FF8000").expect("valid hex");
        assert_eq!(engine.color().to_bytes(), [128, 255, 128, 0]);
        assert_eq!(engine.fields().alpha.text(), "128");
        assert_eq!(engine.fields().red.text(), "255");
        assert_eq!(engine.fields().green.text(), "128");
        assert_eq!(engine.fields().blue.text(), "0");
    }

    #[test]
    fn boundary_hue_preserved_through_white() {
        let mut engine = PickerEngine::new();
        engine.set_channel(Channel::Hue, 200.0);
        engine.set_channel(Channel::Saturation, 0.5);
        // Pin lightness to 1.0: the color becomes white, chroma collapses.
        engine.set_channel(Channel::Lightness, 1.0);
        assert_eq!(engine.color().to_bytes(), [255, 255, 255, 255]);
        assert!((engine.hue() - 200.0).abs() < 0.5);

        // Dragging back down returns to the hue the user started with.
        engine.set_channel(Channel::Lightness, 0.5);
        assert!((engine.hue() - 200.0).abs() < 0.5);
    }

    #[test]
    fn saturation_preserved_when_level_pins_to_extreme() {
        let mut engine = PickerEngine::new();
        engine.set_channel(Channel::Hue, 200.0);
        engine.set_channel(Channel::Saturation, 0.5);
        let before = engine.color();

        // Pinning lightness to 1.0 collapses chroma; the recomputed
        // saturation of white is the degenerate 0 and must not be applied.
        engine.set_channel(Channel::Lightness, 1.0);
        assert_eq!(engine.color().to_bytes(), [255, 255, 255, 255]);
        assert!((engine.saturation() - 0.5).abs() < 1e-6);

        // Dragging level back returns to the starting color.
        engine.set_channel(Channel::Lightness, 0.5);
        let returned = engine.color();
        assert!((returned.r - before.r).abs() <= 1.0);
        assert!((returned.g - before.g).abs() <= 1.0);
        assert!((returned.b - before.b).abs() <= 1.0);
        assert!((engine.saturation() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hue_edit_at_zero_saturation_does_not_cascade() {
        let (mut engine, count) = engine_with_change_counter();
        let before = engine.color();
        // Default gray has zero saturation; hue is visually irrelevant here.
        engine.set_channel(Channel::Hue, 200.0);
        assert_eq!(count.get(), 0);
        assert_eq!(engine.color(), before);
        assert_eq!(engine.hue(), 200.0);
        assert_eq!(engine.fields().hue.text(), "200");
    }

    #[test]
    fn committing_same_rgb_twice_is_idempotent() {
        let (mut engine, count) = engine_with_change_counter();
        engine.set_channel(Channel::Red, 10.0);
        assert_eq!(count.get(), 1);
        let fields_before = engine.fields().red.text().to_string();
        let hex_before = engine.hex_text().to_string();

        engine.set_channel(Channel::Red, 10.0);
        assert_eq!(count.get(), 1);
        assert_eq!(engine.fields().red.text(), fields_before);
        assert_eq!(engine.hex_text(), hex_before);
    }

    #[test]
    fn one_notification_per_cascade() {
        let (mut engine, count) = engine_with_change_counter();
        engine.set_hex_text("#FF123456").expect("valid hex");
        assert_eq!(count.get(), 1);
        engine.set_channel(Channel::Blue, 0.0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn model_switch_preserves_rgb_bytes() {
        let mut engine = PickerEngine::new();
        engine.set_hex_text("#FF2080C0").expect("valid hex");
        let bytes = engine.color().to_bytes();
        let (_, s_hsl, l) = math::rgb_to_hsl(engine.color().r, engine.color().g, engine.color().b);
        assert!((engine.saturation() - s_hsl).abs() < 1e-9);
        assert!((engine.level() - l).abs() < 1e-9);

        engine.set_model(ColorModel::Hsv);
        assert_eq!(engine.color().to_bytes(), bytes);
        let (_, s_hsv, v) = math::rgb_to_hsv(engine.color().r, engine.color().g, engine.color().b);
        assert!((engine.saturation() - s_hsv).abs() < 1e-9);
        assert!((engine.level() - v).abs() < 1e-9);
    }

    #[test]
    fn model_switch_at_zero_chroma_keeps_hue() {
        let mut engine = PickerEngine::new();
        engine.set_channel(Channel::Hue, 150.0);
        engine.set_model(ColorModel::Hsv);
        assert_eq!(engine.hue(), 150.0);
    }

    #[test]
    fn invalid_field_text_flags_and_recovers() {
        let mut engine = PickerEngine::new();
        let hue_before = engine.hue();
        assert!(engine.set_field_text(Channel::Hue, "361").is_err());
        assert_eq!(engine.hue(), hue_before);
        assert!(engine.fields().hue.has_error());
        assert_eq!(engine.fields().hue.text(), "361");

        // Any other successful edit re-syncs the erroneous display text.
        engine.set_channel(Channel::Red, 200.0);
        assert!(!engine.fields().hue.has_error());
        assert_eq!(engine.fields().hue.text(), codec::format_hue_text(engine.hue()));
    }

    #[test]
    fn invalid_hex_leaves_color_untouched() {
        let mut engine = PickerEngine::new();
        let before = engine.color();
        assert!(engine.set_hex_text("F00").is_err());
        assert_eq!(engine.color(), before);
        assert!(engine.fields().hex.has_error());

        engine.set_channel(Channel::Green, 10.0);
        assert!(!engine.fields().hex.has_error());
        assert_eq!(engine.hex_text(), codec::format_hex(&engine.color()));
    }

    #[test]
    fn clamped_setter_respects_bounds() {
        let mut engine = PickerEngine::new();
        engine.set_channel_clamped(Channel::Red, 512.0);
        assert_eq!(engine.color().r, 255.0);
        engine.set_channel_clamped(Channel::Saturation, -0.3);
        assert_eq!(engine.saturation(), 0.0);
    }

    #[test]
    fn fractional_byte_input_is_accepted() {
        let mut engine = PickerEngine::new();
        engine.set_field_text(Channel::Red, "127.5").expect("valid");
        assert_eq!(engine.color().r, 127.5);
        assert_eq!(engine.fields().red.text(), "128");
    }

    #[test]
    fn alpha_edit_keeps_hsl_triple() {
        let mut engine = PickerEngine::new();
        engine.set_hex_text("#FF2080C0").expect("valid hex");
        let (hue, sat, level) = (engine.hue(), engine.saturation(), engine.level());
        engine.set_channel(Channel::Alpha, 64.0);
        assert_eq!(engine.color().to_bytes()[0], 64);
        assert!((engine.hue() - hue).abs() < 1e-9);
        assert!((engine.saturation() - sat).abs() < 1e-9);
        assert!((engine.level() - level).abs() < 1e-9);
    }

    #[test]
    fn gesture_surfaces_are_exclusive() {
        let mut engine = PickerEngine::new();
        assert!(engine.begin_gesture(GestureSurface::Area2D));
        assert!(!engine.begin_gesture(GestureSurface::Display3D));
        engine.end_gesture(GestureSurface::Display3D);
        assert!(engine.gesture().is_dragging());
        engine.end_gesture(GestureSurface::Area2D);
        assert!(engine.begin_gesture(GestureSurface::Display3D));
    }

    #[test]
    fn select_and_save_events() {
        let selected = Rc::new(Cell::new(None));
        let saved = Rc::new(Cell::new(None));
        let selected_sink = Rc::clone(&selected);
        let saved_sink = Rc::clone(&saved);

        let mut engine = PickerEngine::new()
            .on_color_selected(move |c| selected_sink.set(Some(c.to_bytes())))
            .on_custom_color_saved(move |c| saved_sink.set(Some(c.to_bytes())));

        engine.set_hex_text("#FF112233").expect("valid hex");
        engine.select_current();
        assert_eq!(selected.get(), Some([255, 17, 34, 51]));

        engine.save_custom_color();
        assert_eq!(saved.get(), Some([255, 17, 34, 51]));
        assert_eq!(engine.custom_colors().len(), 1);
    }

    #[test]
    fn malformed_custom_color_import_is_ignored() {
        let mut engine = PickerEngine::new();
        engine.save_custom_color();
        let before = engine.color();

        engine.load_custom_colors_json("{ not json");
        assert_eq!(engine.custom_colors().len(), 1);
        assert_eq!(engine.color(), before);

        engine.load_custom_colors_json(r#"[{"A":255,"R":1,"G":2,"B":3}]"#);
        assert_eq!(engine.custom_colors().len(), 1);
        assert_eq!(engine.custom_colors()[0].to_bytes(), [255, 1, 2, 3]);
    }

    #[test]
    fn custom_colors_export_round_trip() {
        let mut engine = PickerEngine::new();
        engine.set_hex_text("#80FF8000").expect("valid hex");
        engine.save_custom_color();
        let json = engine.export_custom_colors_json().expect("serializes");

        let mut other = PickerEngine::new();
        other.load_custom_colors_json(&json);
        assert_eq!(other.custom_colors()[0].to_bytes(), [128, 255, 128, 0]);
    }

    #[test]
    fn visuals_follow_commits() {
        let mut engine = PickerEngine::new();
        engine.set_hex_text("#FFFF0000").expect("valid hex");
        let visuals = engine.visuals();
        assert_eq!(visuals.red.end.to_bytes(), [255, 255, 0, 0]);
        assert_eq!(visuals.green.start.to_bytes(), [255, 255, 0, 0]);
        assert_eq!(visuals.green.end.to_bytes(), [255, 255, 255, 0]);
        assert_eq!(visuals.pure_hue.to_bytes(), [255, 255, 0, 0]);
    }

    #[test]
    fn active_component_selection() {
        let mut engine = PickerEngine::new();
        assert_eq!(engine.active_component(), Channel::Hue);
        engine.set_active_component(Channel::Saturation);
        assert_eq!(engine.active_component(), Channel::Saturation);
    }
}
