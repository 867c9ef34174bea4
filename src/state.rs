//! State types for the synchronization engine.
//!
//! These are the small enums and records the engine threads through an edit:
//! which model is active, which component a gesture edits, which field
//! originated the current cascade, and the per-field display-text mirrors.

/// Which third-component semantics are active: HSL lightness or HSV value.
///
/// Switching the model re-derives H/S/level from the unchanged RGB, so the
/// visible color is preserved while the triple routinely changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorModel {
    /// Hue / saturation / lightness.
    #[default]
    Hsl,
    /// Hue / saturation / value.
    Hsv,
}

impl ColorModel {
    /// Display name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            ColorModel::Hsl => "HSL",
            ColorModel::Hsv => "HSV",
        }
    }
}

/// An editable color component.
///
/// `Lightness` and `Value` both address the model-dependent third component;
/// which one is meaningful depends on the active [`ColorModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
    Value,
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Valid range for direct numeric edits of this channel.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Channel::Hue => (0.0, 360.0),
            Channel::Saturation | Channel::Lightness | Channel::Value => (0.0, 1.0),
            Channel::Alpha | Channel::Red | Channel::Green | Channel::Blue => (0.0, 255.0),
        }
    }

    /// Whether this is one of the canonical ARGB byte channels.
    pub fn is_argb(self) -> bool {
        matches!(
            self,
            Channel::Alpha | Channel::Red | Channel::Green | Channel::Blue
        )
    }

    /// Whether this addresses the model-dependent third component.
    pub fn is_level(self) -> bool {
        matches!(self, Channel::Lightness | Channel::Value)
    }

    /// Short label used in display text and logs.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Lightness => "L",
            Channel::Value => "V",
            Channel::Alpha => "A",
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// The property whose direct edit initiated the current propagation cascade.
///
/// Set at the top of one cascade and cleared when it returns; never
/// persisted. Used to suppress recomputation that would stomp the user's
/// in-progress edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditOrigin {
    /// Programmatic or untracked edit; nothing is suppressed.
    #[default]
    None,
    /// The hex text field initiated the cascade.
    Hex,
    /// A single channel setter initiated the cascade.
    Channel(Channel),
}

impl EditOrigin {
    /// Whether the cascade originated from the given channel.
    pub fn is_channel(self, channel: Channel) -> bool {
        self == EditOrigin::Channel(channel)
    }

    /// Whether the cascade originated from the third component.
    pub fn is_level(self) -> bool {
        matches!(self, EditOrigin::Channel(ch) if ch.is_level())
    }
}

/// Re-entrancy guard for the propagation cascade.
///
/// Held on the engine instance, never process-global. While `Propagating`,
/// setters record values but never start a nested cascade; exactly one
/// change notification fires per completed cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    /// No edit in progress.
    #[default]
    Idle,
    /// An edit's derived-field cascade is being applied.
    Propagating,
}

impl SyncState {
    /// Check whether a cascade is in progress.
    pub fn is_propagating(&self) -> bool {
        matches!(self, SyncState::Propagating)
    }

    /// Enter the cascade.
    pub fn begin(&mut self) {
        *self = SyncState::Propagating;
    }

    /// Leave the cascade.
    pub fn finish(&mut self) {
        *self = SyncState::Idle;
    }
}

/// An interactive input surface that can drive the color with a pointer drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSurface {
    /// The 2D saturation/level area.
    Area2D,
    /// The 3D cube/cone display.
    Display3D,
}

/// Pointer-gesture arbitration across input surfaces.
///
/// At most one surface drives the color at a time; a second surface cannot
/// start a drag while the first holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag owned by one surface.
    Dragging { surface: GestureSurface },
}

impl GestureState {
    /// Check if any surface is dragging.
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging { .. })
    }

    /// The surface that owns the current gesture, if any.
    pub fn surface(&self) -> Option<GestureSurface> {
        match self {
            GestureState::Dragging { surface } => Some(*surface),
            GestureState::Idle => None,
        }
    }

    /// Try to start a drag for the given surface.
    ///
    /// Returns `false` without changing state if another surface already
    /// owns the gesture; returns `true` if this surface now owns (or already
    /// owned) it.
    pub fn try_start(&mut self, surface: GestureSurface) -> bool {
        match self {
            GestureState::Idle => {
                *self = GestureState::Dragging { surface };
                true
            }
            GestureState::Dragging { surface: owner } => *owner == surface,
        }
    }

    /// Stop the drag if the given surface owns it.
    pub fn stop(&mut self, surface: GestureSurface) {
        if self.surface() == Some(surface) {
            *self = GestureState::Idle;
        }
    }
}

/// Display-text mirror of one editable field.
///
/// The text is derived from canonical state on every commit; `has_error`
/// marks text the user typed that failed validation. The next completed
/// cascade rewrites the text and clears the flag (the recovery path).
#[derive(Debug, Clone, Default)]
pub struct FieldText {
    text: String,
    has_error: bool,
}

impl FieldText {
    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the last user edit failed validation.
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Overwrite with freshly computed text and clear any pending error.
    pub fn refresh(&mut self, text: String) {
        self.text = text;
        self.has_error = false;
    }

    /// Record a failed user edit; the underlying value stays unchanged.
    pub fn reject(&mut self, text: String) {
        self.text = text;
        self.has_error = true;
    }
}

/// The full set of display-text mirrors bound to the picker.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    /// Hex string field (`#AARRGGBB`).
    pub hex: FieldText,
    /// Alpha byte field.
    pub alpha: FieldText,
    /// Red byte field.
    pub red: FieldText,
    /// Green byte field.
    pub green: FieldText,
    /// Blue byte field.
    pub blue: FieldText,
    /// Hue degree field.
    pub hue: FieldText,
    /// Saturation field.
    pub saturation: FieldText,
    /// Third-component (lightness or value) field.
    pub level: FieldText,
}

impl FieldSet {
    /// The mirror bound to a channel.
    pub fn channel(&self, channel: Channel) -> &FieldText {
        match channel {
            Channel::Hue => &self.hue,
            Channel::Saturation => &self.saturation,
            Channel::Lightness | Channel::Value => &self.level,
            Channel::Alpha => &self.alpha,
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Mutable access to the mirror bound to a channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut FieldText {
        match channel {
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Lightness | Channel::Value => &mut self.level,
            Channel::Alpha => &mut self.alpha,
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_is_exclusive_across_surfaces() {
        let mut gesture = GestureState::default();
        assert!(gesture.try_start(GestureSurface::Area2D));
        assert!(!gesture.try_start(GestureSurface::Display3D));
        assert_eq!(gesture.surface(), Some(GestureSurface::Area2D));

        // Only the owner can release the gesture.
        gesture.stop(GestureSurface::Display3D);
        assert!(gesture.is_dragging());
        gesture.stop(GestureSurface::Area2D);
        assert!(!gesture.is_dragging());
        assert!(gesture.try_start(GestureSurface::Display3D));
    }

    #[test]
    fn restarting_the_owning_surface_is_allowed() {
        let mut gesture = GestureState::default();
        assert!(gesture.try_start(GestureSurface::Area2D));
        assert!(gesture.try_start(GestureSurface::Area2D));
    }

    #[test]
    fn sync_state_transitions() {
        let mut sync = SyncState::default();
        assert!(!sync.is_propagating());
        sync.begin();
        assert!(sync.is_propagating());
        sync.finish();
        assert!(!sync.is_propagating());
    }

    #[test]
    fn field_text_recovery() {
        let mut field = FieldText::default();
        field.reject("9999".to_string());
        assert!(field.has_error());
        assert_eq!(field.text(), "9999");

        field.refresh("200".to_string());
        assert!(!field.has_error());
        assert_eq!(field.text(), "200");
    }

    #[test]
    fn lightness_and_value_share_a_mirror() {
        let mut fields = FieldSet::default();
        fields
            .channel_mut(Channel::Lightness)
            .refresh("0.500".to_string());
        assert_eq!(fields.channel(Channel::Value).text(), "0.500");
    }

    #[test]
    fn channel_bounds() {
        assert_eq!(Channel::Hue.bounds(), (0.0, 360.0));
        assert_eq!(Channel::Saturation.bounds(), (0.0, 1.0));
        assert_eq!(Channel::Red.bounds(), (0.0, 255.0));
        assert!(Channel::Alpha.is_argb());
        assert!(Channel::Value.is_level());
        assert!(!Channel::Hue.is_level());
    }
}
