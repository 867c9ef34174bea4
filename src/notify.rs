//! Optional-callback wrapper for engine notifications.
//!
//! The engine exposes a handful of notification points ("color changed",
//! "color selected", "custom color saved"). Instead of spelling out
//! `Option<Box<dyn Fn(T)>>` at every one of them, [`Listener`] encapsulates
//! the pattern, in the same spirit as a widget callback.

use std::fmt;

/// An optional notification callback taking a payload of type `T`.
pub struct Listener<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Listener<T> {
    /// Create a listener from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty listener (no handler registered).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Invoke the listener with a payload, if one is registered.
    pub fn emit(&self, value: T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    /// Check whether a handler is registered.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("set", &self.is_some())
            .finish()
    }
}
