//! Custom-color collection and its JSON passthrough format.
//!
//! The exchange format is a JSON array of ARGB records with integer byte
//! fields named `A`, `R`, `G`, `B`. The engine only supplies and accepts
//! parsed color values; file transport belongs to external collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Errors from palette import/export.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One exchanged color record, bytes in ARGB order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Alpha byte.
    #[serde(rename = "A")]
    pub a: u8,
    /// Red byte.
    #[serde(rename = "R")]
    pub r: u8,
    /// Green byte.
    #[serde(rename = "G")]
    pub g: u8,
    /// Blue byte.
    #[serde(rename = "B")]
    pub b: u8,
}

impl From<Color> for ColorRecord {
    fn from(color: Color) -> Self {
        let [a, r, g, b] = color.to_bytes();
        Self { a, r, g, b }
    }
}

impl From<ColorRecord> for Color {
    fn from(record: ColorRecord) -> Self {
        Color::from_argb_bytes(record.a, record.r, record.g, record.b)
    }
}

/// The user's saved custom colors.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The saved colors, oldest first.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of saved colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append a color.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Remove all saved colors.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Serialize the palette as a JSON array of ARGB records.
    pub fn to_json(&self) -> Result<String, PaletteError> {
        let records: Vec<ColorRecord> = self.colors.iter().copied().map(Into::into).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Parse a palette from a JSON array of ARGB records.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let records: Vec<ColorRecord> = serde_json::from_str(json)?;
        Ok(Self {
            colors: records.into_iter().map(Into::into).collect(),
        })
    }
}
