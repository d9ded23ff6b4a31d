//! # Printer Settings Snapshot
//!
//! A read-only view of the adjustable print configuration. The control
//! plane (BLE characteristics, CLI flags, a JSON file) owns and mutates
//! the settings; print jobs read one snapshot per call and never write
//! back.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::BoletaError;
use crate::protocol::text::{STYLE_DOUBLE_HEIGHT, STYLE_DOUBLE_WIDTH, STYLE_FONT_B};

/// Character font selection.
///
/// Font A is the standard 12x24 cell (32 columns on a 384-dot head),
/// font B the condensed 9x17 cell (42 columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    #[default]
    A,
    B,
}

impl Font {
    /// Contribution of the font choice to the combined style mask.
    pub fn style_bits(self) -> u8 {
        match self {
            Font::A => 0,
            Font::B => STYLE_FONT_B,
        }
    }

    /// Text columns per line at 1x scale.
    pub fn columns(self) -> usize {
        match self {
            Font::A => 32,
            Font::B => 42,
        }
    }
}

/// Character size selection, mapped onto the double-height/double-width
/// style bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    /// Contribution of the size choice to the combined style mask.
    pub fn style_bits(self) -> u8 {
        match self {
            Size::Small => 0,
            Size::Medium => STYLE_DOUBLE_HEIGHT,
            Size::Large => STYLE_DOUBLE_HEIGHT | STYLE_DOUBLE_WIDTH,
        }
    }
}

/// Independent receipt decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    /// Print the sender line of message headers in normal video instead
    /// of the default inverse.
    pub plain_sender: bool,
    /// Double-width everything (style bit plus halved wrap budget).
    pub double_width: bool,
    /// Print the whole receipt rotated 180° so it reads correctly when
    /// the printer is mounted upside down.
    pub upside_down: bool,
}

/// One snapshot of the adjustable print configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    pub font: Font,
    pub size: Size,
    pub decorations: Decorations,
}

impl PrinterSettings {
    /// Load a settings snapshot from a JSON file.
    ///
    /// ```json
    /// { "font": "b", "size": "large", "decorations": { "upside_down": true } }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BoletaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BoletaError::Settings(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            BoletaError::Settings(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
