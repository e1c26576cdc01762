//! Per-state colors for buttons
//!
//! A button is in exactly one visual state at a time. Selection wins over a
//! pending press, which wins over the resting state.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use serde::{Deserialize, Serialize};

use super::colors::ColorPalette;

/// Visual state of a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Pressed,
    Selected,
}

/// One color for each [`ButtonState`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateColors {
    #[serde(with = "rgb565_raw")]
    pub normal: Rgb565,
    #[serde(with = "rgb565_raw")]
    pub pressed: Rgb565,
    #[serde(with = "rgb565_raw")]
    pub selected: Rgb565,
}

impl StateColors {
    pub fn new(normal: Rgb565, pressed: Rgb565, selected: Rgb565) -> Self {
        Self {
            normal,
            pressed,
            selected,
        }
    }

    /// The same color regardless of state
    pub fn uniform(color: Rgb565) -> Self {
        Self::new(color, color, color)
    }

    /// Button fills derived from a palette
    pub fn background_from(palette: &ColorPalette) -> Self {
        Self::new(palette.surface, palette.secondary, palette.primary)
    }

    /// Label colors derived from a palette
    pub fn text_from(palette: &ColorPalette) -> Self {
        Self::new(
            palette.text_secondary,
            palette.text_primary,
            palette.text_primary,
        )
    }

    pub fn resolve(&self, state: ButtonState) -> Rgb565 {
        match state {
            ButtonState::Normal => self.normal,
            ButtonState::Pressed => self.pressed,
            ButtonState::Selected => self.selected,
        }
    }
}

/// Text size variants
///
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &embedded_graphics::mono_font::ascii::FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// Serializes [`Rgb565`] as its raw 16-bit storage value.
pub(crate) mod rgb565_raw {
    use embedded_graphics::pixelcolor::raw::RawU16;
    use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgb565, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16((*color).into_storage())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgb565, D::Error> {
        let raw = u16::deserialize(deserializer)?;
        Ok(Rgb565::from(RawU16::new(raw)))
    }
}
