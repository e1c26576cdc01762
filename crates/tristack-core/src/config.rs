//! Widget configuration
//!
//! [`StackConfig`] carries everything a host needs to build a
//! [`TriangleButtonStack`](crate::ui::TriangleButtonStack): the labels, the
//! fixed button size, text placement and colors. It can be stored as a
//! compact `postcard` blob.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::ButtonLayout;
use crate::ui::components::{MAX_BUTTONS, MAX_LABEL_LEN};
use crate::ui::styling::{ColorPalette, StateColors, TextSize};

/// Separator used by [`StackConfig::with_label_list`]
pub const LABEL_SEPARATOR: char = ',';

pub const DEFAULT_BUTTON_WIDTH: u32 = 100;
pub const DEFAULT_BUTTON_HEIGHT: u32 = 60;
pub const DEFAULT_TEXT_PADDING: u32 = 6;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StackConfig {
    /// One label per button, top to bottom
    pub labels: Vec<String>,
    pub button_width: u32,
    pub button_height: u32,
    /// Horizontal gap between a label and the button's vertical edge
    pub text_padding: u32,
    pub text_size: TextSize,
    pub text_colors: StateColors,
    /// Fill used when no side-specific background is set
    pub background: Option<StateColors>,
    /// Fill for even (right-pointing) buttons
    pub left_background: Option<StateColors>,
    /// Fill for odd (left-pointing) buttons
    pub right_background: Option<StateColors>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::with_palette(&ColorPalette::default())
    }
}

impl StackConfig {
    /// Default sizes with colors taken from `palette`
    pub fn with_palette(palette: &ColorPalette) -> Self {
        Self {
            labels: Vec::new(),
            button_width: DEFAULT_BUTTON_WIDTH,
            button_height: DEFAULT_BUTTON_HEIGHT,
            text_padding: DEFAULT_TEXT_PADDING,
            text_size: TextSize::default(),
            text_colors: StateColors::text_from(palette),
            background: Some(StateColors::background_from(palette)),
            left_background: None,
            right_background: None,
        }
    }

    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels = labels.iter().map(|label| label.to_string()).collect();
        self
    }

    /// Set the labels from a single comma-separated list.
    ///
    /// An empty list leaves the widget without buttons.
    pub fn with_label_list(mut self, list: &str) -> Self {
        self.labels = if list.is_empty() {
            Vec::new()
        } else {
            list.split(LABEL_SEPARATOR).map(|label| label.to_string()).collect()
        };
        self
    }

    pub fn with_button_size(mut self, width: u32, height: u32) -> Self {
        self.button_width = width;
        self.button_height = height;
        self
    }

    pub fn with_text_padding(mut self, padding: u32) -> Self {
        self.text_padding = padding;
        self
    }

    pub fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_text_colors(mut self, colors: StateColors) -> Self {
        self.text_colors = colors;
        self
    }

    pub fn with_background(mut self, colors: Option<StateColors>) -> Self {
        self.background = colors;
        self
    }

    pub fn with_side_backgrounds(
        mut self,
        left: Option<StateColors>,
        right: Option<StateColors>,
    ) -> Self {
        self.left_background = left;
        self.right_background = right;
        self
    }

    /// Check the configuration and return the layout it describes.
    pub fn validate(&self) -> Result<ButtonLayout, ConfigError> {
        if self.labels.len() > MAX_BUTTONS {
            return Err(ConfigError::TooManyButtons { max: MAX_BUTTONS });
        }
        if self.labels.iter().any(|label| label.len() > MAX_LABEL_LEN) {
            return Err(ConfigError::LabelTooLong { max: MAX_LABEL_LEN });
        }

        Ok(ButtonLayout::new(
            self.labels.len(),
            self.button_width,
            self.button_height,
        )?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }
}
