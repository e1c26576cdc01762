//! Error types for layout validation and configuration handling

use thiserror_no_std::Error;

/// Rejected button layout geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Buttons were requested with a zero button height
    #[error("Button height must be non-zero when buttons are present")]
    ZeroHeight,

    /// Button height is too small to produce a non-zero half step
    #[error("Button height {height} is too small (min: {min})")]
    HeightTooSmall {
        /// Requested button height
        height: u32,
        /// Smallest accepted button height
        min: u32,
    },
}

/// Rejected or unreadable widget configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// More labels than the widget can hold
    #[error("Too many buttons (max: {max})")]
    TooManyButtons {
        /// Maximum number of buttons per widget
        max: usize,
    },

    /// A label does not fit the fixed-capacity label buffer
    #[error("Label too long (max: {max} bytes)")]
    LabelTooLong {
        /// Maximum label length in bytes
        max: usize,
    },

    /// The configured button geometry is invalid
    #[error("Invalid layout: {0}")]
    Layout(LayoutError),

    /// Serializing the configuration failed
    #[error("Failed to encode configuration: {0}")]
    Encode(postcard::Error),

    /// Deserializing the configuration failed
    #[error("Failed to decode configuration: {0}")]
    Decode(postcard::Error),
}

impl From<LayoutError> for ConfigError {
    fn from(err: LayoutError) -> Self {
        ConfigError::Layout(err)
    }
}
