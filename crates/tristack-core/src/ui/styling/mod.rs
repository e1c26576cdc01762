//! Styling system for tristack widgets
//!
//! - **colors**: RGB565 constants and palettes
//! - **state**: per-state button colors and text sizes

pub mod colors;
pub mod state;

pub use colors::*;
pub use state::{ButtonState, StateColors, TextSize};
