// src/ui/mod.rs
//! tristack UI system
//!
//! - Core traits for drawable and touchable elements
//! - Styled components (the triangle button stack)
//! - Dirty tracking for efficient rendering

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::TriangleButtonStack;
pub use self::core::{
    Action, DirtyRegion, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use styling::{ButtonState, ColorPalette, StateColors, TextSize};
