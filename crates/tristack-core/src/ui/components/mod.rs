// src/ui/components/mod.rs
//! UI components

pub mod triangle_stack;

pub use triangle_stack::{MAX_BUTTONS, MAX_LABEL_LEN, TriangleButtonStack};
