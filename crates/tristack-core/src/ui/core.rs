// src/ui/core.rs
//! Core UI traits and types for the tristack UI system

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Represents a 2D touch point on the display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Touch events that can occur on the UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Initial touch press at a point
    Press(TouchPoint),
    /// Touch drag to a new point
    Drag(TouchPoint),
    /// Finger lifted at a point
    Release(TouchPoint),
    /// Gesture aborted by the host, with the last known point
    Cancel(TouchPoint),
}

/// Result from handling a touch event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A button was pressed and released over the same index
    ItemClicked(usize),
}

/// Screen area that must be repainted before the next frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display within its bounds
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);

    /// Get the dirty region for partial updates
    fn dirty_region(&self) -> Option<DirtyRegion> {
        if self.is_dirty() {
            Some(DirtyRegion::new(self.bounds()))
        } else {
            None
        }
    }
}

/// Trait for UI elements that respond to touch events
pub trait Touchable {
    /// Check if a point is within this element's touch area
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event, returns result indicating if handled and any action
    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult;
}
