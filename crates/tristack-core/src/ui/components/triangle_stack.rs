// src/ui/components/triangle_stack.rs
//! Vertical stack of alternating triangular buttons

use crate::config::StackConfig;
use crate::error::ConfigError;
use crate::geometry::{ButtonLayout, bounding_rect, hit_test, preferred_size, triangle_path};
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ButtonState, StateColors, TextSize};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::{String, Vec};
use log::{debug, warn};

/// Maximum number of buttons in one stack
pub const MAX_BUTTONS: usize = 16;

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 32;

type Label = String<MAX_LABEL_LEN>;

/// A vertical stack of triangular buttons with 50% overlap.
///
/// Even buttons point right and carry a left-aligned label; odd buttons point
/// left and carry a right-aligned label.
///
/// # Touch Behavior
/// - A press inside the widget records the pressed button (if any)
/// - Release or cancel over the same button returns
///   [`Action::ItemClicked`]; anywhere else the press is dropped
/// - Clicking does not change the selection; the host decides what a click
///   means and calls [`set_selected`](Self::set_selected)
///
/// # Examples
/// ```ignore
/// let config = StackConfig::default().with_label_list("Brand,Price,Model");
/// let mut stack = TriangleButtonStack::new(Point::new(20, 10), &config)?;
///
/// stack.handle_touch(TouchEvent::Press(TouchPoint::new(40, 40)));
/// if let TouchResult::Action(Action::ItemClicked(index)) =
///     stack.handle_touch(TouchEvent::Release(TouchPoint::new(40, 40)))
/// {
///     stack.set_selected(Some(index));
/// }
/// ```
pub struct TriangleButtonStack {
    origin: Point,
    labels: Vec<Label, MAX_BUTTONS>,
    layout: ButtonLayout,
    text_padding: u32,
    text_size: TextSize,
    text_colors: StateColors,
    background: Option<StateColors>,
    left_background: Option<StateColors>,
    right_background: Option<StateColors>,
    selected: Option<usize>,
    pressed: Option<usize>,
    dirty: bool,
}

impl TriangleButtonStack {
    /// Build a stack with its top-left corner at `origin`.
    pub fn new(origin: Point, config: &StackConfig) -> Result<Self, ConfigError> {
        let layout = config.validate()?;

        let mut stack = Self {
            origin,
            labels: Vec::new(),
            layout,
            text_padding: config.text_padding,
            text_size: config.text_size,
            text_colors: config.text_colors,
            background: config.background,
            left_background: config.left_background,
            right_background: config.right_background,
            selected: None,
            pressed: None,
            dirty: true,
        };

        let labels: alloc::vec::Vec<&str> = config.labels.iter().map(|l| l.as_str()).collect();
        stack.set_labels(&labels)?;
        Ok(stack)
    }

    /// Replace every label. The number of labels sets the number of buttons.
    ///
    /// Selection and any pending press are cleared.
    pub fn set_labels(&mut self, labels: &[&str]) -> Result<(), ConfigError> {
        if labels.len() > MAX_BUTTONS {
            return Err(ConfigError::TooManyButtons { max: MAX_BUTTONS });
        }

        let layout = self.layout.with_count(labels.len())?;

        let mut new_labels: Vec<Label, MAX_BUTTONS> = Vec::new();
        for label in labels {
            let mut text = Label::new();
            text.push_str(label)
                .map_err(|_| ConfigError::LabelTooLong { max: MAX_LABEL_LEN })?;
            new_labels
                .push(text)
                .map_err(|_| ConfigError::TooManyButtons { max: MAX_BUTTONS })?;
        }

        self.warn_on_overflowing_labels(&new_labels);

        self.labels = new_labels;
        self.layout = layout;
        self.selected = None;
        self.pressed = None;
        self.dirty = true;
        Ok(())
    }

    fn warn_on_overflowing_labels(&self, labels: &[Label]) {
        let char_width = self.text_size.font().character_size.width;
        for label in labels {
            let text_width = label.chars().count() as u32 * char_width;
            if text_width.saturating_add(self.text_padding) > self.layout.width() {
                warn!(
                    "Label {:?} ({}px) overflows a {}px button",
                    label.as_str(),
                    text_width,
                    self.layout.width()
                );
            }
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.as_str())
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|l| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn layout(&self) -> &ButtonLayout {
        &self.layout
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Move the stack (for dynamic repositioning)
    pub fn set_origin(&mut self, origin: Point) {
        if self.origin != origin {
            self.origin = origin;
            self.dirty = true;
        }
    }

    /// Highlight `index` as the selected button, or clear the selection.
    ///
    /// Out-of-range indices clear the selection.
    pub fn set_selected(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.labels.len());
        if self.selected != index {
            self.selected = index;
            self.dirty = true;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_text_size(&mut self, size: TextSize) {
        if self.text_size != size {
            self.text_size = size;
            self.warn_on_overflowing_labels(&self.labels);
            self.dirty = true;
        }
    }

    pub fn text_size(&self) -> TextSize {
        self.text_size
    }

    /// Replace the label colors for every state
    pub fn set_text_colors(&mut self, colors: StateColors) {
        if self.text_colors != colors {
            self.text_colors = colors;
            self.dirty = true;
        }
    }

    pub fn text_colors(&self) -> StateColors {
        self.text_colors
    }

    /// Button currently held down, if any
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    pub fn button_state(&self, index: usize) -> ButtonState {
        if self.selected == Some(index) {
            ButtonState::Selected
        } else if self.pressed == Some(index) {
            ButtonState::Pressed
        } else {
            ButtonState::Normal
        }
    }

    /// Button under a screen-space touch point, ignoring widget bounds
    pub fn index_at(&self, point: TouchPoint) -> Option<usize> {
        hit_test(point.to_point() - self.origin, &self.layout)
    }

    fn background_for(&self, index: usize) -> Option<StateColors> {
        let side = if index % 2 == 0 {
            self.left_background
        } else {
            self.right_background
        };
        side.or(self.background)
    }

    fn draw_button<D: DrawTarget<Color = Rgb565>>(
        &self,
        index: usize,
        label: &str,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let state = self.button_state(index);
        let rect = bounding_rect(index, &self.layout).translate(self.origin);

        if let Some(colors) = self.background_for(index) {
            triangle_path(index, &self.layout)
                .to_primitive()
                .translate(self.origin)
                .into_styled(PrimitiveStyle::with_fill(colors.resolve(state)))
                .draw(display)?;
        }

        // Keeps the label anchor inside the button for any configured padding
        let padding = self.text_padding.min(self.layout.width()) as i32;
        let (x, alignment) = if index % 2 == 0 {
            (rect.top_left.x + padding, Alignment::Left)
        } else {
            (
                rect.top_left.x + rect.size.width as i32 - padding,
                Alignment::Right,
            )
        };

        let character_style =
            MonoTextStyle::new(self.text_size.font(), self.text_colors.resolve(state));
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(
            label,
            Point::new(x, rect.center().y),
            character_style,
            text_style,
        )
        .draw(display)?;

        Ok(())
    }
}

impl Drawable for TriangleButtonStack {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        for (index, label) in self.labels.iter().enumerate() {
            self.draw_button(index, label, display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, preferred_size(&self.layout))
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for TriangleButtonStack {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds().contains(point.to_point()) && self.index_at(point).is_some()
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) => {
                if !self.bounds().contains(point.to_point()) {
                    return TouchResult::NotHandled;
                }

                self.pressed = self.index_at(point);
                match self.pressed {
                    Some(index) => {
                        debug!("Button {} pressed", index);
                        self.dirty = true;
                        TouchResult::Handled
                    }
                    None => TouchResult::NotHandled,
                }
            }
            TouchEvent::Drag(_) if self.pressed.is_some() => TouchResult::Handled,
            // Release is tracked outside the bounds once a press is captured.
            // Cancel resolves the same way as a release.
            TouchEvent::Release(point) | TouchEvent::Cancel(point) => {
                let Some(down) = self.pressed.take() else {
                    return TouchResult::NotHandled;
                };
                self.dirty = true;

                if self.index_at(point) == Some(down) {
                    debug!("Button {} clicked", down);
                    TouchResult::Action(Action::ItemClicked(down))
                } else {
                    debug!("Press on button {} dropped", down);
                    TouchResult::Handled
                }
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::DirtyRegion;
    use embedded_graphics::mock_display::MockDisplay;

    fn scenario_stack() -> TriangleButtonStack {
        let config = StackConfig::default().with_label_list("Brand,Price,Model,Engine,Other");
        TriangleButtonStack::new(Point::zero(), &config).unwrap()
    }

    fn press(x: u16, y: u16) -> TouchEvent {
        TouchEvent::Press(TouchPoint::new(x, y))
    }

    fn release(x: u16, y: u16) -> TouchEvent {
        TouchEvent::Release(TouchPoint::new(x, y))
    }

    #[test]
    fn test_bounds_follow_button_count() {
        let stack = scenario_stack();
        assert_eq!(stack.len(), 5);
        assert_eq!(
            stack.bounds(),
            Rectangle::new(Point::zero(), Size::new(100, 180))
        );

        let empty = TriangleButtonStack::new(Point::new(5, 5), &StackConfig::default()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.bounds().size, Size::zero());
    }

    #[test]
    fn test_click_on_same_button() {
        let mut stack = scenario_stack();

        assert_eq!(stack.handle_touch(press(10, 30)), TouchResult::Handled);
        assert_eq!(stack.pressed(), Some(0));
        assert_eq!(stack.button_state(0), ButtonState::Pressed);

        assert_eq!(
            stack.handle_touch(release(12, 32)),
            TouchResult::Action(Action::ItemClicked(0))
        );
        assert_eq!(stack.pressed(), None);
        assert_eq!(stack.selected(), None, "click must not select by itself");
    }

    #[test]
    fn test_release_on_other_button_drops_press() {
        let mut stack = scenario_stack();

        stack.handle_touch(press(10, 30));
        assert_eq!(stack.handle_touch(release(10, 150)), TouchResult::Handled);
        assert_eq!(stack.pressed(), None);
    }

    #[test]
    fn test_cancel_resolves_like_release() {
        let mut stack = scenario_stack();

        stack.handle_touch(press(90, 60));
        assert_eq!(stack.pressed(), Some(1));
        assert_eq!(
            stack.handle_touch(TouchEvent::Cancel(TouchPoint::new(90, 60))),
            TouchResult::Action(Action::ItemClicked(1))
        );
    }

    #[test]
    fn test_press_outside_is_not_handled() {
        let mut stack = scenario_stack();

        assert_eq!(stack.handle_touch(press(150, 30)), TouchResult::NotHandled);
        assert_eq!(stack.handle_touch(press(10, 190)), TouchResult::NotHandled);
        assert_eq!(stack.pressed(), None);
    }

    #[test]
    fn test_release_without_press_is_not_handled() {
        let mut stack = scenario_stack();
        assert_eq!(stack.handle_touch(release(10, 30)), TouchResult::NotHandled);
        assert_eq!(
            stack.handle_touch(TouchEvent::Drag(TouchPoint::new(10, 30))),
            TouchResult::NotHandled
        );
    }

    #[test]
    fn test_touch_points_are_relative_to_origin() {
        let config = StackConfig::default().with_label_list("a,b,c");
        let mut stack = TriangleButtonStack::new(Point::new(50, 100), &config).unwrap();

        assert_eq!(stack.index_at(TouchPoint::new(60, 130)), Some(0));
        assert_eq!(stack.index_at(TouchPoint::new(140, 160)), Some(1));
        assert!(!stack.contains_point(TouchPoint::new(10, 130)));

        stack.handle_touch(press(140, 160));
        assert_eq!(
            stack.handle_touch(release(140, 160)),
            TouchResult::Action(Action::ItemClicked(1))
        );
    }

    #[test]
    fn test_selection_wins_over_press() {
        let mut stack = scenario_stack();
        stack.set_selected(Some(0));
        stack.handle_touch(press(10, 30));

        assert_eq!(stack.button_state(0), ButtonState::Selected);
        assert_eq!(stack.button_state(1), ButtonState::Normal);

        stack.set_selected(Some(99));
        assert_eq!(stack.selected(), None);
    }

    #[test]
    fn test_set_labels_resets_state() {
        let mut stack = scenario_stack();
        stack.set_selected(Some(2));
        stack.mark_clean();

        stack.set_labels(&["one", "two"]).unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.selected(), None);
        assert_eq!(stack.label(1), Some("two"));
        assert!(stack.is_dirty());
        assert_eq!(stack.bounds().size, Size::new(100, 90));

        let long = "x".repeat(MAX_LABEL_LEN + 1);
        assert!(matches!(
            stack.set_labels(&[long.as_str()]),
            Err(ConfigError::LabelTooLong { .. })
        ));
        assert_eq!(stack.len(), 2, "failed update keeps previous labels");
    }

    #[test]
    fn test_dirty_tracking() {
        let mut stack = scenario_stack();
        assert!(stack.dirty_region().is_some());

        stack.mark_clean();
        assert_eq!(stack.dirty_region(), None);

        stack.set_selected(None);
        assert!(!stack.is_dirty(), "unchanged selection stays clean");

        stack.set_selected(Some(3));
        assert_eq!(
            stack.dirty_region(),
            Some(DirtyRegion::new(stack.bounds()))
        );
    }

    #[test]
    fn test_draw_fills_triangles_by_state() {
        let normal = Rgb565::new(1, 2, 3);
        let pressed = Rgb565::new(4, 5, 6);
        let selected = Rgb565::new(7, 8, 9);
        let right = Rgb565::new(10, 11, 12);

        let config = StackConfig::default()
            .with_labels(&["", "", ""])
            .with_button_size(40, 20)
            .with_background(Some(StateColors::new(normal, pressed, selected)))
            .with_side_backgrounds(None, Some(StateColors::uniform(right)));
        let mut stack = TriangleButtonStack::new(Point::zero(), &config).unwrap();
        stack.set_selected(Some(2));

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);
        stack.draw(&mut display).unwrap();

        let centroid = |i| triangle_path(i, stack.layout()).centroid();
        assert_eq!(display.get_pixel(centroid(0)), Some(normal));
        assert_eq!(display.get_pixel(centroid(1)), Some(right));
        assert_eq!(display.get_pixel(centroid(2)), Some(selected));
    }

    #[test]
    fn test_draw_without_background_only_draws_labels() {
        let config = StackConfig::default()
            .with_labels(&["", ""])
            .with_button_size(40, 20)
            .with_background(None);
        let stack = TriangleButtonStack::new(Point::zero(), &config).unwrap();

        let mut display = MockDisplay::<Rgb565>::new();
        stack.draw(&mut display).unwrap();

        assert_eq!(display, MockDisplay::new());
    }

    #[test]
    fn test_drag_keeps_pending_press() {
        let mut stack = scenario_stack();
        stack.handle_touch(press(10, 30));

        assert_eq!(
            stack.handle_touch(TouchEvent::Drag(TouchPoint::new(90, 60))),
            TouchResult::Handled
        );
        assert_eq!(stack.pressed(), Some(0));

        // Release back over the original button still clicks it
        assert_eq!(
            stack.handle_touch(release(10, 30)),
            TouchResult::Action(Action::ItemClicked(0))
        );
    }

    #[test]
    fn test_huge_text_padding_does_not_overflow() {
        let config = StackConfig::default()
            .with_label_list("a,b")
            .with_button_size(40, 20)
            .with_background(None)
            .with_text_padding(u32::MAX);
        let mut stack = TriangleButtonStack::new(Point::zero(), &config).unwrap();
        stack.set_labels(&["abc", "de"]).unwrap();
        stack.set_text_size(TextSize::Large);

        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_out_of_bounds_drawing(true);
        stack.draw(&mut display).unwrap();
    }

    #[test]
    fn test_text_style_setters_mark_dirty_on_change() {
        let mut stack = scenario_stack();
        stack.mark_clean();

        stack.set_text_size(TextSize::Medium);
        assert!(!stack.is_dirty(), "same size stays clean");
        stack.set_text_size(TextSize::Large);
        assert!(stack.is_dirty());
        assert_eq!(stack.text_size(), TextSize::Large);

        stack.mark_clean();
        let colors = stack.text_colors();
        stack.set_text_colors(colors);
        assert!(!stack.is_dirty(), "same colors stay clean");

        let red = StateColors::uniform(Rgb565::new(31, 0, 0));
        stack.set_text_colors(red);
        assert!(stack.is_dirty());
        assert_eq!(stack.text_colors(), red);
    }

    #[test]
    fn test_labels_are_anchored_by_parity() {
        let ink = Rgb565::new(31, 63, 31);
        let padding = 4;
        let width = 60;
        let config = StackConfig::default()
            .with_labels(&["W", "W"])
            .with_button_size(width, 30)
            .with_text_padding(padding)
            .with_background(None)
            .with_text_colors(StateColors::uniform(ink));
        let stack = TriangleButtonStack::new(Point::zero(), &config).unwrap();

        let mut display = MockDisplay::<Rgb565>::new();
        stack.draw(&mut display).unwrap();

        // (min_x, max_x, min_y, max_y) of the text pixels left and right of
        // the middle column
        let mut extents = [(i32::MAX, i32::MIN, i32::MAX, i32::MIN); 2];
        for y in 0..64 {
            for x in 0..64 {
                if display.get_pixel(Point::new(x, y)) == Some(ink) {
                    let e = &mut extents[(x >= width as i32 / 2) as usize];
                    e.0 = e.0.min(x);
                    e.1 = e.1.max(x);
                    e.2 = e.2.min(y);
                    e.3 = e.3.max(y);
                }
            }
        }

        let char_width = TextSize::Medium.font().character_size.width as i32;
        let padding = padding as i32;
        let right_edge = width as i32 - padding;

        let (min_x, max_x, min_y, max_y) = extents[0];
        assert!(
            min_x >= padding && max_x < padding + char_width,
            "even label columns {}..={}", min_x, max_x
        );
        let center = bounding_rect(0, stack.layout()).center().y;
        assert!(
            ((min_y + max_y) / 2 - center).abs() <= 2,
            "even label rows {}..={}", min_y, max_y
        );

        let (min_x, max_x, min_y, max_y) = extents[1];
        assert!(
            max_x <= right_edge && min_x >= right_edge - char_width,
            "odd label columns {}..={}", min_x, max_x
        );
        let center = bounding_rect(1, stack.layout()).center().y;
        assert!(
            ((min_y + max_y) / 2 - center).abs() <= 2,
            "odd label rows {}..={}", min_y, max_y
        );
    }
}
