//! Triangle button layout geometry and hit-testing
//!
//! Buttons are stacked vertically with 50% overlap: button `i` occupies the
//! vertical range `[i * half, i * half + height]` where `half = height / 2`.
//! Orientation alternates by parity. Even indices point right (vertical edge
//! on the left, apex on the right edge), odd indices point left.
//!
//! ```text
//!  |\
//!  | \  0
//!  | /|
//!  |/ |  1
//!  |\ |
//!  | \|
//! ```
//!
//! Every function here is a pure function of its arguments. Coordinates are
//! widget-relative device pixels with the origin at the widget's top-left.
//!
//! Cross products use `i32` arithmetic and overflow only for coordinates
//! beyond roughly 46,000 pixels on either axis.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, Triangle};
use log::trace;

use crate::error::LayoutError;

/// Smallest button height that still yields a non-zero half step
pub const MIN_BUTTON_HEIGHT: u32 = 2;

/// Immutable geometric configuration shared by all buttons of one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLayout {
    count: usize,
    width: u32,
    height: u32,
}

impl ButtonLayout {
    /// Create a layout for `count` buttons of `width` x `height` pixels.
    ///
    /// Hit-testing divides by `height / 2`, so any layout that has buttons
    /// must have a height of at least [`MIN_BUTTON_HEIGHT`].
    ///
    /// Any width is accepted, but below 3 pixels the integer centroid of an
    /// odd triangle can land on its open boundary and resolve to another
    /// button (or to none).
    pub fn new(count: usize, width: u32, height: u32) -> Result<Self, LayoutError> {
        if count > 0 {
            if height == 0 {
                return Err(LayoutError::ZeroHeight);
            }
            if height < MIN_BUTTON_HEIGHT {
                return Err(LayoutError::HeightTooSmall {
                    height,
                    min: MIN_BUTTON_HEIGHT,
                });
            }
        }

        Ok(Self {
            count,
            width,
            height,
        })
    }

    /// Same geometry with a different number of buttons
    pub fn with_count(self, count: usize) -> Result<Self, LayoutError> {
        Self::new(count, self.width, self.height)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Vertical step between consecutive buttons
    pub fn half(&self) -> i32 {
        (self.height / 2) as i32
    }
}

/// The triangular hit-test and clip region of one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTriangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl ButtonTriangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The vertex opposite the vertical edge
    pub fn apex(&self) -> Point {
        self.c
    }

    /// Integer centroid of the three vertices
    pub fn centroid(&self) -> Point {
        Point::new(
            (self.a.x + self.b.x + self.c.x) / 3,
            (self.a.y + self.b.y + self.c.y) / 3,
        )
    }

    /// Check whether `point` falls inside this triangle.
    ///
    /// See [`contains_point`].
    pub fn contains(&self, point: Point) -> bool {
        contains_point(self, point)
    }

    /// Convert into an `embedded-graphics` primitive for drawing
    pub fn to_primitive(&self) -> Triangle {
        Triangle::new(self.a, self.b, self.c)
    }
}

/// Bounding rectangle of the button at `index`.
///
/// `left = 0`, `right = width`, `top = index * (height / 2)` and
/// `bottom = top + height`. Passing an index outside `[0, count)` is a caller
/// contract violation.
pub fn bounding_rect(index: usize, layout: &ButtonLayout) -> Rectangle {
    debug_assert!(
        index < layout.count,
        "button index {} out of range (count: {})",
        index,
        layout.count
    );

    let top = index as i32 * layout.half();
    Rectangle::new(
        Point::new(0, top),
        Size::new(layout.width, layout.height),
    )
}

/// Triangular region of the button at `index`.
///
/// Passing an index outside `[0, count)` is a caller contract violation.
pub fn triangle_path(index: usize, layout: &ButtonLayout) -> ButtonTriangle {
    debug_assert!(
        index < layout.count,
        "button index {} out of range (count: {})",
        index,
        layout.count
    );

    triangle_at(index as i32, layout)
}

/// Triangle for any slot in the stack, including slots past either end.
///
/// Hit-testing also checks the slot below the last button and above the first
/// one, so this has no range restriction.
fn triangle_at(index: i32, layout: &ButtonLayout) -> ButtonTriangle {
    let width = layout.width as i32;
    let height = layout.height as i32;
    let half = layout.half();
    let start = index * half;

    if index % 2 == 0 {
        ButtonTriangle::new(
            Point::new(0, start),
            Point::new(0, start + height),
            Point::new(width, start + half),
        )
    } else {
        ButtonTriangle::new(
            Point::new(width, start),
            Point::new(width, start + height),
            Point::new(0, start + half),
        )
    }
}

/// Sign-of-cross-product containment test.
///
/// With `A`, `B`, `C` the triangle vertices and `P` the query point, the
/// three products `(P-A)x(P-B)`, `(P-B)x(P-C)` and `(P-C)x(P-A)` must all be
/// `<= 0` or all be `> 0`.
///
/// The boundary treatment is asymmetric: a point on an edge produces a zero
/// product, which only counts as inside in the `<= 0` branch. Whether a
/// shared edge between two adjacent buttons belongs to one or the other
/// depends on the winding of each triangle, and hit-testing relies on this
/// exact classification.
pub fn contains_point(triangle: &ButtonTriangle, point: Point) -> bool {
    let pa = point - triangle.a;
    let pb = point - triangle.b;
    let pc = point - triangle.c;

    let a = cross(pa, pb);
    let b = cross(pb, pc);
    let c = cross(pc, pa);

    (a <= 0 && b <= 0 && c <= 0) || (a > 0 && b > 0 && c > 0)
}

fn cross(u: Point, v: Point) -> i32 {
    u.x * v.y - u.y * v.x
}

/// Index of the button containing `point`, or `None`.
///
/// The 50% overlap guarantees the touched button is either
/// `y / (height / 2)` or the one above it. The first candidate is verified
/// with [`contains_point`]; when it fails, the button above is accepted
/// without a second check. A touch left or right of the widget within a
/// button's vertical range therefore still resolves to that fallback
/// candidate.
pub fn hit_test(point: Point, layout: &ButtonLayout) -> Option<usize> {
    if layout.count == 0 {
        return None;
    }

    let mut candidate = point.y / layout.half();
    if !contains_point(&triangle_at(candidate, layout), point) {
        candidate -= 1;
    }

    trace!(
        "hit_test ({}, {}) -> candidate {}",
        point.x, point.y, candidate
    );

    // Covers both the slot just below the last button (candidate == count)
    // and touches above the first one.
    if candidate < 0 || candidate as usize >= layout.count {
        return None;
    }

    Some(candidate as usize)
}

/// Size the widget needs to show every button.
///
/// The first button takes a full height; each further button adds half.
pub fn preferred_size(layout: &ButtonLayout) -> Size {
    if layout.count == 0 {
        return Size::zero();
    }

    let extra = (layout.height / 2) * (layout.count as u32 - 1);
    Size::new(layout.width, layout.height + extra)
}
