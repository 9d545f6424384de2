// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement rules: pure functions mapping a pointer delta to a geometry patch.
//!
//! Each rule receives the box snapshotted at drag start, the cumulative pointer
//! delta since drag start, and the minimum size. It returns a [`BoxPatch`]
//! holding only the fields its direction affects.
//!
//! Sizes clamp first: `max(size ± delta, min)`. The moving edge then clamps
//! against the *unclamped* room left above the minimum, `min(delta, size - min)`,
//! so the edge stops exactly where the size floor is reached and the element
//! stays under the grip.
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use understory_resizable::rules;
//!
//! let start = Rect::new(100.0, 100.0, 200.0, 200.0);
//! let patch = rules::top_left(start, Vec2::new(40.0, 0.0), Size::new(70.0, 0.0));
//!
//! assert_eq!(patch.width, Some(70.0));
//! // The left edge advanced by 30, not 40.
//! assert_eq!(patch.left, Some(130.0));
//! ```

use kurbo::{Rect, Size, Vec2};

/// Signature shared by all movement rules.
pub type MoveRule = fn(Rect, Vec2, Size) -> BoxPatch;

/// Sparse geometry update produced by a [`MoveRule`].
///
/// `None` fields are left untouched on the target element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoxPatch {
    /// New left position.
    pub left: Option<f64>,
    /// New top position.
    pub top: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
}

impl BoxPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The box that results from writing the present fields over `rect`.
    pub fn apply_to(&self, rect: Rect) -> Rect {
        let x0 = self.left.unwrap_or(rect.x0);
        let y0 = self.top.unwrap_or(rect.y0);
        let width = self.width.unwrap_or(rect.width());
        let height = self.height.unwrap_or(rect.height());
        Rect::new(x0, y0, x0 + width, y0 + height)
    }

    /// Size of the box that results from writing this patch over `rect`.
    pub fn size_over(&self, rect: Rect) -> Size {
        Size::new(
            self.width.unwrap_or(rect.width()),
            self.height.unwrap_or(rect.height()),
        )
    }
}

fn shrink(size: f64, delta: f64, min: f64) -> f64 {
    (size - delta).max(min)
}

fn advance(origin: f64, size: f64, delta: f64, min: f64) -> f64 {
    origin + delta.min(size - min)
}

/// Top edge.
pub fn top(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        height: Some(shrink(start.height(), delta.y, min.height)),
        top: Some(advance(start.y0, start.height(), delta.y, min.height)),
        ..BoxPatch::default()
    }
}

/// Right edge.
pub fn right(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), -delta.x, min.width)),
        ..BoxPatch::default()
    }
}

/// Bottom edge.
pub fn bottom(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        height: Some(shrink(start.height(), -delta.y, min.height)),
        ..BoxPatch::default()
    }
}

/// Left edge.
pub fn left(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), delta.x, min.width)),
        left: Some(advance(start.x0, start.width(), delta.x, min.width)),
        ..BoxPatch::default()
    }
}

/// Top-left corner.
pub fn top_left(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), delta.x, min.width)),
        height: Some(shrink(start.height(), delta.y, min.height)),
        left: Some(advance(start.x0, start.width(), delta.x, min.width)),
        top: Some(advance(start.y0, start.height(), delta.y, min.height)),
    }
}

/// Top-right corner.
pub fn top_right(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), -delta.x, min.width)),
        height: Some(shrink(start.height(), delta.y, min.height)),
        top: Some(advance(start.y0, start.height(), delta.y, min.height)),
        ..BoxPatch::default()
    }
}

/// Bottom-right corner.
pub fn bottom_right(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), -delta.x, min.width)),
        height: Some(shrink(start.height(), -delta.y, min.height)),
        ..BoxPatch::default()
    }
}

/// Bottom-left corner.
pub fn bottom_left(start: Rect, delta: Vec2, min: Size) -> BoxPatch {
    BoxPatch {
        width: Some(shrink(start.width(), delta.x, min.width)),
        height: Some(shrink(start.height(), -delta.y, min.height)),
        left: Some(advance(start.x0, start.width(), delta.x, min.width)),
        ..BoxPatch::default()
    }
}
