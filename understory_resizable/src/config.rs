// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a [`Resizable`](crate::Resizable).

use kurbo::Size;

use crate::direction::Direction;

/// Grip size used when none (or an invalid one) is configured.
pub const DEFAULT_GRIP_SIZE: f64 = 10.0;

/// Options fixed when a controller is attached.
///
/// With the `serde` feature this deserializes from the option-object shape
/// used by browser callers, every field optional:
///
/// ```ignore
/// {"minWidth": 70, "minHeight": 0, "gripSize": 40, "direction": "top-left"}
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ResizeConfig {
    /// Smallest width a drag may produce, in pixels.
    pub min_width: f64,
    /// Smallest height a drag may produce, in pixels.
    pub min_height: f64,
    /// Edge length of a corner grip (and thickness of an edge grip), in pixels.
    pub grip_size: f64,
    /// When set, a single grip in this direction replaces the four corners.
    pub direction: Option<Direction>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            grip_size: DEFAULT_GRIP_SIZE,
            direction: None,
        }
    }
}

impl ResizeConfig {
    /// Set the minimum width.
    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the minimum height.
    #[must_use]
    pub fn with_min_height(mut self, min_height: f64) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the grip size.
    #[must_use]
    pub fn with_grip_size(mut self, grip_size: f64) -> Self {
        self.grip_size = grip_size;
        self
    }

    /// Restrict resizing to a single grip.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Replace invalid values with their defaults.
    ///
    /// Negative or non-finite minimums become `0`; a non-positive or
    /// non-finite grip size becomes [`DEFAULT_GRIP_SIZE`].
    #[must_use]
    pub fn normalized(self) -> Self {
        let min = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            min_width: min(self.min_width),
            min_height: min(self.min_height),
            grip_size: if self.grip_size.is_finite() && self.grip_size > 0.0 {
                self.grip_size
            } else {
                DEFAULT_GRIP_SIZE
            },
            direction: self.direction,
        }
    }

    /// Minimum size as a [`Size`].
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}
