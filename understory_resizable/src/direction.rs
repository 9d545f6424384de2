// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grip directions and the element edges each one touches.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ResizeError;
use crate::rules::{self, MoveRule};

bitflags::bitflags! {
    /// Edges of the target element a grip sits on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge.
        const TOP    = 0b0001;
        /// Right edge.
        const RIGHT  = 0b0010;
        /// Bottom edge.
        const BOTTOM = 0b0100;
        /// Left edge.
        const LEFT   = 0b1000;
    }
}

/// One of the eight compass-style resize directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Top edge, resizes height and moves the top.
    Top,
    /// Right edge, resizes width.
    Right,
    /// Bottom edge, resizes height.
    Bottom,
    /// Left edge, resizes width and moves the left.
    Left,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
}

impl Direction {
    /// Every direction, edges first.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// The four corners, in the order grips are created when no single
    /// direction is configured.
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Kebab-case name, e.g. `"top-left"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// CSS cursor shown over a grip in this direction.
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::Top => "n-resize",
            Self::Right => "e-resize",
            Self::Bottom => "s-resize",
            Self::Left => "w-resize",
            Self::TopLeft => "nw-resize",
            Self::TopRight => "ne-resize",
            Self::BottomRight => "se-resize",
            Self::BottomLeft => "sw-resize",
        }
    }

    /// Class name identifying which grip an element is, e.g. `"top-left-grip"`.
    pub const fn grip_class(self) -> &'static str {
        match self {
            Self::Top => "top-grip",
            Self::Right => "right-grip",
            Self::Bottom => "bottom-grip",
            Self::Left => "left-grip",
            Self::TopLeft => "top-left-grip",
            Self::TopRight => "top-right-grip",
            Self::BottomRight => "bottom-right-grip",
            Self::BottomLeft => "bottom-left-grip",
        }
    }

    /// Edges of the target this direction touches.
    pub const fn edges(self) -> Edges {
        match self {
            Self::Top => Edges::TOP,
            Self::Right => Edges::RIGHT,
            Self::Bottom => Edges::BOTTOM,
            Self::Left => Edges::LEFT,
            Self::TopLeft => Edges::TOP.union(Edges::LEFT),
            Self::TopRight => Edges::TOP.union(Edges::RIGHT),
            Self::BottomRight => Edges::BOTTOM.union(Edges::RIGHT),
            Self::BottomLeft => Edges::BOTTOM.union(Edges::LEFT),
        }
    }

    /// Whether this is one of the four corners.
    pub const fn is_corner(self) -> bool {
        self.edges().bits().count_ones() == 2
    }

    /// The movement rule bound to grips in this direction.
    pub fn movement_rule(self) -> MoveRule {
        match self {
            Self::Top => rules::top,
            Self::Right => rules::right,
            Self::Bottom => rules::bottom,
            Self::Left => rules::left,
            Self::TopLeft => rules::top_left,
            Self::TopRight => rules::top_right,
            Self::BottomRight => rules::bottom_right,
            Self::BottomLeft => rules::bottom_left,
        }
    }

    /// The camelCase spelling used by option objects, e.g. `"topLeft"`.
    const fn camel_name(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomRight => "bottomRight",
            Self::BottomLeft => "bottomLeft",
            edge => edge.name(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ResizeError;

    /// Accepts kebab-case (`"top-left"`) and camelCase (`"topLeft"`) names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s || d.camel_name() == s)
            .ok_or_else(|| ResizeError::UnknownDirection(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <alloc::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
