// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grip factory: positioned, styled handle elements bound to a movement rule.

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

use crate::classnames::RESIZE_GRIP;
use crate::direction::{Direction, Edges};
use crate::error::ResizeError;
use crate::host::Host;
use crate::rules::MoveRule;

/// A grip owned by a [`Resizable`](crate::Resizable).
#[derive(Clone, Debug)]
pub struct Grip<N> {
    direction: Direction,
    node: N,
    rule: MoveRule,
}

impl<N> Grip<N> {
    /// Direction this grip resizes towards.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The grip's element.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Movement rule bound at creation.
    pub fn rule(&self) -> MoveRule {
        self.rule
    }

    pub(crate) fn into_node(self) -> N {
        self.node
    }
}

/// Inline declarations and classes for one grip, as plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct GripStyle {
    /// `(property, value)` pairs in application order.
    pub declarations: SmallVec<[(&'static str, String); 8]>,
    /// Classes: [`RESIZE_GRIP`] then the direction's own class.
    pub classes: [&'static str; 2],
}

impl GripStyle {
    /// Compute the declarations for a grip of `size` pixels.
    ///
    /// Edge grips span the full length of their edge; corner grips are
    /// `size` squares. Both straddle the edge by `size / 2`.
    pub fn new(direction: Direction, size: f64) -> Self {
        let edges = direction.edges();
        let size_px = format!("{size}px");
        let offset_px = format!("{}px", -size / 2.0);
        let corner = direction.is_corner();
        let horizontal_edge = !corner && edges.intersects(Edges::TOP | Edges::BOTTOM);
        let vertical_edge = !corner && edges.intersects(Edges::LEFT | Edges::RIGHT);

        let span = |full: bool| {
            if full {
                String::from("100%")
            } else {
                size_px.clone()
            }
        };
        let (width, height) = (span(horizontal_edge), span(vertical_edge));

        let mut declarations = SmallVec::new();
        declarations.push(("position", String::from("absolute")));
        declarations.push(("width", width));
        declarations.push(("height", height));
        declarations.push(("cursor", String::from(direction.cursor())));
        declarations.push(("border-radius", size_px));
        declarations.push(("opacity", String::from("0")));
        for (edge, property) in [
            (Edges::TOP, "top"),
            (Edges::RIGHT, "right"),
            (Edges::BOTTOM, "bottom"),
            (Edges::LEFT, "left"),
        ] {
            if edges.contains(edge) {
                declarations.push((property, offset_px.clone()));
            }
        }

        Self {
            declarations,
            classes: [RESIZE_GRIP, direction.grip_class()],
        }
    }
}

/// Create a grip element for `direction`. The element is not attached.
pub fn create_grip<H: Host>(
    host: &mut H,
    direction: Direction,
    size: f64,
) -> Result<Grip<H::Node>, ResizeError> {
    let node = host.create_element().ok_or(ResizeError::ElementCreation)?;
    let style = GripStyle::new(direction, size);
    for (property, value) in &style.declarations {
        host.set_style(&node, property, value);
    }
    for class in style.classes {
        host.add_class(&node, class);
    }
    Ok(Grip {
        direction,
        node,
        rule: direction.movement_rule(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDom;

    fn value<'a>(style: &'a GripStyle, property: &str) -> Option<&'a str> {
        style
            .declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn corner_is_a_square_offset_on_both_axes() {
        let style = GripStyle::new(Direction::TopRight, 10.0);
        assert_eq!(value(&style, "width"), Some("10px"));
        assert_eq!(value(&style, "height"), Some("10px"));
        assert_eq!(value(&style, "top"), Some("-5px"));
        assert_eq!(value(&style, "right"), Some("-5px"));
        assert_eq!(value(&style, "left"), None);
        assert_eq!(value(&style, "cursor"), Some("ne-resize"));
        assert_eq!(value(&style, "opacity"), Some("0"));
        assert_eq!(style.classes, ["resize-grip", "top-right-grip"]);
    }

    #[test]
    fn edge_spans_the_perpendicular_axis() {
        let top = GripStyle::new(Direction::Top, 10.0);
        assert_eq!(value(&top, "width"), Some("100%"));
        assert_eq!(value(&top, "height"), Some("10px"));
        assert_eq!(value(&top, "top"), Some("-5px"));

        let left = GripStyle::new(Direction::Left, 8.0);
        assert_eq!(value(&left, "width"), Some("8px"));
        assert_eq!(value(&left, "height"), Some("100%"));
        assert_eq!(value(&left, "left"), Some("-4px"));
        assert_eq!(value(&left, "cursor"), Some("w-resize"));
    }

    #[test]
    fn create_grip_styles_a_detached_element() {
        let mut dom = HeadlessDom::new();
        let grip = create_grip(&mut dom, Direction::BottomLeft, 40.0).unwrap();
        let node = *grip.node();

        assert_eq!(grip.direction(), Direction::BottomLeft);
        assert!(dom.parent(node).is_none());
        assert!(dom.has_class(&node, RESIZE_GRIP));
        assert!(dom.has_class(&node, "bottom-left-grip"));
        assert_eq!(dom.style(&node, "border-radius"), "40px");
        assert_eq!(dom.style(&node, "bottom"), "-20px");
        assert_eq!(dom.style(&node, "left"), "-20px");
    }
}
