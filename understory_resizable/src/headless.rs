// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Host`] for tests, servers and non-browser front ends.
//!
//! [`HeadlessDom`] keeps just enough of a document to drive the engine:
//! an arena of elements with a parent/children relation, inline and computed
//! styles, class lists, and a static layout box per element.
//!
//! ## Geometry
//!
//! [`Host::bounding_rect`] is resolved from styles, not from a layout engine:
//!
//! - An element whose effective `position` is `absolute` is placed by its
//!   inline `left`/`right`/`top`/`bottom` against its parent's resolved box
//!   (a root element is placed against the origin). `width`/`height` accept
//!   `px` or `%` of the parent's size.
//! - Any other element keeps its layout origin; inline `px` sizes override
//!   the layout size.
//!
//! ```
//! use kurbo::Rect;
//! use understory_resizable::headless::{HeadlessDom, HeadlessPointer};
//! use understory_resizable::{Direction, ResizeConfig, Resizable};
//! use understory_resizable::host::Host;
//!
//! let mut dom = HeadlessDom::new();
//! let target = dom.insert(Rect::new(100.0, 100.0, 200.0, 200.0));
//! let mut rsz = Resizable::attach(&mut dom, target, ResizeConfig::default()).unwrap();
//!
//! rsz.pointer_down(&mut dom, Direction::BottomRight, &HeadlessPointer::new(0.0, 0.0));
//! rsz.pointer_move(&mut dom, &mut HeadlessPointer::new(50.0, 50.0));
//! rsz.pointer_up(&mut dom, &HeadlessPointer::new(50.0, 50.0));
//!
//! assert_eq!(dom.bounding_rect(&target), Rect::new(100.0, 100.0, 250.0, 250.0));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::host::{Host, PointerEvent};

/// Handle to an element of a [`HeadlessDom`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct Element {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    inline: HashMap<String, String>,
    computed: HashMap<String, String>,
    classes: Vec<String>,
    layout: Rect,
}

/// In-memory document.
#[derive(Clone, Debug, Default)]
pub struct HeadlessDom {
    elements: Vec<Element>,
}

impl HeadlessDom {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root element laid out at `layout`.
    pub fn insert(&mut self, layout: Rect) -> ElementId {
        let id = self.push(Element {
            layout,
            ..Element::default()
        });
        self.elements[id.idx()]
            .computed
            .insert("position".to_string(), "static".to_string());
        id
    }

    fn push(&mut self, element: Element) -> ElementId {
        let idx = u32::try_from(self.elements.len()).unwrap_or(u32::MAX);
        self.elements.push(element);
        ElementId(idx)
    }

    fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.idx()]
    }

    fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.idx()]
    }

    /// Parent of an element, if attached.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).parent
    }

    /// Children of an element, in insertion order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.get(id).children
    }

    /// Classes of an element, in insertion order.
    pub fn classes(&self, id: ElementId) -> &[String] {
        &self.get(id).classes
    }

    /// Number of attached elements under `root` (inclusive) carrying `class`.
    pub fn count_with_class(&self, root: ElementId, class: &str) -> usize {
        let own = usize::from(self.get(root).classes.iter().any(|c| c == class));
        own + self
            .get(root)
            .children
            .iter()
            .map(|&child| self.count_with_class(child, class))
            .sum::<usize>()
    }

    /// Override a computed style value, as a stylesheet would.
    pub fn set_computed_style(&mut self, id: ElementId, property: &str, value: &str) {
        self.get_mut(id)
            .computed
            .insert(property.to_string(), value.to_string());
    }

    /// Change the static layout box of an element.
    pub fn set_layout(&mut self, id: ElementId, layout: Rect) {
        self.get_mut(id).layout = layout;
    }

    fn inline(&self, id: ElementId, property: &str) -> Option<&str> {
        self.get(id).inline.get(property).map(String::as_str)
    }

    fn effective_position(&self, id: ElementId) -> &str {
        self.inline(id, "position")
            .or_else(|| self.get(id).computed.get("position").map(String::as_str))
            .unwrap_or("static")
    }

    fn resolve(&self, id: ElementId) -> Rect {
        let el = self.get(id);
        let container = match el.parent {
            Some(parent) => self.resolve(parent),
            None => Rect::ZERO,
        };
        let length = |property: &str, basis: f64| {
            self.inline(id, property)
                .and_then(|value| parse_length(value, basis))
        };
        let width = length("width", container.width()).unwrap_or(el.layout.width());
        let height = length("height", container.height()).unwrap_or(el.layout.height());

        if self.effective_position(id) != "absolute" {
            return Rect::from_origin_size(el.layout.origin(), (width, height));
        }

        let x0 = match (length("left", 0.0), length("right", 0.0)) {
            (Some(left), _) => container.x0 + left,
            (None, Some(right)) => container.x1 - right - width,
            (None, None) => el.layout.x0,
        };
        let y0 = match (length("top", 0.0), length("bottom", 0.0)) {
            (Some(top), _) => container.y0 + top,
            (None, Some(bottom)) => container.y1 - bottom - height,
            (None, None) => el.layout.y0,
        };
        Rect::new(x0, y0, x0 + width, y0 + height)
    }
}

fn parse_length(value: &str, basis: f64) -> Option<f64> {
    let value = value.trim();
    if let Some(px) = value.strip_suffix("px") {
        px.trim().parse().ok()
    } else if let Some(pct) = value.strip_suffix('%') {
        pct.trim().parse::<f64>().ok().map(|p| basis * p / 100.0)
    } else {
        None
    }
}

impl Host for HeadlessDom {
    type Node = ElementId;
    type Event = HeadlessPointer;

    fn create_element(&mut self) -> Option<ElementId> {
        Some(self.push(Element::default()))
    }

    fn append_child(&mut self, parent: &ElementId, child: &ElementId) {
        if let Some(old) = self.get(*child).parent {
            self.get_mut(old).children.retain(|c| c != child);
        }
        self.get_mut(*child).parent = Some(*parent);
        self.get_mut(*parent).children.push(*child);
    }

    fn remove_child(&mut self, parent: &ElementId, child: &ElementId) {
        if self.get(*child).parent == Some(*parent) {
            self.get_mut(*parent).children.retain(|c| c != child);
            self.get_mut(*child).parent = None;
        }
    }

    fn style(&self, node: &ElementId, property: &str) -> String {
        self.inline(*node, property).unwrap_or_default().to_string()
    }

    fn set_style(&mut self, node: &ElementId, property: &str, value: &str) {
        let inline = &mut self.get_mut(*node).inline;
        if value.is_empty() {
            inline.remove(property);
        } else {
            inline.insert(property.to_string(), value.to_string());
        }
    }

    fn computed_style(&self, node: &ElementId, property: &str) -> String {
        self.inline(*node, property)
            .or_else(|| self.get(*node).computed.get(property).map(String::as_str))
            .unwrap_or_default()
            .to_string()
    }

    fn bounding_rect(&self, node: &ElementId) -> Rect {
        self.resolve(*node)
    }

    fn add_class(&mut self, node: &ElementId, class: &str) {
        let classes = &mut self.get_mut(*node).classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &ElementId, class: &str) {
        self.get_mut(*node).classes.retain(|c| c != class);
    }

    fn has_class(&self, node: &ElementId, class: &str) -> bool {
        self.get(*node).classes.iter().any(|c| c == class)
    }

    fn replace_class(&mut self, node: &ElementId, old: &str, new: &str) -> bool {
        let classes = &mut self.get_mut(*node).classes;
        let Some(pos) = classes.iter().position(|c| c == old) else {
            return false;
        };
        if classes.iter().any(|c| c == new) {
            classes.remove(pos);
        } else {
            classes[pos] = new.to_string();
        }
        true
    }
}

/// A synthetic pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HeadlessPointer {
    /// Viewport position.
    pub position: Point,
    /// Set once a handler called [`PointerEvent::prevent_default`].
    pub default_prevented: bool,
}

impl HeadlessPointer {
    /// Pointer event at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            default_prevented: false,
        }
    }
}

impl PointerEvent for HeadlessPointer {
    fn client_position(&self) -> Point {
        self.position
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_elements_keep_layout_origin() {
        let mut dom = HeadlessDom::new();
        let el = dom.insert(Rect::new(20.0, 30.0, 120.0, 130.0));
        assert_eq!(dom.bounding_rect(&el), Rect::new(20.0, 30.0, 120.0, 130.0));

        dom.set_style(&el, "width", "150px");
        assert_eq!(dom.bounding_rect(&el), Rect::new(20.0, 30.0, 170.0, 130.0));
        assert_eq!(dom.computed_style(&el, "position"), "static");
    }

    #[test]
    fn absolute_children_resolve_against_parent() {
        let mut dom = HeadlessDom::new();
        let parent = dom.insert(Rect::new(100.0, 100.0, 200.0, 200.0));
        let child = dom.create_element().unwrap();
        dom.append_child(&parent, &child);
        for (p, v) in [
            ("position", "absolute"),
            ("width", "10px"),
            ("height", "100%"),
            ("right", "-5px"),
            ("top", "0px"),
        ] {
            dom.set_style(&child, p, v);
        }
        assert_eq!(dom.bounding_rect(&child), Rect::new(195.0, 100.0, 205.0, 200.0));
        assert_eq!(dom.children(parent), [child]);

        dom.remove_child(&parent, &child);
        assert!(dom.children(parent).is_empty());
        assert!(dom.parent(child).is_none());
    }

    #[test]
    fn class_list_semantics() {
        let mut dom = HeadlessDom::new();
        let el = dom.insert(Rect::ZERO);
        dom.add_class(&el, "grabbed");
        dom.add_class(&el, "grabbed");
        assert_eq!(dom.classes(el).len(), 1);

        assert!(!dom.replace_class(&el, "missing", "resizing"));
        assert!(!dom.has_class(&el, "resizing"));
        assert!(dom.replace_class(&el, "grabbed", "resizing"));
        assert_eq!(dom.classes(el), ["resizing"]);
        assert_eq!(dom.count_with_class(el, "resizing"), 1);
    }

    #[test]
    fn empty_style_value_clears() {
        let mut dom = HeadlessDom::new();
        let el = dom.insert(Rect::ZERO);
        dom.set_style(&el, "position", "absolute");
        dom.set_style(&el, "position", "");
        assert_eq!(dom.style(&el, "position"), "");
        assert_eq!(dom.computed_style(&el, "position"), "static");
    }

    #[test]
    fn parse_length_units() {
        assert_eq!(parse_length("12px", 0.0), Some(12.0));
        assert_eq!(parse_length("-5px", 0.0), Some(-5.0));
        assert_eq!(parse_length("50%", 80.0), Some(40.0));
        assert_eq!(parse_length("auto", 80.0), None);
    }
}
