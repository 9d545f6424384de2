// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document capabilities the resize engine consumes.
//!
//! The engine never touches a DOM directly. A [`Host`] provides element
//! creation, inline and computed style access, class lists and geometry
//! queries; the host is also responsible for routing pointer events into
//! [`Resizable`](crate::Resizable):
//!
//! - pointer-down on a grip node → [`Resizable::pointer_down_on`](crate::Resizable::pointer_down_on)
//! - every document pointer-move → [`Resizable::pointer_move`](crate::Resizable::pointer_move)
//! - every document pointer-up → [`Resizable::pointer_up`](crate::Resizable::pointer_up)
//!
//! Move and up are forwarded unconditionally; the controller ignores them
//! unless a drag is in progress.
//!
//! See [`HeadlessDom`](crate::headless::HeadlessDom) for an in-memory host.

use alloc::string::String;
use core::fmt::Debug;

use kurbo::{Point, Rect};

/// A pointer event as seen by the engine.
pub trait PointerEvent {
    /// Pointer position in viewport coordinates.
    fn client_position(&self) -> Point;

    /// Suppress the host's default handling (text selection and the like).
    fn prevent_default(&mut self);
}

/// Element and style primitives supplied by the embedding document.
///
/// Style property names are CSS names (`"position"`, `"border-radius"`).
/// Geometry is in viewport pixels.
pub trait Host {
    /// Handle to an element.
    type Node: Clone + PartialEq + Debug;
    /// Pointer event type delivered by this host.
    type Event: PointerEvent;

    /// Create a detached element, or `None` if the host cannot.
    fn create_element(&mut self) -> Option<Self::Node>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Detach `child` from `parent`.
    fn remove_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Inline style value, empty when unset.
    fn style(&self, node: &Self::Node, property: &str) -> String;

    /// Set an inline style value. An empty value removes the declaration.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Computed (effective) style value.
    fn computed_style(&self, node: &Self::Node, property: &str) -> String;

    /// The element's on-screen box.
    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    /// Add a class.
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Remove a class, if present.
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Whether the element carries a class.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Replace `old` with `new`. Does nothing and returns `false` when `old`
    /// is absent.
    fn replace_class(&mut self, node: &Self::Node, old: &str, new: &str) -> bool;
}
