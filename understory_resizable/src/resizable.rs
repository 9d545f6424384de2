// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resize controller: grip ownership, the drag state machine and
//! lifecycle notifications for one target element.
//!
//! ## State machine
//!
//! ```text
//! Idle --pointer_down(grip), enabled--> Dragging
//! Dragging --pointer_move--> Dragging      (applies the grip's movement rule)
//! Dragging --pointer_up--> Idle
//! Dragging --pointer_down(grip)--> Dragging (the old session is replaced)
//! ```
//!
//! At most one [`DragSession`] exists per controller. Move and up events
//! arriving while idle are ignored, so hosts may forward every document
//! pointer event without tracking the drag themselves.
//!
//! ## Teardown
//!
//! [`Resizable::destroy`] is terminal. Afterwards every operation is a no-op:
//! pointer handlers return `false`, chainable calls return `self` untouched,
//! no listener runs and [`Resizable::target`] is `None`.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::classnames::{GRABBED, RESIZABLE, RESIZE_DISABLED, RESIZING, TARGET_MARKERS};
use crate::config::ResizeConfig;
use crate::direction::Direction;
use crate::error::ResizeError;
use crate::event::{EventKind, Listeners, ResizeEvent};
use crate::grip::{Grip, create_grip};
use crate::host::{Host, PointerEvent};
use crate::rules::{BoxPatch, MoveRule};

/// State of one grab-to-release interaction.
#[derive(Copy, Clone, Debug)]
pub struct DragSession {
    direction: Direction,
    start_pointer: Point,
    start_box: Rect,
    rule: MoveRule,
}

impl DragSession {
    /// Direction of the grip that was grabbed.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pointer position at grab time.
    pub fn start_pointer(&self) -> Point {
        self.start_pointer
    }

    /// Target bounds at grab time.
    pub fn start_box(&self) -> Rect {
        self.start_box
    }

    /// Patch for the pointer currently at `position`.
    pub fn patch_at(&self, position: Point, min: Size) -> BoxPatch {
        (self.rule)(self.start_box, position - self.start_pointer, min)
    }
}

/// Drag-resize controller attached to one target element.
pub struct Resizable<H: Host> {
    config: ResizeConfig,
    target: Option<H::Node>,
    original_position: String,
    grips: SmallVec<[Grip<H::Node>; 4]>,
    enabled: bool,
    session: Option<DragSession>,
    listeners: Listeners<H::Event>,
}

impl<H: Host> Resizable<H> {
    /// Make `target` resizable.
    ///
    /// Creates the grips (the four corners, or the single configured
    /// direction) as children of `target`, switches it to absolute
    /// positioning at its current on-screen position when needed, grows it
    /// to the configured minimum size and marks it `resizable`.
    ///
    /// Fails only if the host cannot create a grip element, in which case the
    /// target is left unmodified.
    pub fn attach(
        host: &mut H,
        target: H::Node,
        config: ResizeConfig,
    ) -> Result<Self, ResizeError> {
        let config = config.normalized();
        let directions: &[Direction] = match &config.direction {
            Some(direction) => core::slice::from_ref(direction),
            None => &Direction::CORNERS,
        };

        let mut grips: SmallVec<[Grip<H::Node>; 4]> = SmallVec::new();
        for &direction in directions {
            match create_grip(host, direction, config.grip_size) {
                Ok(grip) => {
                    host.append_child(&target, grip.node());
                    grips.push(grip);
                }
                Err(err) => {
                    for grip in &grips {
                        host.remove_child(&target, grip.node());
                    }
                    return Err(err);
                }
            }
        }

        let original_position = host.style(&target, "position");
        let position = if original_position.is_empty() {
            host.computed_style(&target, "position")
        } else {
            original_position.clone()
        };
        let bounds = host.bounding_rect(&target);
        if position != "absolute" {
            host.set_style(&target, "position", "absolute");
            host.set_style(&target, "top", &px(bounds.y0));
            host.set_style(&target, "left", &px(bounds.x0));
        }
        if bounds.width() < config.min_width {
            host.set_style(&target, "width", &px(config.min_width));
        }
        if bounds.height() < config.min_height {
            host.set_style(&target, "height", &px(config.min_height));
        }
        host.add_class(&target, RESIZABLE);

        log::debug!(
            "attached resizable to {target:?} with {} grip(s), min {}x{}",
            grips.len(),
            config.min_width,
            config.min_height
        );

        Ok(Self {
            config,
            target: Some(target),
            original_position,
            grips,
            enabled: true,
            session: None,
            listeners: Listeners::new(),
        })
    }

    /// Effective (normalized) configuration.
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The target element, or `None` once destroyed.
    pub fn target(&self) -> Option<&H::Node> {
        self.target.as_ref()
    }

    /// The grip for `direction`, if this controller created one.
    pub fn grip(&self, direction: Direction) -> Option<&Grip<H::Node>> {
        self.grips.iter().find(|g| g.direction() == direction)
    }

    /// All grips, in creation order.
    pub fn grips(&self) -> impl Iterator<Item = &Grip<H::Node>> {
        self.grips.iter()
    }

    /// Direction of the grip whose element is `node`.
    pub fn grip_direction(&self, node: &H::Node) -> Option<Direction> {
        self.grips
            .iter()
            .find(|g| g.node() == node)
            .map(Grip::direction)
    }

    /// Whether grabbing a grip starts a drag.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Whether [`destroy`](Self::destroy) has run.
    pub fn is_destroyed(&self) -> bool {
        self.target.is_none()
    }

    /// The active drag, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Register a listener by event name.
    ///
    /// The name is classified with [`EventKind::classify`]. A name matching
    /// no bucket is logged and ignored; use [`try_on`](Self::try_on) to
    /// observe that as an error.
    pub fn on(
        &mut self,
        name: &str,
        listener: impl FnMut(&ResizeEvent<'_, H::Event>) + 'static,
    ) -> &mut Self {
        if let Err(err) = self.try_on(name, listener) {
            log::warn!("{err}, listener ignored");
        }
        self
    }

    /// Register a listener by event name, reporting unknown names.
    pub fn try_on(
        &mut self,
        name: &str,
        listener: impl FnMut(&ResizeEvent<'_, H::Event>) + 'static,
    ) -> Result<&mut Self, ResizeError> {
        if self.is_destroyed() {
            return Err(ResizeError::Destroyed);
        }
        let kind: EventKind = name.parse()?;
        self.listeners.push(kind, Box::new(listener));
        Ok(self)
    }

    /// Called with the pointer-down event when a drag starts.
    pub fn on_start(&mut self, mut listener: impl FnMut(&H::Event) + 'static) -> &mut Self {
        self.push_listener(EventKind::Start, move |event: &ResizeEvent<'_, H::Event>| {
            listener(event.source());
        })
    }

    /// Called with each pointer-move event and the resulting element size.
    pub fn on_resizing(
        &mut self,
        mut listener: impl FnMut(&H::Event, Size) + 'static,
    ) -> &mut Self {
        self.push_listener(EventKind::Resizing, move |event: &ResizeEvent<'_, H::Event>| {
            if let ResizeEvent::Resizing { source, size } = *event {
                listener(source, size);
            }
        })
    }

    /// Called with the pointer-up event and the final element bounds.
    pub fn on_stop(&mut self, mut listener: impl FnMut(&H::Event, Rect) + 'static) -> &mut Self {
        self.push_listener(EventKind::Stop, move |event: &ResizeEvent<'_, H::Event>| {
            if let ResizeEvent::Stop { source, bounds } = *event {
                listener(source, bounds);
            }
        })
    }

    fn push_listener(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&ResizeEvent<'_, H::Event>) + 'static,
    ) -> &mut Self {
        if self.is_destroyed() {
            log::debug!("{kind:?} listener registered after destroy, ignored");
        } else {
            self.listeners.push(kind, Box::new(listener));
        }
        self
    }

    /// Pointer-down on the grip for `direction`.
    ///
    /// Starts a drag and returns `true`, unless the controller is disabled,
    /// destroyed, or has no such grip. An unfinished drag is replaced.
    pub fn pointer_down(&mut self, host: &mut H, direction: Direction, event: &H::Event) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(target) = self.target.as_ref() else {
            return false;
        };
        let Some(grip) = self.grips.iter().find(|g| g.direction() == direction) else {
            return false;
        };

        if let Some(stale) = self.session.take() {
            log::debug!("replacing unfinished {} drag", stale.direction);
            host.remove_class(target, RESIZING);
        }

        let start_box = host.bounding_rect(target);
        host.add_class(target, GRABBED);
        self.session = Some(DragSession {
            direction,
            start_pointer: event.client_position(),
            start_box,
            rule: grip.rule(),
        });
        log::debug!("{direction} drag started at {start_box:?}");

        self.listeners.emit(&ResizeEvent::Start { source: event });
        true
    }

    /// Pointer-down on an arbitrary element; starts a drag if `node` is one
    /// of this controller's grips.
    pub fn pointer_down_on(&mut self, host: &mut H, node: &H::Node, event: &H::Event) -> bool {
        match self.grip_direction(node) {
            Some(direction) => self.pointer_down(host, direction, event),
            None => false,
        }
    }

    /// Document pointer-move.
    ///
    /// During a drag, applies the grip's movement rule to the target, fires
    /// the resizing listeners, prevents the event's default action and
    /// returns `true`. Otherwise does nothing.
    pub fn pointer_move(&mut self, host: &mut H, event: &mut H::Event) -> bool {
        let (Some(target), Some(session)) = (self.target.as_ref(), self.session.as_ref()) else {
            return false;
        };

        let patch = session.patch_at(event.client_position(), self.config.min_size());
        apply_patch(host, target, &patch);
        host.replace_class(target, GRABBED, RESIZING);
        let size = patch.size_over(session.start_box);

        self.listeners.emit(&ResizeEvent::Resizing {
            source: &*event,
            size,
        });
        event.prevent_default();
        true
    }

    /// Document pointer-up. Ends the drag and fires the stop listeners with
    /// the target's final bounds.
    pub fn pointer_up(&mut self, host: &mut H, event: &H::Event) -> bool {
        let Some(target) = self.target.as_ref() else {
            return false;
        };
        let Some(session) = self.session.take() else {
            return false;
        };

        host.remove_class(target, GRABBED);
        host.remove_class(target, RESIZING);
        let bounds = host.bounding_rect(target);
        log::debug!("{} drag stopped at {bounds:?}", session.direction);

        self.listeners.emit(&ResizeEvent::Stop {
            source: event,
            bounds,
        });
        true
    }

    /// Allow drags again and unhide the grips.
    pub fn enable(&mut self, host: &mut H) -> &mut Self {
        let Some(target) = self.target.as_ref() else {
            return self;
        };
        self.enabled = true;
        host.remove_class(target, RESIZE_DISABLED);
        for grip in &self.grips {
            host.set_style(grip.node(), "display", "");
        }
        log::debug!("resizing enabled on {target:?}");
        self
    }

    /// Ignore pointer-down on grips and hide them.
    pub fn disable(&mut self, host: &mut H) -> &mut Self {
        let Some(target) = self.target.as_ref() else {
            return self;
        };
        self.enabled = false;
        host.add_class(target, RESIZE_DISABLED);
        for grip in &self.grips {
            host.set_style(grip.node(), "display", "none");
        }
        log::debug!("resizing disabled on {target:?}");
        self
    }

    /// Make the grips fully opaque.
    pub fn show_grips(&mut self, host: &mut H) -> &mut Self {
        self.set_grip_opacity(host, "1")
    }

    /// Make the grips fully transparent.
    pub fn hide_grips(&mut self, host: &mut H) -> &mut Self {
        self.set_grip_opacity(host, "0")
    }

    fn set_grip_opacity(&mut self, host: &mut H, opacity: &str) -> &mut Self {
        for grip in &self.grips {
            host.set_style(grip.node(), "opacity", opacity);
        }
        self
    }

    /// Tear down: remove the grips, strip marker classes, restore the
    /// target's original inline `position`, drop all listeners and release
    /// the target. Calling it again does nothing.
    pub fn destroy(&mut self, host: &mut H) {
        let Some(target) = self.target.take() else {
            return;
        };

        for grip in self.grips.drain(..) {
            let node = grip.into_node();
            host.set_style(&node, "opacity", "0");
            host.remove_child(&target, &node);
        }
        for class in TARGET_MARKERS {
            host.remove_class(&target, class);
        }
        host.set_style(&target, "position", &self.original_position);

        self.session = None;
        self.enabled = false;
        self.listeners.clear();
        log::debug!("destroyed resizable on {target:?}");
    }
}

impl<H: Host> fmt::Debug for Resizable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resizable")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("original_position", &self.original_position)
            .field("grips", &self.grips)
            .field("enabled", &self.enabled)
            .field("session", &self.session)
            .field("listeners", &self.listeners)
            .finish()
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

fn apply_patch<H: Host>(host: &mut H, target: &H::Node, patch: &BoxPatch) {
    log::trace!("applying {patch:?}");
    for (property, value) in [
        ("width", patch.width),
        ("height", patch.height),
        ("top", patch.top),
        ("left", patch.left),
    ] {
        if let Some(value) = value {
            host.set_style(target, property, &px(value));
        }
    }
}
