// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser host built on `web_sys`.
//!
//! [`WebHost`] maps the [`Host`] primitives onto DOM calls. Failures reported
//! by the browser (a rejected `appendChild`, an invalid style value) are logged
//! at `warn` and otherwise ignored, matching the fire-and-forget nature of
//! inline style writes.
//!
//! [`WebResizable`] is the ready-to-use handle: it attaches a [`Resizable`]
//! to an element and installs the listeners that drive it:
//!
//! - one `mousedown` listener per grip,
//! - one `mousemove` and one `mouseup` listener on the document, installed
//!   once and kept for the controller's lifetime.
//!
//! ```no_run
//! use understory_resizable::ResizeConfig;
//! use understory_resizable::adapters::web::WebResizable;
//! use wasm_bindgen::JsCast;
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let panel = document
//!     .get_element_by_id("panel")
//!     .unwrap()
//!     .dyn_into::<web_sys::HtmlElement>()
//!     .unwrap();
//!
//! let mut handle = WebResizable::attach(panel, ResizeConfig::default()).unwrap();
//! handle.on_stop(|_, bounds| log::info!("panel is now {bounds:?}"));
//! ```
//!
//! Listeners run while the controller is borrowed. Calling back into the same
//! [`WebResizable`] from inside a listener is refused with a warning, except
//! for [`WebResizable::destroy`] (and dropping the handle), which completes
//! once the current event has been handled.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use kurbo::{Point, Rect, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::ResizeConfig;
use crate::direction::Direction;
use crate::error::ResizeError;
use crate::event::ResizeEvent;
use crate::host::{Host, PointerEvent};
use crate::resizable::Resizable;

type MouseListener = Closure<dyn FnMut(MouseEvent)>;

/// [`Host`] over a browser document.
#[derive(Clone, Debug)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Host creating its grips in `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) -> Option<T> {
    result
        .map_err(|err| log::warn!("{what} failed: {err:?}"))
        .ok()
}

impl Host for WebHost {
    type Node = HtmlElement;
    type Event = MouseEvent;

    fn create_element(&mut self) -> Option<HtmlElement> {
        let element = warn_on_err("createElement", self.document.create_element("div"))?;
        element.dyn_into::<HtmlElement>().ok()
    }

    fn append_child(&mut self, parent: &HtmlElement, child: &HtmlElement) {
        warn_on_err("appendChild", parent.append_child(child));
    }

    fn remove_child(&mut self, parent: &HtmlElement, child: &HtmlElement) {
        warn_on_err("removeChild", parent.remove_child(child));
    }

    fn style(&self, node: &HtmlElement, property: &str) -> String {
        node.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&mut self, node: &HtmlElement, property: &str, value: &str) {
        let style = node.style();
        if value.is_empty() {
            warn_on_err("removeProperty", style.remove_property(property));
        } else {
            warn_on_err("setProperty", style.set_property(property, value));
        }
    }

    fn computed_style(&self, node: &HtmlElement, property: &str) -> String {
        self.document
            .default_view()
            .and_then(|window| window.get_computed_style(node).ok().flatten())
            .and_then(|style| style.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn bounding_rect(&self, node: &HtmlElement) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn add_class(&mut self, node: &HtmlElement, class: &str) {
        warn_on_err("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &HtmlElement, class: &str) {
        warn_on_err("classList.remove", node.class_list().remove_1(class));
    }

    fn has_class(&self, node: &HtmlElement, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn replace_class(&mut self, node: &HtmlElement, old: &str, new: &str) -> bool {
        warn_on_err("classList.replace", node.class_list().replace(old, new)).unwrap_or(false)
    }
}

impl PointerEvent for MouseEvent {
    fn client_position(&self) -> Point {
        Point::new(f64::from(self.client_x()), f64::from(self.client_y()))
    }

    fn prevent_default(&mut self) {
        let event: &web_sys::Event = self;
        event.prevent_default();
    }
}

struct Shared {
    host: WebHost,
    resizable: Resizable<WebHost>,
}

struct Controller {
    state: RefCell<Shared>,
    /// Set when `destroy` ran while an event was being dispatched.
    destroy_pending: Cell<bool>,
}

impl Controller {
    fn destroy(&self) {
        match self.state.try_borrow_mut() {
            Ok(mut shared) => shared.destroy(),
            Err(_) => {
                log::debug!("destroy requested during dispatch, deferred");
                self.destroy_pending.set(true);
            }
        }
    }
}

impl Shared {
    fn destroy(&mut self) {
        let Self { host, resizable } = self;
        resizable.destroy(host);
    }
}

/// A [`Resizable`] wired to browser mouse events.
///
/// Dropping the handle destroys the controller.
pub struct WebResizable {
    controller: Rc<Controller>,
    document: Document,
    grip_listeners: Vec<(HtmlElement, MouseListener)>,
    document_listeners: Vec<(&'static str, MouseListener)>,
}

impl WebResizable {
    /// Make `element` resizable in its owner document.
    pub fn attach(element: HtmlElement, config: ResizeConfig) -> Result<Self, ResizeError> {
        let document = element.owner_document().ok_or(ResizeError::NoDocument)?;
        let mut host = WebHost::new(document.clone());
        let resizable = Resizable::attach(&mut host, element, config)?;

        let grips: Vec<(HtmlElement, Direction)> = resizable
            .grips()
            .map(|grip| (grip.node().clone(), grip.direction()))
            .collect();
        let controller = Rc::new(Controller {
            state: RefCell::new(Shared { host, resizable }),
            destroy_pending: Cell::new(false),
        });

        let mut grip_listeners = Vec::with_capacity(grips.len());
        for (node, direction) in grips {
            let on_down = listener(&controller, move |shared, event| {
                let Shared { host, resizable } = shared;
                resizable.pointer_down(host, direction, &event);
            });
            add_listener(&node, "mousedown", &on_down);
            grip_listeners.push((node, on_down));
        }

        let on_move = listener(&controller, |shared, mut event| {
            let Shared { host, resizable } = shared;
            resizable.pointer_move(host, &mut event);
        });
        let on_up = listener(&controller, |shared, event| {
            let Shared { host, resizable } = shared;
            resizable.pointer_up(host, &event);
        });
        add_listener(&document, "mousemove", &on_move);
        add_listener(&document, "mouseup", &on_up);

        Ok(Self {
            controller,
            document,
            grip_listeners,
            document_listeners: alloc::vec![("mousemove", on_move), ("mouseup", on_up)],
        })
    }

    /// The target element, or `None` once destroyed.
    pub fn element(&self) -> Option<HtmlElement> {
        self.with(|shared| shared.resizable.target().cloned()).flatten()
    }

    /// Effective configuration.
    pub fn config(&self) -> Option<ResizeConfig> {
        self.with(|shared| *shared.resizable.config())
    }

    /// Whether grabbing a grip starts a drag.
    pub fn is_enabled(&self) -> bool {
        self.with(|shared| shared.resizable.is_enabled()).unwrap_or(false)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.with(|shared| shared.resizable.is_dragging()).unwrap_or(false)
    }

    /// See [`Resizable::on`].
    pub fn on(
        &mut self,
        name: &str,
        listener: impl FnMut(&ResizeEvent<'_, MouseEvent>) + 'static,
    ) -> &mut Self {
        self.with(|shared| {
            shared.resizable.on(name, listener);
        });
        self
    }

    /// See [`Resizable::on_start`].
    pub fn on_start(&mut self, listener: impl FnMut(&MouseEvent) + 'static) -> &mut Self {
        self.with(|shared| {
            shared.resizable.on_start(listener);
        });
        self
    }

    /// See [`Resizable::on_resizing`].
    pub fn on_resizing(&mut self, listener: impl FnMut(&MouseEvent, Size) + 'static) -> &mut Self {
        self.with(|shared| {
            shared.resizable.on_resizing(listener);
        });
        self
    }

    /// See [`Resizable::on_stop`].
    pub fn on_stop(&mut self, listener: impl FnMut(&MouseEvent, Rect) + 'static) -> &mut Self {
        self.with(|shared| {
            shared.resizable.on_stop(listener);
        });
        self
    }

    /// See [`Resizable::enable`].
    pub fn enable(&mut self) -> &mut Self {
        self.with(|Shared { host, resizable }| {
            resizable.enable(host);
        });
        self
    }

    /// See [`Resizable::disable`].
    pub fn disable(&mut self) -> &mut Self {
        self.with(|Shared { host, resizable }| {
            resizable.disable(host);
        });
        self
    }

    /// See [`Resizable::show_grips`].
    pub fn show_grips(&mut self) -> &mut Self {
        self.with(|Shared { host, resizable }| {
            resizable.show_grips(host);
        });
        self
    }

    /// See [`Resizable::hide_grips`].
    pub fn hide_grips(&mut self) -> &mut Self {
        self.with(|Shared { host, resizable }| {
            resizable.hide_grips(host);
        });
        self
    }

    /// Remove every installed listener, then tear the controller down.
    ///
    /// Called from inside a listener, the teardown of the controller runs
    /// right after the event being dispatched has been handled.
    pub fn destroy(&mut self) {
        for (node, listener) in self.grip_listeners.drain(..) {
            remove_listener(&node, "mousedown", &listener);
        }
        for (kind, listener) in self.document_listeners.drain(..) {
            remove_listener(&self.document, kind, &listener);
        }
        self.controller.destroy();
    }

    fn with<R>(&self, f: impl FnOnce(&mut Shared) -> R) -> Option<R> {
        match self.controller.state.try_borrow_mut() {
            Ok(mut shared) => Some(f(&mut shared)),
            Err(_) => {
                log::warn!("resizable is busy dispatching an event, call ignored");
                None
            }
        }
    }
}

impl Drop for WebResizable {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for WebResizable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("WebResizable");
        match self.controller.state.try_borrow() {
            Ok(shared) => s.field("resizable", &shared.resizable),
            Err(_) => s.field("resizable", &"<busy>"),
        };
        s.field("grip_listeners", &self.grip_listeners.len())
            .field("document_listeners", &self.document_listeners.len())
            .finish_non_exhaustive()
    }
}

fn listener(
    controller: &Rc<Controller>,
    mut handle: impl FnMut(&mut Shared, MouseEvent) + 'static,
) -> MouseListener {
    let controller = Rc::clone(controller);
    Closure::new(move |event: MouseEvent| match controller.state.try_borrow_mut() {
        Ok(mut shared) => {
            handle(&mut shared, event);
            if controller.destroy_pending.take() {
                shared.destroy();
            }
        }
        Err(_) => log::warn!("{} dropped while resizable is busy", event.type_()),
    })
}

fn add_listener(target: &web_sys::EventTarget, kind: &str, listener: &MouseListener) {
    warn_on_err(
        "addEventListener",
        target.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()),
    );
}

fn remove_listener(target: &web_sys::EventTarget, kind: &str, listener: &MouseListener) {
    warn_on_err(
        "removeEventListener",
        target.remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()),
    );
}
