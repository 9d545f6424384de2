// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser wiring: real elements, dispatched mouse events, teardown.
//!
//! Run with `wasm-pack test --headless --firefox -- --features web`.

#![cfg(all(target_arch = "wasm32", feature = "web"))]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use understory_resizable::adapters::web::WebResizable;
use understory_resizable::{EventKind, ResizeConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// A 100x100 absolutely positioned panel at (100, 100), attached to the body.
fn panel(document: &Document) -> HtmlElement {
    let panel: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    let style = panel.style();
    for (property, value) in [
        ("position", "absolute"),
        ("margin", "0"),
        ("left", "100px"),
        ("top", "100px"),
        ("width", "100px"),
        ("height", "100px"),
    ] {
        style.set_property(property, value).unwrap();
    }
    document.body().unwrap().append_child(&panel).unwrap();
    panel
}

fn grip(panel: &HtmlElement, class: &str) -> Element {
    panel.query_selector(&format!(".{class}")).unwrap().unwrap()
}

fn mouse(target: &EventTarget, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn drag(document: &Document, grip: &Element, from: (i32, i32), to: (i32, i32)) {
    mouse(grip, "mousedown", from.0, from.1);
    mouse(document, "mousemove", to.0, to.1);
    mouse(document, "mouseup", to.0, to.1);
}

fn inline(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

#[wasm_bindgen_test]
fn dispatched_drags_resize_the_panel() {
    let document = document();
    let panel = panel(&document);
    let mut handle = WebResizable::attach(panel.clone(), ResizeConfig::default()).unwrap();
    assert_eq!(panel.child_element_count(), 4);
    assert!(panel.class_list().contains("resizable"));

    let kinds: Rc<RefCell<Vec<EventKind>>> = Rc::default();
    let stops: Rc<RefCell<Vec<Rect>>> = Rc::default();
    for name in ["resizeStart", "resizing", "resizeStop"] {
        let kinds = kinds.clone();
        handle.on(name, move |event| kinds.borrow_mut().push(event.kind()));
    }
    {
        let stops = stops.clone();
        handle.on_stop(move |_, bounds| stops.borrow_mut().push(bounds));
    }

    drag(&document, &grip(&panel, "bottom-right-grip"), (200, 200), (250, 230));
    assert_eq!(inline(&panel, "width"), "150px");
    assert_eq!(inline(&panel, "height"), "130px");
    assert_eq!(
        *kinds.borrow(),
        [EventKind::Start, EventKind::Resizing, EventKind::Stop]
    );

    drag(&document, &grip(&panel, "top-left-grip"), (100, 100), (80, 70));
    assert_eq!(inline(&panel, "left"), "80px");
    assert_eq!(inline(&panel, "top"), "70px");
    assert_eq!(inline(&panel, "width"), "170px");
    assert_eq!(inline(&panel, "height"), "160px");
    assert_eq!(
        *stops.borrow(),
        [
            Rect::new(100.0, 100.0, 250.0, 230.0),
            Rect::new(80.0, 70.0, 250.0, 230.0),
        ]
    );
    assert!(!panel.class_list().contains("grabbed"));
    assert!(!panel.class_list().contains("resizing"));
    assert!(!handle.is_dragging());

    handle.destroy();
    panel.remove();
}

#[wasm_bindgen_test]
fn destroyed_handles_ignore_events() {
    let document = document();
    let panel = panel(&document);
    let mut handle = WebResizable::attach(panel.clone(), ResizeConfig::default()).unwrap();
    let corner = grip(&panel, "bottom-right-grip");

    handle.destroy();
    assert!(handle.element().is_none());
    assert_eq!(panel.child_element_count(), 0);
    assert!(!panel.class_list().contains("resizable"));
    assert_eq!(inline(&panel, "position"), "absolute");

    drag(&document, &corner, (200, 200), (260, 260));
    assert_eq!(inline(&panel, "width"), "100px");
    assert_eq!(inline(&panel, "height"), "100px");

    // A second teardown is harmless.
    handle.destroy();
    panel.remove();
}

#[wasm_bindgen_test]
fn dropping_the_handle_from_a_listener_completes_teardown() {
    let document = document();
    let panel = panel(&document);
    let handle = WebResizable::attach(panel.clone(), ResizeConfig::default()).unwrap();
    let slot: Rc<RefCell<Option<WebResizable>>> = Rc::new(RefCell::new(Some(handle)));
    {
        let release = slot.clone();
        slot.borrow_mut()
            .as_mut()
            .unwrap()
            .on_stop(move |_, _| drop(release.borrow_mut().take()));
    }

    let corner = grip(&panel, "bottom-right-grip");
    drag(&document, &corner, (200, 200), (220, 220));
    assert!(slot.borrow().is_none());
    assert_eq!(inline(&panel, "width"), "120px");

    assert_eq!(panel.child_element_count(), 0);
    assert!(!panel.class_list().contains("resizable"));
    assert_eq!(inline(&panel, "position"), "absolute");

    drag(&document, &corner, (220, 220), (300, 300));
    assert_eq!(inline(&panel, "width"), "120px");
    panel.remove();
}
