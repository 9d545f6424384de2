// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_resizable --heading-base-level=0

//! Understory Resizable: a headless drag-resize interaction engine.
//!
//! Attach a [`Resizable`] to an element and it grows handles ("grips") at the
//! element's corners, or along a single configured edge or corner. Dragging
//! a grip resizes the element under per-direction movement rules, clamped to
//! a minimum size, and notifies listeners at start, on every move, and at
//! release.
//!
//! The engine does not own a document. Everything it needs from one
//! (creating grip elements, writing inline styles, class lists, bounding
//! boxes) goes through the [`Host`] trait, so the same controller drives a
//! browser DOM (the `web` feature), a native widget tree, or the in-memory
//! [`HeadlessDom`](headless::HeadlessDom) used in tests.
//!
//! ## Pieces
//!
//! - [`rules`]: eight pure movement rules, `(start box, pointer delta, min size) → BoxPatch`.
//! - [`grip`]: the grip factory. Styles and classes per [`Direction`].
//! - [`Resizable`]: owns the grips, runs the `Idle → Dragging → Idle` state
//!   machine and dispatches [`ResizeEvent`]s.
//! - [`host`]: the document contract, [`Host`] and [`PointerEvent`].
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_resizable::headless::{HeadlessDom, HeadlessPointer};
//! use understory_resizable::host::Host;
//! use understory_resizable::{Direction, EventKind, ResizeConfig, Resizable};
//!
//! let mut dom = HeadlessDom::new();
//! let panel = dom.insert(Rect::new(100.0, 100.0, 200.0, 200.0));
//!
//! let config = ResizeConfig::default().with_min_width(70.0);
//! let mut rsz = Resizable::attach(&mut dom, panel, config).unwrap();
//! rsz.on("resizeStop", |event| assert_eq!(event.kind(), EventKind::Stop))
//!     .on_resizing(|_, size| assert!(size.width >= 70.0));
//!
//! // The host routes pointer events: down on a grip, move/up from the document.
//! rsz.pointer_down(&mut dom, Direction::TopLeft, &HeadlessPointer::new(0.0, 0.0));
//! rsz.pointer_move(&mut dom, &mut HeadlessPointer::new(60.0, 10.0));
//! rsz.pointer_up(&mut dom, &HeadlessPointer::new(60.0, 10.0));
//!
//! // Width stopped at the floor and the left edge stopped with it.
//! let bounds = dom.bounding_rect(&panel);
//! assert_eq!(bounds.size(), Size::new(70.0, 90.0));
//! assert_eq!(bounds.x0, 130.0);
//!
//! rsz.destroy(&mut dom);
//! assert!(dom.children(panel).is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: (de)serialize [`ResizeConfig`] from option objects like `{"minWidth": 70}`.
//! - `web`: the [`adapters::web`] browser host and listener wiring.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod classnames;
pub mod config;
pub mod direction;
pub mod error;
pub mod event;
pub mod grip;
pub mod headless;
pub mod host;
pub mod resizable;
pub mod rules;

pub use config::ResizeConfig;
pub use direction::{Direction, Edges};
pub use error::ResizeError;
pub use event::{EventKind, ResizeEvent};
pub use grip::Grip;
pub use host::{Host, PointerEvent};
pub use resizable::{DragSession, Resizable};
pub use rules::BoxPatch;
