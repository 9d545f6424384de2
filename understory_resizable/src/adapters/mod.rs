// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosts for concrete documents.
//!
//! The core engine only knows the [`Host`](crate::Host) trait. Each adapter is
//! gated behind a feature flag so the default build stays `no_std` and free of
//! platform bindings.
//!
//! ## Available Adapters
//!
//! - `web` (`web` feature): a [`Host`](crate::Host) over `web_sys` elements and
//!   mouse events, plus `WebResizable`, which installs the browser listeners
//!   and routes them into a [`Resizable`](crate::Resizable).

#[cfg(feature = "web")]
pub mod web;
