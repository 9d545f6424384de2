// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stable class names applied to targets and grips, for host stylesheets.

/// Marks an element with an attached controller.
pub const RESIZABLE: &str = "resizable";
/// Present between grabbing a grip and the first pointer move.
pub const GRABBED: &str = "grabbed";
/// Present from the first pointer move until release.
pub const RESIZING: &str = "resizing";
/// Present while the controller is disabled.
pub const RESIZE_DISABLED: &str = "resize-disabled";
/// Carried by every grip element.
pub const RESIZE_GRIP: &str = "resize-grip";

/// Marker classes a controller may leave on its target.
pub const TARGET_MARKERS: [&str; 4] = [RESIZABLE, GRABBED, RESIZING, RESIZE_DISABLED];
