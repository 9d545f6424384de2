// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle events and listener registration.
//!
//! A drag produces exactly one [`ResizeEvent::Start`], zero or more
//! [`ResizeEvent::Resizing`], then exactly one [`ResizeEvent::Stop`].
//!
//! Listeners registered by name are routed through [`EventKind::classify`],
//! which buckets names by keyword so that `"resizeStart"`, `"resize-start"`
//! and `"start"` all land in the same place:
//!
//! ```
//! use understory_resizable::EventKind;
//!
//! assert_eq!(EventKind::classify("resize-start"), Some(EventKind::Start));
//! assert_eq!(EventKind::classify("onResizing"), Some(EventKind::Resizing));
//! assert_eq!(EventKind::classify("resizeEnd"), Some(EventKind::Stop));
//! assert_eq!(EventKind::classify("click"), None);
//! ```

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::{Rect, Size};

use crate::error::ResizeError;

/// The three listener buckets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A grip was grabbed.
    Start,
    /// The pointer moved while a grip was held.
    Resizing,
    /// The grip was released.
    Stop,
}

impl EventKind {
    /// Classify an event name by keyword, case-insensitively.
    ///
    /// Checked in order: contains `start` → [`Start`](Self::Start); contains
    /// `ing` → [`Resizing`](Self::Resizing); contains `end` or `stop` →
    /// [`Stop`](Self::Stop). Anything else is `None`.
    pub fn classify(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        if name.contains("start") {
            Some(Self::Start)
        } else if name.contains("ing") {
            Some(Self::Resizing)
        } else if name.contains("end") || name.contains("stop") {
            Some(Self::Stop)
        } else {
            None
        }
    }
}

impl FromStr for EventKind {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| ResizeError::UnknownEvent(s.to_string()))
    }
}

/// Payload handed to listeners.
///
/// `E` is the host's pointer event type; `source` is the event that caused
/// the notification.
#[derive(Debug)]
pub enum ResizeEvent<'a, E> {
    /// Drag started.
    Start {
        /// Pointer-down event on the grip.
        source: &'a E,
    },
    /// Geometry was updated.
    Resizing {
        /// Pointer-move event.
        source: &'a E,
        /// Element size after the update.
        size: Size,
    },
    /// Drag ended.
    Stop {
        /// Pointer-up event.
        source: &'a E,
        /// Element bounds after the drag.
        bounds: Rect,
    },
}

impl<'a, E> ResizeEvent<'a, E> {
    /// Which bucket this event is dispatched to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start { .. } => EventKind::Start,
            Self::Resizing { .. } => EventKind::Resizing,
            Self::Stop { .. } => EventKind::Stop,
        }
    }

    /// The triggering pointer event.
    pub fn source(&self) -> &'a E {
        match *self {
            Self::Start { source } | Self::Resizing { source, .. } | Self::Stop { source, .. } => {
                source
            }
        }
    }
}

/// Boxed listener callback.
pub type Listener<E> = Box<dyn FnMut(&ResizeEvent<'_, E>)>;

/// Ordered listener lists, one per [`EventKind`].
pub struct Listeners<E> {
    start: Vec<Listener<E>>,
    resizing: Vec<Listener<E>>,
    stop: Vec<Listener<E>>,
}

impl<E> Listeners<E> {
    /// Empty buckets.
    pub fn new() -> Self {
        Self {
            start: Vec::new(),
            resizing: Vec::new(),
            stop: Vec::new(),
        }
    }

    fn bucket_mut(&mut self, kind: EventKind) -> &mut Vec<Listener<E>> {
        match kind {
            EventKind::Start => &mut self.start,
            EventKind::Resizing => &mut self.resizing,
            EventKind::Stop => &mut self.stop,
        }
    }

    /// Append a listener to a bucket.
    pub fn push(&mut self, kind: EventKind, listener: Listener<E>) {
        self.bucket_mut(kind).push(listener);
    }

    /// Number of listeners in a bucket.
    pub fn len(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Start => self.start.len(),
            EventKind::Resizing => self.resizing.len(),
            EventKind::Stop => self.stop.len(),
        }
    }

    /// Whether no listener is registered at all.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.resizing.is_empty() && self.stop.is_empty()
    }

    /// Invoke every listener of the event's bucket, in registration order.
    pub fn emit(&mut self, event: &ResizeEvent<'_, E>) {
        for listener in self.bucket_mut(event.kind()) {
            listener(event);
        }
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.start.clear();
        self.resizing.clear();
        self.stop.clear();
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("start", &self.start.len())
            .field("resizing", &self.resizing.len())
            .field("stop", &self.stop.len())
            .finish()
    }
}
