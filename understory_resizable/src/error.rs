// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by parsing helpers and the fallible controller entry points.

use alloc::string::String;

/// Errors reported by the resize engine.
///
/// Most controller operations are infallible and degrade to no-ops instead
/// (for example, any call after [`Resizable::destroy`](crate::Resizable::destroy)).
/// This type covers the cases where a caller asked for something explicit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    /// An event name matched none of the start/resizing/stop keywords.
    #[error("unrecognized resize event name `{0}`")]
    UnknownEvent(String),
    /// A direction name is not one of the eight grip directions.
    #[error("unrecognized grip direction `{0}`")]
    UnknownDirection(String),
    /// The host could not create an element for a grip.
    #[error("host failed to create a grip element")]
    ElementCreation,
    /// The target element belongs to no document.
    #[error("target element has no owner document")]
    NoDocument,
    /// The controller was already destroyed.
    #[error("resizable controller has been destroyed")]
    Destroyed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            ResizeError::NoDocument.to_string(),
            "target element has no owner document"
        );
        assert_eq!(
            ResizeError::ElementCreation.to_string(),
            "host failed to create a grip element"
        );
        assert_eq!(
            ResizeError::UnknownDirection("up".into()).to_string(),
            "unrecognized grip direction `up`"
        );
    }
}
