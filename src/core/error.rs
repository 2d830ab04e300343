//! Error types for element operations.
//!
//! Consuming an inert element is the only failure an element itself can
//! raise. The tracker adds a lookup failure for keys outside the fixed
//! registry.

use thiserror::Error;

/// Errors raised by elements and the tracker.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ElementError {
    /// `consume()` was called on an inert element.
    #[error("Cannot consume {name} because it's not strong or waning")]
    CannotConsume { name: String },

    /// The tracker was asked for a key it does not own.
    #[error("Unknown element key: {key}")]
    UnknownElement { key: String },

    /// A tracker slot held an element named for a different key.
    #[error("Element {key} must be named {expected}, found {found}")]
    NameMismatch {
        key: String,
        expected: String,
        found: String,
    },

    /// Status text did not name one of the three statuses.
    #[error("Unknown element status: {value}")]
    UnknownStatus { value: String },
}

impl ElementError {
    /// Create a consume-on-inert error for the named element.
    pub fn cannot_consume(name: impl Into<String>) -> Self {
        Self::CannotConsume { name: name.into() }
    }

    /// Create a key-not-found error.
    pub fn unknown_element(key: impl Into<String>) -> Self {
        Self::UnknownElement { key: key.into() }
    }

    /// Create a key/name mismatch error.
    pub fn name_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::NameMismatch {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a status parse error.
    pub fn unknown_status(value: impl Into<String>) -> Self {
        Self::UnknownStatus {
            value: value.into(),
        }
    }

    /// Check if this is a consume-on-inert error.
    #[must_use]
    pub fn is_cannot_consume(&self) -> bool {
        matches!(self, Self::CannotConsume { .. })
    }
}

/// Result alias for element operations.
pub type Result<T> = std::result::Result<T, ElementError>;
