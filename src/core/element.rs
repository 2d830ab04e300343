//! A single named element and its transitions.
//!
//! | Current | `generate()` | `wane()` | `consume()`     |
//! |---------|--------------|----------|-----------------|
//! | Inert   | Strong       | Inert    | `CannotConsume` |
//! | Strong  | Strong       | Waning   | Inert           |
//! | Waning  | Strong       | Inert    | Inert           |

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{ElementError, Result};
use super::status::ElementStatus;

/// A named element with a three-state status.
///
/// ## Example
///
/// ```
/// use element_tracker::core::{Element, ElementStatus};
///
/// let mut fire = Element::new("Fire");
/// assert_eq!(fire.status(), ElementStatus::Inert);
///
/// fire.generate();
/// fire.wane();
/// assert_eq!(fire.status(), ElementStatus::Waning);
///
/// fire.consume().unwrap();
/// assert_eq!(fire.status(), ElementStatus::Inert);
/// assert!(fire.consume().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    name: String,
    status: ElementStatus,
}

impl Element {
    /// Create an inert element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ElementStatus::Inert,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> ElementStatus {
        self.status
    }

    /// Is this element strong or waning?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Make the element strong, whatever its current status.
    pub fn generate(&mut self) {
        self.transition(ElementStatus::Strong);
    }

    /// Decay one step. Does nothing once inert.
    pub fn wane(&mut self) {
        self.transition(self.status.waned());
    }

    /// Exhaust an active element.
    ///
    /// Strong and waning elements both go straight to inert. Fails with
    /// [`ElementError::CannotConsume`] if the element is already inert,
    /// leaving it untouched.
    pub fn consume(&mut self) -> Result<()> {
        if !self.status.is_active() {
            debug!(element = %self.name, "consume rejected: element is inert");
            return Err(ElementError::cannot_consume(&self.name));
        }
        self.transition(ElementStatus::Inert);
        Ok(())
    }

    fn transition(&mut self, next: ElementStatus) {
        trace!(element = %self.name, from = %self.status, to = %next, "element transition");
        self.status = next;
    }
}
