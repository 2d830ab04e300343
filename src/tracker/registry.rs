//! The element tracker: a fixed registry of six elements.
//!
//! Elements are addressed by their lowercase key. Unknown keys resolve
//! to `None` from `get` and to [`ElementError::UnknownElement`] from the
//! mutating operations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::key::ElementKey;
use crate::core::{Element, ElementError, ElementStatus, Result};

/// Registry of the six tracked elements.
///
/// Backed by a fixed array indexed by [`ElementKey::index`]. Entries are
/// created once and never added or removed.
///
/// ## Example
///
/// ```
/// use element_tracker::{ElementStatus, ElementTracker};
///
/// let mut tracker = ElementTracker::new();
/// tracker.generate("fire").unwrap();
/// tracker.generate("earth").unwrap();
///
/// tracker.finish_round();
///
/// assert_eq!(tracker.status("fire"), Some(ElementStatus::Waning));
/// assert!(tracker.consume("fire").is_ok());
/// assert!(tracker.consume("fire").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TrackerSnapshot")]
pub struct ElementTracker {
    elements: [Element; ElementKey::COUNT],
}

/// Unvalidated serialized form of a tracker.
#[derive(Deserialize)]
struct TrackerSnapshot {
    elements: [Element; ElementKey::COUNT],
}

impl TryFrom<TrackerSnapshot> for ElementTracker {
    type Error = ElementError;

    /// Each slot must hold the element named for its key.
    fn try_from(snapshot: TrackerSnapshot) -> Result<Self> {
        for (key, element) in ElementKey::ALL.iter().zip(&snapshot.elements) {
            if element.name() != key.display_name() {
                return Err(ElementError::name_mismatch(
                    key.as_str(),
                    key.display_name(),
                    element.name(),
                ));
            }
        }
        Ok(Self {
            elements: snapshot.elements,
        })
    }
}

impl Default for ElementTracker {
    fn default() -> Self {
        Self {
            elements: ElementKey::ALL.map(|key| Element::new(key.display_name())),
        }
    }
}

impl ElementTracker {
    /// Create the registry with all six elements inert.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an element by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Element> {
        ElementKey::parse(key).map(|k| self.element(k))
    }

    /// Get a mutable reference to an element by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Element> {
        ElementKey::parse(key).map(|k| self.element_mut(k))
    }

    /// Get an element by typed key.
    #[must_use]
    pub fn element(&self, key: ElementKey) -> &Element {
        &self.elements[key.index()]
    }

    /// Get a mutable reference to an element by typed key.
    pub fn element_mut(&mut self, key: ElementKey) -> &mut Element {
        &mut self.elements[key.index()]
    }

    /// Status of an element, or `None` for an unknown key.
    #[must_use]
    pub fn status(&self, key: &str) -> Option<ElementStatus> {
        self.get(key).map(Element::status)
    }

    /// Generate the element under `key`.
    pub fn generate(&mut self, key: &str) -> Result<()> {
        self.resolve(key)?.generate();
        Ok(())
    }

    /// Consume the element under `key`.
    ///
    /// An inert element's [`ElementError::CannotConsume`] is returned
    /// unchanged.
    pub fn consume(&mut self, key: &str) -> Result<()> {
        self.resolve(key)?.consume()
    }

    /// End the round: every element wanes one step.
    pub fn finish_round(&mut self) {
        debug!(active = self.active().count(), "finishing round");
        for element in &mut self.elements {
            element.wane();
        }
    }

    /// Number of tracked elements. Always six.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false; the registry is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over (key, element) pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKey, &Element)> {
        ElementKey::ALL.into_iter().zip(self.elements.iter())
    }

    /// Keys of elements that are strong or waning.
    pub fn active(&self) -> impl Iterator<Item = ElementKey> + '_ {
        self.iter()
            .filter(|(_, element)| element.is_active())
            .map(|(key, _)| key)
    }

    fn resolve(&mut self, key: &str) -> Result<&mut Element> {
        match ElementKey::parse(key) {
            Some(k) => Ok(self.element_mut(k)),
            None => {
                debug!(key, "unknown element key");
                Err(ElementError::unknown_element(key))
            }
        }
    }
}
