//! Element keys: the fixed six-entry contract.
//!
//! | Key     | Display name |
//! |---------|--------------|
//! | `fire`  | Fire         |
//! | `ice`   | Ice          |
//! | `air`   | Air          |
//! | `earth` | Earth        |
//! | `light` | Light        |
//! | `dark`  | Dark         |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::ElementError;

/// Identifier for one of the six tracked elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKey {
    Fire,
    Ice,
    Air,
    Earth,
    Light,
    Dark,
}

impl ElementKey {
    /// Number of tracked elements.
    pub const COUNT: usize = 6;

    /// All keys in registry order.
    pub const ALL: [ElementKey; Self::COUNT] = [
        ElementKey::Fire,
        ElementKey::Ice,
        ElementKey::Air,
        ElementKey::Earth,
        ElementKey::Light,
        ElementKey::Dark,
    ];

    /// Lowercase lookup key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKey::Fire => "fire",
            ElementKey::Ice => "ice",
            ElementKey::Air => "air",
            ElementKey::Earth => "earth",
            ElementKey::Light => "light",
            ElementKey::Dark => "dark",
        }
    }

    /// Display name given to the element created for this key.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ElementKey::Fire => "Fire",
            ElementKey::Ice => "Ice",
            ElementKey::Air => "Air",
            ElementKey::Earth => "Earth",
            ElementKey::Light => "Light",
            ElementKey::Dark => "Dark",
        }
    }

    /// Dense storage index (0-based, registry order).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a lowercase key. Matching is exact and case-sensitive.
    ///
    /// ```
    /// use element_tracker::tracker::ElementKey;
    ///
    /// assert_eq!(ElementKey::parse("earth"), Some(ElementKey::Earth));
    /// assert_eq!(ElementKey::parse("Earth"), None);
    /// assert_eq!(ElementKey::parse("water"), None);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKey {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ElementError::unknown_element(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let pairs: Vec<_> = ElementKey::ALL
            .iter()
            .map(|k| (k.as_str(), k.display_name()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("fire", "Fire"),
                ("ice", "Ice"),
                ("air", "Air"),
                ("earth", "Earth"),
                ("light", "Light"),
                ("dark", "Dark"),
            ]
        );
    }

    #[test]
    fn test_index_matches_order() {
        for (i, key) in ElementKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_parse_roundtrip() {
        for key in ElementKey::ALL {
            assert_eq!(key.to_string().parse::<ElementKey>(), Ok(key));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "FIRE".parse::<ElementKey>().unwrap_err();
        assert_eq!(err, ElementError::unknown_element("FIRE"));
    }
}
