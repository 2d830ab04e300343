//! Element status: the three-state infusion lifecycle.
//!
//! ```text
//! Inert --generate--> Strong --wane--> Waning --wane--> Inert
//! ```
//!
//! `generate` jumps to `Strong` from anywhere, and `consume` drops an
//! active element straight back to `Inert`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ElementError;

/// Current status of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    /// Not available. Every element starts here.
    #[default]
    Inert,
    /// Freshly generated.
    Strong,
    /// One round of decay left.
    Waning,
}

impl ElementStatus {
    /// Lowercase status text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementStatus::Inert => "inert",
            ElementStatus::Strong => "strong",
            ElementStatus::Waning => "waning",
        }
    }

    /// Can an element in this status be consumed?
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, ElementStatus::Inert)
    }

    /// Status after one decay step. `Inert` is a fixed point.
    #[must_use]
    pub const fn waned(self) -> Self {
        match self {
            ElementStatus::Strong => ElementStatus::Waning,
            ElementStatus::Waning | ElementStatus::Inert => ElementStatus::Inert,
        }
    }
}

impl std::fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementStatus {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inert" => Ok(ElementStatus::Inert),
            "strong" => Ok(ElementStatus::Strong),
            "waning" => Ok(ElementStatus::Waning),
            other => Err(ElementError::unknown_status(other)),
        }
    }
}
