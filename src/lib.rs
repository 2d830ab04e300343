//! # element-tracker
//!
//! Elemental infusion tracking for turn-based game engines.
//!
//! ## Design Principles
//!
//! 1. **Fixed Registry**: Six elements (`fire`, `ice`, `air`, `earth`,
//!    `light`, `dark`) are created once and never added or removed.
//!
//! 2. **Deterministic**: Every transition is a pure function of the
//!    current status. No I/O, no randomness, no interior mutability.
//!
//! 3. **Errors Are Values**: Consuming an inert element or naming an
//!    unknown key returns an `ElementError`; nothing panics.
//!
//! ## Lifecycle
//!
//! ```text
//! Inert --generate--> Strong --wane--> Waning --wane--> Inert
//! ```
//!
//! `consume` takes a strong or waning element straight to `Inert`.
//! `ElementTracker::finish_round` wanes all six elements at once.
//!
//! ## Modules
//!
//! - `core`: Element status, elements, errors
//! - `tracker`: Element keys and the six-element registry
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod tracker;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Element, ElementError, ElementStatus, Result};

pub use crate::tracker::{ElementKey, ElementTracker};
