//! Core element types: status, element, errors.
//!
//! An `Element` is usable on its own. The `tracker` module builds the
//! fixed six-element registry on top of it.

pub mod error;
pub mod status;
pub mod element;

pub use error::{ElementError, Result};
pub use status::ElementStatus;
pub use element::Element;
