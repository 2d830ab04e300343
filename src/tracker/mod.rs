//! Element tracker: the fixed six-key registry.
//!
//! ## Key Types
//!
//! - `ElementKey`: One of `fire`, `ice`, `air`, `earth`, `light`, `dark`
//! - `ElementTracker`: Owns one `Element` per key and ends rounds

pub mod key;
pub mod registry;

pub use key::ElementKey;
pub use registry::ElementTracker;
