//! Application state for one signed-in user.

pub mod tracker;

pub use tracker::{RehabTracker, SessionError};
