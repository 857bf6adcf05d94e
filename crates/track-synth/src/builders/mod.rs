//! Fluent builders for assembling generated activities.

mod session;

pub use session::{GeneratedSession, SessionBuilder};
