//! Axum middleware wiring the modifier chain into the request path.

pub mod modifiers;

pub use modifiers::{modifier_middleware, rejection_status};
