//! Request modifier subsystem.
//!
//! # Data Flow
//! ```text
//! [[modifiers]] config blocks (name + JSON payload)
//!     → registry.rs (look up factory by name, parse payload)
//!     → ParsedModifier (modifier + scope)
//!     → chain.rs (ordered, immutable, shared via Arc)
//!     → applied to every inbound request by the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Registry is an explicit value owned by the host, no global registration
//! - Chain is built before the listener starts and never changes
//! - First failing modifier stops the chain

pub mod chain;
pub mod registry;

use axum::body::Body;
use axum::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::AuthError;

pub use chain::ModifierChain;
pub use registry::{ModifierFactory, ModifierRegistry, ParsedModifier, AUTH_MODIFIER_NAME};

/// Where a modifier is applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Request,
    Response,
}

/// Per-request inspection or mutation logic.
pub trait RequestModifier: Send + Sync {
    /// Inspect or rewrite `req`. An error rejects the request.
    fn modify_request(&self, req: &mut Request<Body>) -> Result<(), ModifierError>;
}

/// Errors raised while building or applying modifiers.
#[derive(Debug, Error)]
pub enum ModifierError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("no modifier registered under name {0:?}")]
    UnknownModifier(String),

    #[error("modifier {name:?} acts on requests but its scope {scope:?} excludes them")]
    InvalidScope { name: String, scope: Vec<Scope> },

    #[error("invalid configuration for modifier {name:?}: {source}")]
    InvalidConfig {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
