//! Application authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Authorization: Bearer <hex("appId:secret")>
//!     → authenticator.rs (strip prefix, hex decode, split, parse id)
//!     → credentials.rs (look up id, compare secret)
//!     → X-Auth-App-Id: <appId> on success, AuthError otherwise
//! ```
//!
//! # Design Decisions
//! - Credential table is built once and never mutated
//! - Unknown id and wrong secret are indistinguishable to the caller
//! - The outbound header is written only after every check has passed

pub mod authenticator;
pub mod credentials;
pub mod error;

pub use authenticator::{encode_token, AuthConfig, HeaderAuthenticator, X_AUTH_APP_ID};
pub use credentials::{ApplicationCredential, CredentialTable};
pub use error::AuthError;
