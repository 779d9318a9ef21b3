//! Authentication failures.

use thiserror::Error;

/// Reasons a request fails application authentication.
///
/// Every variant is terminal for the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    MissingHeader,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("cannot decode authorization header")]
    DecodeError,

    #[error("malformed application credential")]
    MalformedCredential,

    #[error("invalid application id")]
    InvalidAppId,

    /// Unknown application id or wrong secret.
    #[error("access denied")]
    AccessDenied,
}

impl AuthError {
    /// Short label used for metrics and structured logs.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_header",
            AuthError::MalformedHeader => "malformed_header",
            AuthError::DecodeError => "decode_error",
            AuthError::MalformedCredential => "malformed_credential",
            AuthError::InvalidAppId => "invalid_app_id",
            AuthError::AccessDenied => "access_denied",
        }
    }
}
