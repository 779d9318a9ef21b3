//! Bearer credential verification.
//!
//! # Responsibilities
//! - Decode `Authorization: Bearer <hex("appId:secret")>`
//! - Check the pair against the credential table
//! - Stamp `X-Auth-App-Id` on verified requests
//!
//! # Design Decisions
//! - A value without the `Bearer ` prefix is still decoded as-is
//! - Split happens at the first colon, so secrets may contain colons
//! - Read-only after construction, shared across requests without locks

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Request};
use serde::{Deserialize, Serialize};

use crate::auth::credentials::{ApplicationCredential, CredentialTable};
use crate::auth::error::AuthError;
use crate::modifier::{ModifierError, RequestModifier, Scope};

/// Header carrying the verified application id to the upstream.
pub const X_AUTH_APP_ID: HeaderName = HeaderName::from_static("x-auth-app-id");

const BEARER_PREFIX: &[u8] = b"Bearer ";

/// JSON payload accepted by the `auth.FloraApplications` modifier.
///
/// ```json
/// {
///   "applications": [{"id": 1, "name": "test app", "key": "secret_key"}],
///   "scope": ["request", "response"]
/// }
/// ```
///
/// Without `scope` the modifier applies to both requests and responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    pub applications: Vec<ApplicationCredential>,
    pub scope: Option<Vec<Scope>>,
}

/// Verifies application credentials carried in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct HeaderAuthenticator {
    credentials: CredentialTable,
}

impl HeaderAuthenticator {
    pub fn new(applications: impl IntoIterator<Item = ApplicationCredential>) -> Self {
        Self {
            credentials: CredentialTable::new(applications),
        }
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    /// Check the credential in `headers` without touching the request.
    ///
    /// Returns the verified application id.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<u8, AuthError> {
        let raw = headers
            .get(header::AUTHORIZATION)
            .map(HeaderValue::as_bytes)
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingHeader)?;

        let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw);
        if token.is_empty() {
            return Err(AuthError::MalformedHeader);
        }

        let decoded = hex::decode(token).map_err(|_| AuthError::DecodeError)?;
        let payload = std::str::from_utf8(&decoded).map_err(|_| AuthError::MalformedCredential)?;
        let (app_id, secret) = payload
            .split_once(':')
            .ok_or(AuthError::MalformedCredential)?;

        let app_id = parse_app_id(app_id)?;
        if !self.credentials.verify_secret(app_id, secret.as_bytes()) {
            return Err(AuthError::AccessDenied);
        }

        Ok(app_id)
    }

    /// Authenticate `req` and, on success, set `X-Auth-App-Id`.
    ///
    /// The request is left untouched on failure.
    pub fn verify<B>(&self, req: &mut Request<B>) -> Result<u8, AuthError> {
        let app_id = self.authenticate(req.headers())?;

        tracing::debug!(
            url = %req.uri(),
            app_id,
            "Application authenticated, adding X-Auth-App-Id"
        );
        req.headers_mut()
            .insert(X_AUTH_APP_ID, HeaderValue::from(u16::from(app_id)));

        Ok(app_id)
    }
}

impl RequestModifier for HeaderAuthenticator {
    fn modify_request(&self, req: &mut Request<Body>) -> Result<(), ModifierError> {
        self.verify(req)?;
        Ok(())
    }
}

/// Decimal digits only, must fit in a `u8`.
fn parse_app_id(raw: &str) -> Result<u8, AuthError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AuthError::InvalidAppId);
    }
    raw.parse::<u8>().map_err(|_| AuthError::InvalidAppId)
}

/// Build the hex token that `verify` accepts for `id` and `secret`.
pub fn encode_token(id: u8, secret: &str) -> String {
    hex::encode(format!("{}:{}", id, secret))
}
