//! Modifier middleware.
//! Runs the configured modifier chain and rejects requests it refuses.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::auth::AuthError;
use crate::http::request::request_id;
use crate::modifier::{ModifierChain, ModifierError};
use crate::observability::metrics;

/// Status returned to the client when a modifier rejects the request.
pub fn rejection_status(err: &ModifierError) -> StatusCode {
    match err {
        ModifierError::Auth(AuthError::AccessDenied) => StatusCode::FORBIDDEN,
        ModifierError::Auth(_) => StatusCode::UNAUTHORIZED,
        ModifierError::UnknownModifier(_)
        | ModifierError::InvalidScope { .. }
        | ModifierError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn rejection_reason(err: &ModifierError) -> &'static str {
    match err {
        ModifierError::Auth(e) => e.reason(),
        ModifierError::UnknownModifier(_) => "unknown_modifier",
        ModifierError::InvalidScope { .. } => "invalid_scope",
        ModifierError::InvalidConfig { .. } => "invalid_config",
    }
}

pub async fn modifier_middleware(
    State(chain): State<Arc<ModifierChain>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    match chain.apply_request(&mut req) {
        Ok(()) => next.run(req).await,
        Err(err) => reject(&req, &err, start_time),
    }
}

/// Log, count and answer a request the chain refused.
fn reject(req: &Request<Body>, err: &ModifierError, start_time: Instant) -> Response {
    let status = rejection_status(err);
    let reason = rejection_reason(err);
    warn!(
        request_id = %request_id(req.headers()),
        method = %req.method(),
        path = %req.uri().path(),
        status = status.as_u16(),
        reason,
        "Request rejected"
    );
    metrics::record_rejection(reason);
    metrics::record_request(req.method().as_str(), status.as_u16(), start_time);
    (status, err.to_string()).into_response()
}
