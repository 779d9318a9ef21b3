//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::HeaderMap, routing::any, Router};
use serde_json::Value;
use tokio::net::TcpListener;

use app_auth_gateway::config::{GatewayConfig, ModifierConfig};
use app_auth_gateway::modifier::{ModifierRegistry, AUTH_MODIFIER_NAME};
use app_auth_gateway::{HttpServer, Shutdown};

/// Start an upstream that echoes the `x-auth-app-id` it received.
///
/// Returns its address and a counter of requests that reached it.
pub async fn start_echo_backend() -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/", any(echo_app_id))
        .route("/{*path}", any(echo_app_id))
        .with_state(hits.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, hits)
}

async fn echo_app_id(State(hits): State<Arc<AtomicUsize>>, headers: HeaderMap) -> String {
    hits.fetch_add(1, Ordering::SeqCst);
    headers
        .get("x-auth-app-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string()
}

/// Gateway config in front of `upstream` with one auth modifier configured from `auth`.
pub fn gateway_config(upstream: SocketAddr, auth: Value) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.address = upstream.to_string();
    config.modifiers.push(ModifierConfig {
        name: AUTH_MODIFIER_NAME.to_string(),
        config: auth,
    });
    config
}

/// Start a gateway in front of `upstream` with one auth modifier configured from `auth`.
pub async fn start_gateway(upstream: SocketAddr, auth: Value) -> (SocketAddr, Shutdown) {
    let registry = ModifierRegistry::with_builtins();
    let server = HttpServer::from_config(gateway_config(upstream, auth), &registry).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// A reqwest client that never pools or goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
