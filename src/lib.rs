//! Application-authenticating gateway library.

pub mod auth;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod modifier;
pub mod observability;

pub use auth::{AuthError, HeaderAuthenticator};
pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use modifier::{ModifierChain, ModifierRegistry};
