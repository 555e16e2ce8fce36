//! outbreak-server library root.
//!
//! Exposes the router and its state so integration tests can drive the
//! HTTP surface in-process without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Navigation menu and page definitions
        .route("/domains", get(routes::domains::list_domains))
        .route("/domains/{id}", get(routes::domains::get_domain_page))
        .route("/domains/{id}/predict", post(routes::predict::predict))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
