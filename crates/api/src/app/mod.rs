//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store/engine construction + seed catalog
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: failure-to-status mapping (reproduced bit-exact)

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use vendo_engine::EngineConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which pass a faster [`EngineConfig`]).
pub fn build_app(config: EngineConfig) -> Router {
    let services = Arc::new(services::build_services(config));

    routes::router()
        .route("/health", get(routes::system::health))
        .layer(Extension(services))
}
