//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the forwarding endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. The compiled client bundle is
//! served from `/pkg`.

pub mod assistant;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Endpoints the chat and connect pages call.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/connect_env", post(assistant::connect_env))
        .route("/api/connect/postgresql", post(assistant::connect_postgres))
        .route("/api/connect/servicenow", post(assistant::connect_servicenow))
        .route("/chat", post(assistant::chat))
        .route("/api/targets", get(assistant::targets))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static client bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
