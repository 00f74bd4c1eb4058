mod backend;
mod config;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let backend = backend::HttpBackend::from_config(&config).expect("backend client init failed");
    tracing::info!(backend_url = backend.base_url(), "assistant backend configured");

    for target in config.targets.targets() {
        tracing::info!(db_type = target.kind.as_str(), name = %target.name, available = target.available, "connect target");
    }

    let state = state::AppState::new(Arc::new(backend), config.targets.clone());
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "dbassist listening");
    axum::serve(listener, app).await.expect("server failed");
}
