//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the todo API and health check, and stitches them with
//! Leptos SSR rendering under a single Axum router. With the frontend
//! disabled only the API router is served.

pub mod todos;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{delete, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes shared by the SSR app and cross-origin browser clients.
pub fn api_routes(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/api/todos/{id}", delete(todos::delete_todo))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, cors_origin: HeaderValue) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Compiled WASM, JS and CSS live under <site-root>/pkg.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state, cors_origin)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
