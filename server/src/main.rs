mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::new();
    let cors_origin = config.cors_allowed_origin.clone();

    let app = if config.serve_frontend {
        match routes::leptos_app(state.clone(), cors_origin.clone()) {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!(error = %e, "frontend not configured; serving API only");
                routes::api_routes(state, cors_origin)
            }
        }
    } else {
        routes::api_routes(state, cors_origin)
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, origin = ?config.cors_allowed_origin, "sampleapp listening");
    axum::serve(listener, app).await.expect("server failed");
}
