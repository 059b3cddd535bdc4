//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, mw_req_stamp::request_id, stamp_req};
use axum::{routing::get, Router};
use lib_core::{AppError, MetadataConfig};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<MetadataConfig>,
}

impl AppState {
    pub fn new(metadata: MetadataConfig) -> Self {
        Self {
            metadata: Arc::new(metadata),
        }
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Initialize logging, bind `config.bind_address` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be installed or the address
/// cannot be bound.
pub async fn start_server(config: MetadataConfig) -> anyhow::Result<()> {
    let log_level = init_tracing()?;

    info!(" NFT NEIGHBORS METADATA SERVER STARTING");
    info!(" Log level: {}", log_level);
    info!(" Image base: {}", config.image_base);

    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(" SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        })
        .await?;
    Ok(())
}

/// Install the fmt subscriber filtered by `LOG_LEVEL` (default `info`).
fn init_tracing() -> anyhow::Result<String> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => tracing_subscriber::EnvFilter::new(&log_level),
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    Ok(log_level)
}

/// Create the application router with all routes and layers.
pub fn create_router(state: AppState) -> Router {
    use axum::http::{HeaderValue, Method};

    let allowed_origins = &state.metadata.allowed_origins;
    let cors = CorsLayer::new().allow_methods([Method::GET, Method::OPTIONS]);
    let cors = if allowed_origins.is_empty() {
        // Marketplaces fetch metadata from arbitrary origins
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    };

    info!("[ROUTE SETUP] Registering HTTP routes...");
    Router::new()
        .route("/api/{token_id}", get(handlers::metadata::get_token_metadata))
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async { AppError::NotFound("Route not found".to_string()) })
        .with_state(state)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id(request),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] Error: {:?}",
                            error
                        );
                    },
                ),
        )
        // CORS wraps everything; stamping runs before logging and the trace span
        .layer(axum::middleware::from_fn(log_requests))
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" METADATA:");
    info!("   • GET  /api/{{token_id}}");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
