//! Application startup and lifecycle management.
//!
//! Builds the router, binds the listener, and serves until a shutdown
//! signal arrives.

use crate::config::GatewayConfig;
use crate::handlers;
use crate::services::{AnthropicClient, NewsClient};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Provider clients are constructed once and cloned per request; nothing
/// in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub news: NewsClient,
    pub synthesis: AnthropicClient,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: GatewayConfig) -> anyhow::Result<Self> {
        let news = NewsClient::new(config.news.clone());
        let synthesis = AnthropicClient::new(config.anthropic.clone());
        tracing::info!(model = %config.anthropic.model, "Provider clients initialized");

        let state = AppState {
            config: config.clone(),
            news,
            synthesis,
        };

        let router = Router::new()
            .route("/", get(handlers::root_status))
            .route("/health", get(handlers::health_check))
            .route("/news/:category", get(handlers::news::headlines))
            .route("/search", get(handlers::news::search))
            .route("/synthesize", post(handlers::synthesize::synthesize))
            .layer(CorsLayer::permissive())
            // Add tracing layer
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state);

        // Bind here so port 0 resolves to a real port for the test harness.
        let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to bind listener to {}:{}: {}",
                    config.server.host,
                    config.server.port,
                    e
                );
                anyhow::Error::new(e)
            })?;
        let port = listener.local_addr()?.port();

        tracing::info!("News gateway listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
