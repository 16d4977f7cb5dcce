use crate::config::ApiConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::TextProvider;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use secrecy::Secret;
use service_core::error::AppError;
use service_core::middleware::{
    http_trace_layer, request_id_middleware, security_headers_middleware,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/add-ten", post(handlers::add_ten))
        .route("/api/style-text", post(handlers::style_text))
        .fallback(not_found)
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Bind the listener and wire the Gemini provider from `config`.
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        if !config.gemini.is_configured() {
            tracing::warn!("GEMINI_API_KEY is not set; /api/style-text will answer 500");
        }

        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: config
                .gemini
                .api_key
                .clone()
                .unwrap_or_else(|| Secret::new(String::new())),
            model: config.gemini.model.clone(),
            api_base: config.gemini.api_base.clone(),
        })
        .map_err(|e| AppError::ConfigError(e.to_string()))?;

        tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Bind the listener with an explicit provider. Port 0 picks a free port.
    pub async fn build_with_provider(
        config: ApiConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let state = AppState {
            config,
            text_provider,
        };
        let app = build_router(state);

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Backend server running on http://localhost:{}", port);
        tracing::info!("Available routes:");
        tracing::info!("  GET  /api/health - Health check");
        tracing::info!("  POST /api/add-ten - Add 10 to a number");
        tracing::info!("  POST /api/style-text - Style text with Gemini AI");

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
