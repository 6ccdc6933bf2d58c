//! API Server - HTTP server for spam predictions

use axum::{
    routing::{get, post},
    Router,
};
use spam_rs::SpamDetection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// API Server
pub struct ApiServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(detector: Arc<dyn SpamDetection>, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState { detector }),
            config,
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/api/predict/message", post(handlers::predict_message))
            .route("/api/predict/number", post(handlers::predict_number))
            .with_state(Arc::clone(&self.state))
            .layer(TraceLayer::new_for_http());

        if self.config.cors_enabled {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Bind and serve until the process exits
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.config.listen_addr).await?;
        info!("API server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
