//! spam-api: HTTP server for message and phone number spam detection

use spam_api::{ApiConfig, ApiServer};
use spam_rs::{logging, DetectionService};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(config_path) => ApiConfig::from_file(Path::new(&config_path))?,
        None => ApiConfig::default(),
    };

    logging::init(&config.detector.logging);
    info!("Starting spam-api v{}", env!("CARGO_PKG_VERSION"));

    let detector = DetectionService::from_config(&config.detector)?;
    info!(
        "  Simulated latency: message {}ms, number {}ms",
        config.detector.service.message_latency_ms, config.detector.service.number_latency_ms
    );

    let server = ApiServer::new(Arc::new(detector), config.server.clone());
    server.run().await
}
