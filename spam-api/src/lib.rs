//! spam-api: HTTP API for spam detection
//!
//! Exposes the spam-rs message and number classifiers as JSON endpoints.
//!
//! # Endpoints
//!
//! - `GET /health`
//! - `POST /api/predict/message` with `{"message": "..."}`
//! - `POST /api/predict/number` with `{"number": "..."}`
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8080"
//! cors_enabled = true
//!
//! [detector.service]
//! message_latency_ms = 1000
//! number_latency_ms = 800
//!
//! [detector.reference]
//! denylist_path = "/etc/spam-api/denylist.txt"
//! ```

pub mod config;
pub mod handlers;
pub mod server;

pub use config::ApiConfig;
pub use server::ApiServer;
