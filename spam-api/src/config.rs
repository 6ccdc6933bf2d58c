//! Configuration for spam-api

use serde::{Deserialize, Serialize};
use spam_rs::{Config as DetectorConfig, Result, SpamError};
use std::path::Path;

/// Main API configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Classifier, reference data and logging settings
    #[serde(default)]
    pub detector: DetectorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_cors_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_enabled: default_cors_enabled(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        let config: ApiConfig = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| {
                SpamError::Config(format!(
                    "Invalid listen address '{}': {}",
                    self.server.listen_addr, e
                ))
            })?;

        self.detector.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080");
        assert!(config.server.cors_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
listen_addr = "127.0.0.1:9000"
cors_enabled = false

[detector.service]
message_latency_ms = 1000
number_latency_ms = 800

[detector.logging]
format = "json"
"#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:9000");
        assert!(!config.server.cors_enabled);
        assert_eq!(config.detector.service.message_latency_ms, 1000);
        assert_eq!(config.detector.service.min_number_digits, 10);
        assert_eq!(config.detector.logging.format, "json");
    }

    #[test]
    fn test_invalid_listen_addr() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlisten_addr = \"not-an-address\"").unwrap();

        let err = ApiConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid listen address"));
    }
}
