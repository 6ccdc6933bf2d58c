//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SpamError};

/// Main detector configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Caller-side behaviour (validation, simulated latency)
    #[serde(default)]
    pub service: ServiceConfig,
    /// Optional replacements for the built-in reference tables
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Artificial delay before returning a message prediction
    #[serde(default)]
    pub message_latency_ms: u64,
    /// Artificial delay before returning a number prediction
    #[serde(default)]
    pub number_latency_ms: u64,
    /// Minimum digit count for a number to be accepted
    #[serde(default = "default_min_number_digits")]
    pub min_number_digits: usize,
}

/// Reference data configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReferenceConfig {
    /// Keyword file, one keyword per line
    pub lexicon_path: Option<PathBuf>,
    /// Denylist file, one number per line
    pub denylist_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_min_number_digits() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            message_latency_ms: 0,
            number_latency_ms: 0,
            min_number_digits: default_min_number_digits(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SpamError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.min_number_digits == 0 {
            return Err(SpamError::Config(
                "service.min_number_digits must be at least 1".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SpamError::Config(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.min_number_digits, 10);
        assert_eq!(config.service.message_latency_ms, 0);
        assert!(config.reference.denylist_path.is_none());
        assert_eq!(config.logging.format, "pretty");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[service]
message_latency_ms = 1000
number_latency_ms = 800

[reference]
denylist_path = "/etc/spam/denylist.txt"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.service.message_latency_ms, 1000);
        assert_eq!(config.service.number_latency_ms, 800);
        assert_eq!(config.service.min_number_digits, 10);
        assert_eq!(
            config.reference.denylist_path,
            Some(PathBuf::from("/etc/spam/denylist.txt"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_from_file_rejects_unknown_format() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"xml\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SpamError::Config(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/spam.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
