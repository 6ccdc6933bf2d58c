//! Detection service
//!
//! Caller-side wrapper around the pure classifiers. It enforces the input
//! contract the classifiers leave to their callers (no blank messages, no
//! short numbers) and can delay responses to simulate a remote backend.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{Config, ServiceConfig};
use crate::error::{Result, SpamError};
use crate::spam::{
    normalize_number, DenyList, MessageClassifier, MessageResult, NumberClassifier, NumberLookup,
    NumberResult, RandomSource, SpamLexicon, ThreadRandom,
};

/// Spam detection front end
#[async_trait]
pub trait SpamDetection: Send + Sync {
    /// Validate and classify a message
    async fn predict_message(&self, text: &str) -> Result<MessageResult>;

    /// Validate and classify a phone number
    async fn predict_number(&self, raw: &str) -> Result<NumberResult>;
}

/// Default [`SpamDetection`] implementation
#[derive(Debug, Clone)]
pub struct DetectionService {
    messages: MessageClassifier,
    numbers: NumberClassifier,
    config: ServiceConfig,
}

impl DetectionService {
    pub fn new(messages: MessageClassifier, numbers: NumberClassifier, config: ServiceConfig) -> Self {
        Self {
            messages,
            numbers,
            config,
        }
    }

    /// Build from configuration, loading reference files when configured
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_random(config, Arc::new(ThreadRandom))
    }

    /// Same as [`DetectionService::from_config`] with an explicit random source
    pub fn from_config_with_random(config: &Config, random: Arc<dyn RandomSource>) -> Result<Self> {
        let lexicon = match &config.reference.lexicon_path {
            Some(path) => Arc::new(SpamLexicon::from_file(path)?),
            None => SpamLexicon::builtin(),
        };
        let denylist: Arc<dyn NumberLookup> = match &config.reference.denylist_path {
            Some(path) => Arc::new(DenyList::from_file(path)?),
            None => DenyList::builtin(),
        };

        info!(
            keywords = lexicon.len(),
            min_number_digits = config.service.min_number_digits,
            "Detection service ready"
        );

        Ok(Self::new(
            MessageClassifier::new(lexicon),
            NumberClassifier::new(denylist, random),
            config.service.clone(),
        ))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Reject blank messages
    pub fn validate_message(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(SpamError::EmptyInput("message"));
        }
        Ok(())
    }

    /// Reject blank numbers and numbers with too few digits
    pub fn validate_number(&self, raw: &str) -> Result<()> {
        if raw.trim().is_empty() {
            return Err(SpamError::EmptyInput("phone number"));
        }

        let digits = normalize_number(raw).len();
        if digits < self.config.min_number_digits {
            return Err(SpamError::InvalidNumber {
                digits,
                min: self.config.min_number_digits,
            });
        }
        Ok(())
    }
}

impl Default for DetectionService {
    fn default() -> Self {
        Self::new(
            MessageClassifier::default(),
            NumberClassifier::default(),
            ServiceConfig::default(),
        )
    }
}

async fn simulate_latency(millis: u64) {
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

#[async_trait]
impl SpamDetection for DetectionService {
    async fn predict_message(&self, text: &str) -> Result<MessageResult> {
        if let Err(e) = self.validate_message(text) {
            warn!("Rejected message: {}", e);
            return Err(e);
        }

        simulate_latency(self.config.message_latency_ms).await;
        Ok(self.messages.classify(text))
    }

    async fn predict_number(&self, raw: &str) -> Result<NumberResult> {
        if let Err(e) = self.validate_number(raw) {
            warn!("Rejected number: {}", e);
            return Err(e);
        }

        simulate_latency(self.config.number_latency_ms).await;
        Ok(self.numbers.classify(raw))
    }
}
