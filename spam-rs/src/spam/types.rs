//! Spam types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Spam,
    #[serde(rename = "Not Spam")]
    NotSpam,
}

impl Verdict {
    pub fn is_spam(self) -> bool {
        self == Verdict::Spam
    }
}

impl From<bool> for Verdict {
    fn from(is_spam: bool) -> Self {
        if is_spam {
            Verdict::Spam
        } else {
            Verdict::NotSpam
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Spam => write!(f, "Spam"),
            Verdict::NotSpam => write!(f, "Not Spam"),
        }
    }
}

/// Where a number verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberSource {
    /// Exact hit in the denylist
    Database,
    /// Suffix pattern or randomized fallback
    Heuristic,
}

impl fmt::Display for NumberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberSource::Database => write!(f, "database"),
            NumberSource::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// URLs and phone numbers found in a message, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub urls: Vec<String>,
    pub phones: Vec<String>,
}

/// Message classification result
///
/// Fields are private so `url_count`/`phone_count` always agree with the
/// extracted sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResult {
    verdict: Verdict,
    confidence: f64,
    explanation: String,
    urls: Vec<String>,
    phones: Vec<String>,
    risk_factors: Vec<String>,
    url_count: usize,
    phone_count: usize,
}

impl MessageResult {
    pub(crate) fn new(
        verdict: Verdict,
        confidence: f64,
        explanation: String,
        extraction: Extraction,
        risk_factors: Vec<String>,
    ) -> Self {
        let Extraction { urls, phones } = extraction;
        Self {
            verdict,
            confidence,
            explanation,
            url_count: urls.len(),
            phone_count: phones.len(),
            urls,
            phones,
            risk_factors,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_spam(&self) -> bool {
        self.verdict.is_spam()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    pub fn url_count(&self) -> usize {
        self.url_count
    }

    pub fn phone_count(&self) -> usize {
        self.phone_count
    }
}

/// Phone number classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberResult {
    verdict: Verdict,
    confidence: f64,
    explanation: String,
    source: NumberSource,
    normalized_number: String,
}

impl NumberResult {
    pub(crate) fn new(
        verdict: Verdict,
        confidence: f64,
        explanation: String,
        source: NumberSource,
        normalized_number: String,
    ) -> Self {
        Self {
            verdict,
            confidence,
            explanation,
            source,
            normalized_number,
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_spam(&self) -> bool {
        self.verdict.is_spam()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn source(&self) -> NumberSource {
        self.source
    }

    /// Digits-only form of the input
    pub fn normalized_number(&self) -> &str {
        &self.normalized_number
    }
}
