//! Phone number classifier
//!
//! Exact denylist lookup first. Unknown numbers fall back to a suffix
//! heuristic, and numbers without a suspicious suffix get a randomized
//! verdict drawn from the injected [`RandomSource`].

use std::sync::Arc;
use tracing::debug;

use super::random::{RandomSource, ThreadRandom};
use super::reference::{DenyList, NumberLookup};
use super::types::{NumberResult, NumberSource, Verdict};

/// Confidence reported for a denylist hit
pub const DATABASE_CONFIDENCE: f64 = 0.95;
/// Confidence reported for a suspicious suffix
pub const PATTERN_CONFIDENCE: f64 = 0.75;

/// Suffixes that mark a number as suspicious
pub const SUSPICIOUS_PATTERNS: &[&str] = &["000", "111", "999", "123", "456"];

/// Only this many trailing digits are checked for suspicious patterns
const SUFFIX_WINDOW: usize = 3;

/// Random draws above this flag an otherwise unknown number as spam
const RANDOM_SPAM_CUTOFF: f64 = 0.7;
const RANDOM_CONFIDENCE_FLOOR: f64 = 0.6;
const RANDOM_CONFIDENCE_SPAN: f64 = 0.4;
/// Largest randomized confidence; keeps the range half-open at 1.0
const RANDOM_CONFIDENCE_CEILING: f64 = 1.0 - f64::EPSILON;

/// Strip everything except ASCII digits
pub fn normalize_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Last three digits of a normalized number (all of them if shorter)
fn suffix_window(normalized: &str) -> &str {
    // normalized is ASCII, so byte offsets are char offsets
    &normalized[normalized.len().saturating_sub(SUFFIX_WINDOW)..]
}

/// Denylist + heuristic number classifier
#[derive(Clone)]
pub struct NumberClassifier {
    denylist: Arc<dyn NumberLookup>,
    random: Arc<dyn RandomSource>,
}

impl NumberClassifier {
    pub fn new(denylist: Arc<dyn NumberLookup>, random: Arc<dyn RandomSource>) -> Self {
        Self { denylist, random }
    }

    /// Built-in denylist with the given random source
    pub fn with_random(random: Arc<dyn RandomSource>) -> Self {
        Self::new(DenyList::builtin(), random)
    }

    /// Classify a phone number
    ///
    /// Never fails; any string, including one without digits, yields a result.
    pub fn classify(&self, raw: &str) -> NumberResult {
        let normalized = normalize_number(raw);

        if self.denylist.contains(&normalized) {
            debug!(number = %normalized, "Number found in denylist");
            return NumberResult::new(
                Verdict::Spam,
                DATABASE_CONFIDENCE,
                "Number found in spam database with high confidence.".to_string(),
                NumberSource::Database,
                normalized,
            );
        }

        let window = suffix_window(&normalized);
        if let Some(pattern) = SUSPICIOUS_PATTERNS.iter().find(|p| window.contains(**p)) {
            debug!(number = %normalized, pattern, "Suspicious number suffix");
            let explanation = format!(
                "Detected suspicious number pattern ({}). Confidence: {:.1}%",
                pattern,
                PATTERN_CONFIDENCE * 100.0
            );
            return NumberResult::new(
                Verdict::Spam,
                PATTERN_CONFIDENCE,
                explanation,
                NumberSource::Heuristic,
                normalized,
            );
        }

        // Verdict and confidence come from two independent draws
        let verdict = Verdict::from(self.random.next_f64() > RANDOM_SPAM_CUTOFF);
        // a draw just under 1.0 would otherwise round up to exactly 1.0
        let confidence = (self.random.next_f64() * RANDOM_CONFIDENCE_SPAN
            + RANDOM_CONFIDENCE_FLOOR)
            .min(RANDOM_CONFIDENCE_CEILING);

        let explanation = match verdict {
            Verdict::Spam => format!(
                "Classified as spam based on behavioral patterns. Confidence: {:.1}%",
                confidence * 100.0
            ),
            Verdict::NotSpam => format!(
                "Classified as legitimate number. Confidence: {:.1}%",
                confidence * 100.0
            ),
        };

        debug!(number = %normalized, %verdict, confidence, "Randomized number verdict");

        NumberResult::new(
            verdict,
            confidence,
            explanation,
            NumberSource::Heuristic,
            normalized,
        )
    }
}

impl Default for NumberClassifier {
    fn default() -> Self {
        Self::with_random(Arc::new(ThreadRandom))
    }
}

impl std::fmt::Debug for NumberClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberClassifier").finish_non_exhaustive()
    }
}

/// Classify a number with the built-in denylist and thread randomness
pub fn classify_number(raw: &str) -> NumberResult {
    NumberClassifier::default().classify(raw)
}
