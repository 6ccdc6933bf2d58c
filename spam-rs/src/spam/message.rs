//! Message classifier
//!
//! Scores free text on four signals: spam keywords, URLs, phone numbers and
//! repeated exclamation marks. Each signal is a fixed weight; the weighted
//! sum decides the verdict and, clamped, becomes the confidence.

use std::sync::Arc;
use tracing::debug;

use super::extract::extract;
use super::reference::SpamLexicon;
use super::types::{MessageResult, Verdict};

/// Weight per distinct keyword found
pub const KEYWORD_WEIGHT: f64 = 0.3;
/// Weight when at least one URL is present
pub const URL_WEIGHT: f64 = 0.4;
/// Weight when at least one phone number is present
pub const PHONE_WEIGHT: f64 = 0.2;
/// Weight when "!!!" appears
pub const PUNCTUATION_WEIGHT: f64 = 0.1;

/// Scores strictly above this are spam
pub const SPAM_THRESHOLD: f64 = 0.5;
/// Confidence never drops below this, even for a zero score
pub const MIN_CONFIDENCE: f64 = 0.6;
pub const MAX_CONFIDENCE: f64 = 0.95;

const EXCESSIVE_PUNCTUATION: &str = "!!!";

/// Keyword/pattern message classifier
#[derive(Debug, Clone)]
pub struct MessageClassifier {
    lexicon: Arc<SpamLexicon>,
}

impl MessageClassifier {
    pub fn new(lexicon: Arc<SpamLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &SpamLexicon {
        &self.lexicon
    }

    /// Classify a message
    ///
    /// Total over all input, including the empty string.
    pub fn classify(&self, text: &str) -> MessageResult {
        let lowered = text.to_lowercase();
        let keyword_count = self.lexicon.count_matches(&lowered);

        let extraction = extract(text);
        let has_urls = !extraction.urls.is_empty();
        let has_phones = !extraction.phones.is_empty();
        let has_punctuation = text.contains(EXCESSIVE_PUNCTUATION);

        let score = risk_score(keyword_count, has_urls, has_phones, has_punctuation);
        let verdict = Verdict::from(score > SPAM_THRESHOLD);
        let confidence = score.max(MIN_CONFIDENCE).min(MAX_CONFIDENCE);

        let mut risk_factors = Vec::new();
        if keyword_count > 0 {
            risk_factors.push(format!("{} spam keyword(s) detected", keyword_count));
        }
        if has_urls {
            risk_factors.push("Suspicious URLs found".to_string());
        }
        if has_phones {
            risk_factors.push("Phone numbers detected".to_string());
        }
        if has_punctuation {
            risk_factors.push("Excessive punctuation".to_string());
        }

        let explanation = explain(verdict, &risk_factors);

        debug!(
            keywords = keyword_count,
            urls = extraction.urls.len(),
            phones = extraction.phones.len(),
            score,
            %verdict,
            "Classified message"
        );

        MessageResult::new(verdict, confidence, explanation, extraction, risk_factors)
    }
}

impl Default for MessageClassifier {
    fn default() -> Self {
        Self::new(SpamLexicon::builtin())
    }
}

/// Weighted sum of the message signals, added in a fixed order
pub fn risk_score(
    keyword_count: usize,
    has_urls: bool,
    has_phones: bool,
    has_punctuation: bool,
) -> f64 {
    let mut score = 0.0;
    score += keyword_count as f64 * KEYWORD_WEIGHT;
    score += if has_urls { URL_WEIGHT } else { 0.0 };
    score += if has_phones { PHONE_WEIGHT } else { 0.0 };
    score += if has_punctuation { PUNCTUATION_WEIGHT } else { 0.0 };
    score
}

fn explain(verdict: Verdict, risk_factors: &[String]) -> String {
    match verdict {
        Verdict::Spam => format!(
            "High spam probability detected. {}.",
            risk_factors.join(", ")
        ),
        Verdict::NotSpam if !risk_factors.is_empty() => format!(
            "Low spam probability but some risk factors found: {}.",
            risk_factors.join(", ")
        ),
        Verdict::NotSpam => "No significant spam indicators detected.".to_string(),
    }
}

/// Classify a message with the built-in lexicon
pub fn classify_message(text: &str) -> MessageResult {
    MessageClassifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_obvious_spam() {
        let result = classify_message("FREE prize!!! click here http://bit.ly/x call 9876543210");

        assert_eq!(result.verdict(), Verdict::Spam);
        assert!(approx(result.confidence(), 0.95));
        assert_eq!(result.urls(), ["http://bit.ly/x"]);
        assert_eq!(result.phones(), ["9876543210"]);
        assert_eq!(
            result.risk_factors(),
            [
                "3 spam keyword(s) detected",
                "Suspicious URLs found",
                "Phone numbers detected",
                "Excessive punctuation",
            ]
        );
        assert_eq!(
            result.explanation(),
            "High spam probability detected. 3 spam keyword(s) detected, Suspicious URLs found, \
             Phone numbers detected, Excessive punctuation."
        );
    }

    #[test]
    fn test_clean_message() {
        let result = classify_message("Hi, are we still meeting at 3pm?");

        assert_eq!(result.verdict(), Verdict::NotSpam);
        assert!(approx(result.confidence(), 0.6));
        assert!(result.risk_factors().is_empty());
        assert_eq!(result.url_count(), 0);
        assert_eq!(result.phone_count(), 0);
        assert_eq!(result.explanation(), "No significant spam indicators detected.");
    }

    #[test]
    fn test_empty_message_is_classified() {
        let result = classify_message("");
        assert_eq!(result.verdict(), Verdict::NotSpam);
        assert!(approx(result.confidence(), MIN_CONFIDENCE));

        let result = classify_message("   \n\t");
        assert_eq!(result.verdict(), Verdict::NotSpam);
    }

    #[test]
    fn test_score_of_exactly_half_is_not_spam() {
        // one keyword + one phone = 0.3 + 0.2
        let result = classify_message("claim it at 9876543210");
        assert_eq!(result.verdict(), Verdict::NotSpam);
        assert!(approx(result.confidence(), 0.6));
        assert_eq!(
            result.explanation(),
            "Low spam probability but some risk factors found: \
             1 spam keyword(s) detected, Phone numbers detected."
        );

        // url + punctuation = 0.4 + 0.1
        let result = classify_message("see https://example.org !!!");
        assert_eq!(result.verdict(), Verdict::NotSpam);
    }

    #[test]
    fn test_just_over_threshold_is_spam() {
        // url + phone = 0.6
        let result = classify_message("details at https://example.org or 9876543210");
        assert_eq!(result.verdict(), Verdict::Spam);
        assert!(approx(result.confidence(), 0.6));
    }

    #[test]
    fn test_confidence_tracks_score_between_bounds() {
        // url + phone + punctuation = 0.7
        let result = classify_message("https://example.org 9876543210 !!!");
        assert_eq!(result.verdict(), Verdict::Spam);
        assert!(approx(result.confidence(), 0.7));
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = classify_message("free free FREE Free");
        assert_eq!(result.risk_factors(), ["1 spam keyword(s) detected"]);
        assert_eq!(result.verdict(), Verdict::NotSpam);
    }

    #[test]
    fn test_keyword_case_insensitive_but_extraction_preserves_case() {
        let result = classify_message("URGENT: Visit https://Example.COM/Path");
        assert_eq!(result.urls(), ["https://Example.COM/Path"]);
        assert_eq!(result.risk_factors()[0], "1 spam keyword(s) detected");
    }

    #[test]
    fn test_custom_lexicon() {
        let classifier = MessageClassifier::new(Arc::new(SpamLexicon::new(["jackpot", "lottery"])));
        let result = classifier.classify("Lottery jackpot inside, free!");
        assert_eq!(result.risk_factors(), ["2 spam keyword(s) detected"]);
        assert_eq!(result.verdict(), Verdict::Spam);
    }

    #[test]
    fn test_counts_match_sequences() {
        let texts = [
            "",
            "http://a http://a 9876543210 9876543210 9876543210",
            "winner!!! +91 9876543210 https://x.y/z",
            "plain text",
        ];
        for text in texts {
            let result = classify_message(text);
            assert_eq!(result.url_count(), result.urls().len());
            assert_eq!(result.phone_count(), result.phones().len());
            assert!(result.confidence() >= MIN_CONFIDENCE);
            assert!(result.confidence() <= MAX_CONFIDENCE);
        }
    }

    #[test]
    fn test_risk_score_weights() {
        assert!(approx(risk_score(0, false, false, false), 0.0));
        assert!(approx(risk_score(2, false, false, false), 0.6));
        assert!(approx(risk_score(1, true, true, true), 1.0));
    }
}
