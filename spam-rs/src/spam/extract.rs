//! URL and phone number extraction

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Extraction;

// Scheme followed by the longest run of non-whitespace.
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

// Indian mobile number: ten digits starting 6-9, optional +91 / 91 prefix
// joined by an optional space or hyphen. The word boundaries keep the match
// from starting or ending inside a longer digit run; they are ASCII-only, so
// accented letters next to the digits do not block a match.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+91[\s-]?|(?-u:\b)91[\s-]?|(?-u:\b))[6-9][0-9]{9}(?-u:\b)")
        .expect("phone pattern is valid")
});

/// All URLs in `text`, in order, duplicates kept
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// All phone numbers in `text`, in order, duplicates kept
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Run both extractors over `text`
pub fn extract(text: &str) -> Extraction {
    Extraction {
        urls: extract_urls(text),
        phones: extract_phones(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let extraction = extract("");
        assert!(extraction.urls.is_empty());
        assert!(extraction.phones.is_empty());
    }

    #[test]
    fn test_url_runs_to_whitespace() {
        let urls = extract_urls("visit https://example.com/a?b=c, now or http://bit.ly/x!");
        assert_eq!(urls, vec!["https://example.com/a?b=c,", "http://bit.ly/x!"]);
    }

    #[test]
    fn test_url_requires_scheme() {
        assert!(extract_urls("www.example.com ftp://files.example.com").is_empty());
        assert!(extract_urls("http:// nothing after the scheme").is_empty());
    }

    #[test]
    fn test_urls_keep_duplicates_in_order() {
        let urls = extract_urls("http://a.in http://b.in http://a.in");
        assert_eq!(urls, vec!["http://a.in", "http://b.in", "http://a.in"]);
    }

    #[test]
    fn test_plain_mobile_number() {
        assert_eq!(extract_phones("call 9876543210 today"), vec!["9876543210"]);
        assert_eq!(extract_phones("(6123456789)"), vec!["6123456789"]);
    }

    #[test]
    fn test_number_must_start_with_six_to_nine() {
        assert!(extract_phones("call 5876543210").is_empty());
        assert!(extract_phones("call 1234567890").is_empty());
    }

    #[test]
    fn test_country_code_prefixes() {
        assert_eq!(extract_phones("+91 9876543210"), vec!["+91 9876543210"]);
        assert_eq!(extract_phones("+91-9876543210"), vec!["+91-9876543210"]);
        assert_eq!(extract_phones("+919876543210"), vec!["+919876543210"]);
        assert_eq!(extract_phones("ring 919876543210"), vec!["919876543210"]);
        assert_eq!(extract_phones("ring 91 9876543210"), vec!["91 9876543210"]);
    }

    #[test]
    fn test_longer_digit_runs_are_not_phones() {
        assert!(extract_phones("98765432101").is_empty());
        assert!(extract_phones("198765432109").is_empty());
        assert!(extract_phones("order9876543210").is_empty());
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        assert_eq!(extract_phones("é9876543210"), vec!["9876543210"]);
        assert_eq!(extract_phones("tél:9876543210ü"), vec!["9876543210"]);
        assert!(extract_phones("x9876543210").is_empty());
    }

    #[test]
    fn test_multiple_phones_in_order() {
        let phones = extract_phones("9876543210, 7000000000 and 9876543210");
        assert_eq!(phones, vec!["9876543210", "7000000000", "9876543210"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "FREE prize!!! https://win.example/claim +91 9876543210 or 8123456789";
        let first = extract(text);

        let rejoined = first
            .urls
            .iter()
            .chain(first.phones.iter())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        let second = extract(&rejoined);

        assert_eq!(first, second);
    }
}
