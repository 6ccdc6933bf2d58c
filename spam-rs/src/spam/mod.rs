//! Spam classification core
//!
//! Two independent, stateless classifiers: one for free-text messages and
//! one for phone numbers. Neither does I/O and both are total over their
//! input.

pub mod extract;
pub mod message;
pub mod number;
pub mod random;
pub mod reference;
pub mod types;

pub use extract::{extract, extract_phones, extract_urls};
pub use message::{classify_message, MessageClassifier};
pub use number::{classify_number, normalize_number, NumberClassifier};
pub use random::{FixedSequence, RandomSource, SeededRandom, ThreadRandom};
pub use reference::{DenyList, NumberLookup, SpamLexicon};
pub use types::*;
