//! spam-rs: heuristic spam detection for messages and phone numbers
//!
//! Two stateless classifiers:
//!
//! - **Messages**: keyword lexicon, URL and phone extraction, and a punctuation
//!   check feed a weighted risk score.
//! - **Phone numbers**: exact denylist lookup, then a suffix heuristic, then a
//!   randomized fallback drawn from an injectable random source.
//!
//! # Example
//!
//! ```
//! use spam_rs::spam::{classify_message, classify_number, NumberSource, Verdict};
//!
//! let message = classify_message("FREE prize!!! click here http://bit.ly/x");
//! assert_eq!(message.verdict(), Verdict::Spam);
//!
//! let number = classify_number("+91 75967-55829");
//! assert_eq!(number.normalized_number(), "917596755829");
//!
//! let number = classify_number("7596755829");
//! assert_eq!(number.source(), NumberSource::Database);
//! ```
//!
//! # Modules
//!
//! - [`spam`]: the classifiers and their reference data
//! - [`service`]: input validation and async wrapper for callers
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - [`logging`]: tracing setup

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod spam;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamError};
pub use service::{DetectionService, SpamDetection};
