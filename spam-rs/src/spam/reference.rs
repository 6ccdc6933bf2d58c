//! Static reference data: spam keyword lexicon and number denylist
//!
//! Both tables are built once and never mutated afterwards. The built-in
//! tables live behind `Lazy` statics; replacements can be loaded from plain
//! text files (one entry per line, `#` starts a comment).

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{Result, SpamError};

use super::number::normalize_number;

const BUILTIN_KEYWORDS: &[&str] = &[
    "free",
    "winner",
    "urgent",
    "claim",
    "prize",
    "cash",
    "offer",
    "limited time",
    "click here",
    "act now",
    "congratulations",
    "selected",
    "bonus",
    "reward",
];

const BUILTIN_DENYLIST: &[&str] = &[
    "7596755829",
    "8327195532",
    "8724312970",
    "6568285023",
    "8142651196",
    "6520532744",
    "7488494989",
    "8356437284",
    "9009669044",
    "8216285980",
];

static BUILTIN_LEXICON: Lazy<Arc<SpamLexicon>> =
    Lazy::new(|| Arc::new(SpamLexicon::new(BUILTIN_KEYWORDS.iter().copied())));

static BUILTIN_DENY: Lazy<Arc<DenyList>> =
    Lazy::new(|| Arc::new(DenyList::new(BUILTIN_DENYLIST.iter().copied())));

/// Lookup contract for known-spam numbers
///
/// `number` is always the digits-only normalized form.
#[cfg_attr(test, mockall::automock)]
pub trait NumberLookup: Send + Sync {
    fn contains(&self, number: &str) -> bool;
}

/// Case-insensitive set of spam keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpamLexicon {
    keywords: BTreeSet<String>,
}

impl SpamLexicon {
    /// Build a lexicon; keywords are lower-cased, blanks dropped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Shared handle to the built-in keyword list
    pub fn builtin() -> Arc<SpamLexicon> {
        Arc::clone(&BUILTIN_LEXICON)
    }

    /// Load a keyword file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lexicon = Self::new(read_entries(path.as_ref())?);
        if lexicon.is_empty() {
            return Err(SpamError::Config(format!(
                "Lexicon file {} contains no keywords",
                path.as_ref().display()
            )));
        }
        info!("Loaded {} spam keywords from {}", lexicon.len(), path.as_ref().display());
        Ok(lexicon)
    }

    /// Keywords occurring anywhere in `lowered`, each reported once
    ///
    /// `lowered` must already be lower-cased. Matching is plain substring
    /// search, so "freedom" counts as "free".
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keywords
            .iter()
            .filter(move |k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn count_matches(&self, lowered: &str) -> usize {
        self.matches(lowered).count()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(&keyword.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Exact-match set of known spam numbers, digits only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyList {
    numbers: HashSet<String>,
}

impl DenyList {
    /// Build a denylist; entries are normalized to digits, empty ones dropped
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let numbers = numbers
            .into_iter()
            .map(|n| normalize_number(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        Self { numbers }
    }

    /// Shared handle to the built-in denylist
    pub fn builtin() -> Arc<DenyList> {
        Arc::clone(&BUILTIN_DENY)
    }

    /// Load a denylist file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let list = Self::new(read_entries(path.as_ref())?);
        info!("Loaded {} denylisted numbers from {}", list.len(), path.as_ref().display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl NumberLookup for DenyList {
    fn contains(&self, number: &str) -> bool {
        self.numbers.contains(number)
    }
}

/// Non-blank, non-comment lines of a reference file
fn read_entries(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SpamError::Config(format!("Failed to read reference file {}: {}", path.display(), e))
    })?;

    Ok(content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
