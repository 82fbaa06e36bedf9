//! Fuzzy Scoring
//!
//! Similarity in 0..=100 between a candidate span and a vocabulary entry.
//!
//! - Single words: order-sensitive edit similarity
//! - Multi-word phrases (both sides): order-insensitive token-sort similarity,
//!   so "science data" still finds "data science"
//!
//! The metric underneath is pluggable through [`Similarity`]; the ordering
//! policy through [`Scorer`].
//!
//! # Example
//!
//! ```rust
//! use skillmatch_core::score::{best_match, PhraseScorer, Scorer};
//!
//! let scorer: PhraseScorer = PhraseScorer::default();
//! assert_eq!(scorer.score("science data", "data science"), 100);
//!
//! let m = best_match(&scorer, "javscript", &["java", "javascript"], 85).unwrap();
//! assert_eq!(m.matched_entry, "javascript");
//! ```

mod strategies;

pub use strategies::{token_sort, to_score, IndelRatio, LevenshteinRatio, Similarity};

use serde::{Deserialize, Serialize};

/// One accepted match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Span of the input that matched
    pub source_text: String,
    /// Vocabulary entry it matched
    pub matched_entry: String,
    pub score: u8,
}

impl MatchRecord {
    pub fn new(source_text: impl Into<String>, matched_entry: impl Into<String>, score: u8) -> Self {
        Self {
            source_text: source_text.into(),
            matched_entry: matched_entry.into(),
            score,
        }
    }
}

/// Scores two strings on the integer 0..=100 scale
pub trait Scorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Compares the strings as written
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderSensitive<M = IndelRatio>(pub M);

impl<M: Similarity> Scorer for OrderSensitive<M> {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_score(self.0.similarity(a, b))
    }
}

/// Compares the strings after sorting their word tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderInsensitive<M = IndelRatio>(pub M);

impl<M: Similarity> Scorer for OrderInsensitive<M> {
    fn score(&self, a: &str, b: &str) -> u8 {
        to_score(self.0.similarity(&token_sort(a), &token_sort(b)))
    }
}

/// Order-insensitive when both sides are multi-word, order-sensitive otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseScorer<M = IndelRatio> {
    sensitive: OrderSensitive<M>,
    insensitive: OrderInsensitive<M>,
}

impl<M: Similarity + Clone> PhraseScorer<M> {
    pub fn new(metric: M) -> Self {
        Self {
            sensitive: OrderSensitive(metric.clone()),
            insensitive: OrderInsensitive(metric),
        }
    }
}

impl<M: Similarity> Scorer for PhraseScorer<M> {
    fn score(&self, a: &str, b: &str) -> u8 {
        if is_multi_word(a) && is_multi_word(b) {
            self.insensitive.score(a, b)
        } else {
            self.sensitive.score(a, b)
        }
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, a: &str, b: &str) -> u8 {
        (**self).score(a, b)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, a: &str, b: &str) -> u8 {
        (**self).score(a, b)
    }
}

/// True when the trimmed string has an internal space
#[inline]
pub fn is_multi_word(s: &str) -> bool {
    s.trim().contains(char::is_whitespace)
}

/// Score with the default phrase policy over [`IndelRatio`]
pub fn score(a: &str, b: &str) -> u8 {
    PhraseScorer::<IndelRatio>::default().score(a, b)
}

/// Best-scoring entry at or above `cutoff`.
///
/// Ties go to the earliest entry. Cutoffs above 100 behave as 100.
pub fn best_match<S, T>(scorer: &S, query: &str, vocabulary: &[T], cutoff: u8) -> Option<MatchRecord>
where
    S: Scorer + ?Sized,
    T: AsRef<str>,
{
    let cutoff = cutoff.min(100);
    let mut best: Option<(u8, &str)> = None;

    for entry in vocabulary {
        let entry = entry.as_ref();
        let s = scorer.score(query, entry);
        if best.map_or(true, |(top, _)| s > top) {
            best = Some((s, entry));
            if s == 100 {
                break;
            }
        }
    }

    best.filter(|(s, _)| *s >= cutoff)
        .map(|(s, entry)| MatchRecord::new(query, entry, s))
}

/// Every entry at or above `cutoff`, best first, stable by vocabulary order
pub fn match_all<S, T>(scorer: &S, query: &str, vocabulary: &[T], cutoff: u8) -> Vec<MatchRecord>
where
    S: Scorer + ?Sized,
    T: AsRef<str>,
{
    let cutoff = cutoff.min(100);
    let mut matches: Vec<MatchRecord> = vocabulary
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|entry| {
            let s = scorer.score(query, entry);
            (s >= cutoff).then(|| MatchRecord::new(query, entry, s))
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
