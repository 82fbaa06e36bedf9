//! skillmatch Core Engine
//!
//! Finds known skill and job-title phrases in free-form, noisy text. Typos,
//! punctuation and word order inside a phrase are tolerated.
//!
//! ```text
//! raw text ─▶ normalize ─▶ candidate substrings ─▶ extract (4,3,2,1-word passes)
//!                                                     │ scores via score::Scorer
//!                                                     ▼
//!                                        match records + final remainder
//! ```
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated literal search via memchr
//! - `parallel` - Parallel substring processing via rayon for large inputs
//!
//! # Example
//!
//! ```rust
//! use skillmatch_core::{Extractor, Vocabulary};
//!
//! let vocabulary = Vocabulary::from_titles(["Data Science", "Python (Programming Language)"]);
//! let extraction = Extractor::new().extract("I do science data in Pyton.", &vocabulary);
//!
//! assert_eq!(extraction.matched_entries(), vec!["data science", "python"]);
//! assert_eq!(vocabulary.display_title("python"), Some("Python"));
//! ```

pub mod error;
pub mod extract;
pub mod highlight;
pub mod json;
pub mod normalize;
pub mod score;
pub mod vocabulary;

// Re-export main types at crate root
pub use error::{MatchError, MatchResult};
pub use extract::{
    extract, extract_phrases, CutoffPolicy, Extraction, Extractor, ExtractorConfig,
    DEFAULT_CUTOFF, DEFAULT_MAX_WINDOW,
};
pub use highlight::{highlight, HighlightStyle};
pub use json::{extract_json, ExtractInput, ExtractOutput};
pub use normalize::{normalize, Normalizer, StopWords};
pub use score::{
    best_match, match_all, score, IndelRatio, LevenshteinRatio, MatchRecord, OrderInsensitive,
    OrderSensitive, PhraseScorer, Scorer, Similarity,
};
pub use vocabulary::Vocabulary;
