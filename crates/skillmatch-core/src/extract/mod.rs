//! Greedy Multi-Pass Phrase Extraction
//!
//! Candidate substrings are scanned with shrinking windows, 4 words down to 1.
//! Each pass compares every window against the vocabulary entries of the same
//! word count, consumes the best match at or above the cutoff, and hands the
//! unmatched text to the next, narrower pass. Longer phrases are the more
//! specific signal, so they get first pick.
//!
//! ```text
//! "love python programming" ──w=2──▶ match "python programming"
//!                                    remainder ["love"] ──w=1──▶ ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use skillmatch_core::extract::extract;
//!
//! let extraction = extract(
//!     "I love python programming and sql databases",
//!     &["python programming", "sql"],
//!     90,
//! );
//! assert_eq!(extraction.matched_entries(), vec!["python programming", "sql"]);
//! assert_eq!(extraction.remainder, vec!["love", "databases"]);
//! ```

mod engine;
mod window;

pub use engine::{
    extract, extract_phrases, CutoffPolicy, Extraction, Extractor, ExtractorConfig,
    DEFAULT_CUTOFF, DEFAULT_MAX_WINDOW,
};
pub use window::{cut, find_literal, Cut, WindowCursor};
