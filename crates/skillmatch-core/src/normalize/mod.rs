//! Text Normalization
//!
//! Turns raw user text into ordered, lowercase candidate substrings:
//!
//! 1. Sentence split at `.` `!` `?` `•` followed by whitespace, and at newlines
//! 2. Punctuation split at `,` `;` `:` adjacent to whitespace, then strip
//!    remaining punctuation and collapse whitespace
//! 3. Stop-word split into maximal runs of content words; stray
//!    single characters are dropped
//! 4. Case fold and trim
//!
//! Skills rarely cross a sentence, a comma or a function word, so every cut
//! narrows the search space for the extractor.
//!
//! # Example
//!
//! ```rust
//! use skillmatch_core::normalize::normalize;
//!
//! let parts = normalize("I love Python programming, and SQL databases.");
//! assert_eq!(parts, vec!["love python programming", "sql databases"]);
//! ```

mod splitter;
mod stopwords;

pub use splitter::{split_punctuation, split_sentences, strip_punctuation};
pub use stopwords::StopWords;

lazy_static::lazy_static! {
    static ref ENGLISH: Normalizer = Normalizer::new(StopWords::english().clone());
}

/// Normalization pipeline bound to one stop-word set
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: StopWords,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopWords::english().clone())
    }
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// The shared English normalizer
    pub fn english() -> &'static Normalizer {
        &ENGLISH
    }

    /// Run the full pipeline over `text`
    pub fn normalize(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .flat_map(split_punctuation)
            .map(strip_punctuation)
            .flat_map(|chunk| self.stop_words.split_runs(&chunk.to_lowercase()))
            .map(|run| run.trim().to_string())
            .filter(|run| !run.is_empty())
            .collect()
    }
}

/// Normalize with the English stop-word set
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::english().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\n ").is_empty());
    }

    #[test]
    fn stop_word_only_sentence() {
        assert!(normalize("It is what it is. And so on!").is_empty());
    }

    #[test]
    fn full_pipeline() {
        assert_eq!(
            normalize("I have worked with Machine Learning; also Data-Science!\nMostly in Python."),
            vec!["worked", "machine learning", "also datascience", "mostly", "python"]
        );
    }

    #[test]
    fn bullets_and_colons() {
        assert_eq!(
            normalize("Skills: • Excel • Project Management"),
            vec!["skills", "excel", "project management"]
        );
    }

    #[test]
    fn idempotent_on_normalized_substrings() {
        for part in normalize("My skills are UX design, scientific writing and SQL.") {
            assert_eq!(normalize(&part), vec![part.clone()]);
        }
    }

    #[test]
    fn typographic_punctuation() {
        assert_eq!(
            normalize("I don’t know… “Python” — it’s great"),
            vec!["know python", "great"]
        );
    }

    #[test]
    fn version_digits_do_not_break_a_phrase() {
        assert_eq!(normalize("Python 3 programming"), vec!["python programming"]);
    }

    #[test]
    fn rejoining_with_spaces_merges_runs() {
        let parts = normalize("I love python programming and sql databases");
        assert_eq!(parts, vec!["love python programming", "sql databases"]);
        // nothing separates the runs once the stop-word is gone
        assert_eq!(normalize(&parts.join(" ")), vec!["love python programming sql databases"]);
        assert_eq!(normalize(&parts.join(". ")), parts);
    }

    #[test]
    fn custom_stop_words() {
        let normalizer = Normalizer::new(StopWords::from_words(["und"]));
        assert_eq!(normalizer.normalize("Python und SQL"), vec!["python", "sql"]);
    }
}
