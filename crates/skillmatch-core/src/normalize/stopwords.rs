//! Stop-word sets and stop-word run splitting

use ahash::RandomState;
use std::collections::HashSet;

/// English function words (the common NLP toolkit list).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Straight, right single quote and modifier-letter apostrophe
const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{02bc}'];

lazy_static::lazy_static! {
    static ref ENGLISH_STOP_WORDS: StopWords = StopWords::from_words(ENGLISH.iter().copied());
}

/// A language-specific set of stop-words.
///
/// Lookups are on lowercase tokens. Entries containing an apostrophe (straight
/// or curly) are also stored without it, since punctuation is stripped before
/// the lookup happens (`don't` and `don’t` both arrive as `dont`).
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String, RandomState>,
}

impl StopWords {
    /// The shared English set
    pub fn english() -> &'static StopWords {
        &ENGLISH_STOP_WORDS
    }

    /// Build a set from arbitrary words (any language)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::with_hasher(RandomState::new());
        for word in words {
            let lower = word.as_ref().trim().to_lowercase();
            if lower.is_empty() {
                continue;
            }
            if lower.contains(APOSTROPHES) {
                set.insert(lower.replace(APOSTROPHES, ""));
            }
            set.insert(lower);
        }
        Self { words: set }
    }

    /// Check a lowercase token
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Split a lowercase chunk into maximal runs of content tokens.
    ///
    /// Stop-words end the current run and are discarded. Other
    /// single-character tokens are dropped without ending it, so
    /// `python 3 programming` stays one run. Runs are re-joined with single
    /// spaces.
    pub fn split_runs(&self, chunk: &str) -> Vec<String> {
        let mut runs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for token in chunk.split_whitespace() {
            if self.contains(token) {
                if !current.is_empty() {
                    runs.push(current.join(" "));
                    current.clear();
                }
            } else if !is_single_char(token) {
                current.push(token);
            }
        }
        if !current.is_empty() {
            runs.push(current.join(" "));
        }

        runs
    }
}

fn is_single_char(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some() && chars.next().is_none()
}
