//! Vocabulary of canonical phrases
//!
//! Entries are folded like input text (punctuation stripped, lowercase,
//! single spaces) and kept in caller order. When
//! built from display titles, each entry remembers the title it came from so
//! a matched entry can be presented the way the source data spells it.

use crate::normalize::strip_punctuation;
use ahash::RandomState;
use std::collections::HashMap;

/// Ordered, read-only set of canonical phrases
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<String>,
    display: HashMap<String, String, RandomState>,
}

impl Vocabulary {
    /// Build from phrases, folded the way input text is: punctuation
    /// stripped, lowercased, whitespace collapsed
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| canonical(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();

        Self {
            entries,
            display: HashMap::default(),
        }
    }

    /// Build from display titles such as `"Blender (3D Software)"`.
    ///
    /// Bracketed qualifiers are dropped from both the entry and its display
    /// form. The first title wins when two collapse to the same entry.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut display: HashMap<String, String, RandomState> = HashMap::default();

        for title in titles {
            let shown = collapse(&strip_qualifiers(title.as_ref()));
            let entry = canonical(&shown);
            if entry.is_empty() {
                continue;
            }
            display.entry(entry.clone()).or_insert(shown);
            entries.push(entry);
        }

        Self { entries, display }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Entries of exactly `width` words, in vocabulary order
    pub fn with_word_count(&self, width: usize) -> Vec<&str> {
        self.iter()
            .filter(|e| e.split_whitespace().count() == width)
            .collect()
    }

    /// Display title for a matched entry, if built via [`Vocabulary::from_titles`]
    pub fn display_title(&self, entry: &str) -> Option<&str> {
        self.display.get(entry).map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Remove `(...)` and `[...]` qualifiers; an unclosed bracket is kept as text.
///
/// A qualifier runs from an opening bracket to the nearest closing bracket of
/// either kind.
pub fn strip_qualifiers(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut rest = title;

    while let Some(open) = rest.find(&['(', '['][..]) {
        let Some(close) = rest[open..].find(&[')', ']'][..]) else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Same folding the normalizer applies to input text
fn canonical(s: &str) -> String {
    strip_punctuation(s).to_lowercase()
}
