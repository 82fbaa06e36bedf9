//! Window scanning over one candidate substring

use crate::score::{best_match, MatchRecord, Scorer};
use tracing::trace;

/// Cursor over the `width`-token spans of a token array.
///
/// `position` is the index of the first token of the current span. A miss
/// advances by one; a match consumes the span and advances by `width`, so the
/// `width - 1` spans overlapping it are never evaluated.
#[derive(Debug)]
pub struct WindowCursor<'a> {
    tokens: Vec<&'a str>,
    width: usize,
    position: usize,
}

impl<'a> WindowCursor<'a> {
    pub fn new(text: &'a str, width: usize) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            width: width.max(1),
            position: 0,
        }
    }

    /// Number of spans in the token array, evaluated or not
    pub fn span_count(&self) -> usize {
        (self.tokens.len() + 1).saturating_sub(self.width)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Current span joined with single spaces, `None` once exhausted
    pub fn current(&self) -> Option<String> {
        let end = self.position + self.width;
        (end <= self.tokens.len()).then(|| self.tokens[self.position..end].join(" "))
    }

    /// Step past an unmatched span
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Step past a matched span and everything overlapping it
    pub fn consume(&mut self) {
        self.position += self.width;
    }
}

/// Matches and leftover text from cutting one substring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cut {
    pub matches: Vec<MatchRecord>,
    pub remainder: Vec<String>,
}

/// Byte offset of the first literal occurrence of `needle` in `haystack`
#[inline]
pub fn find_literal(haystack: &str, needle: &str) -> Option<usize> {
    #[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
    {
        memchr::memmem::find(haystack.as_bytes(), needle.as_bytes())
    }

    #[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
    {
        haystack.find(needle)
    }
}

/// Greedily match `width`-word spans of `substring` against `vocabulary`.
///
/// Each match splits the unconsumed text at the first literal occurrence of
/// the matched span: the piece before it becomes remainder, scanning goes on
/// in the piece after it. Whatever is left unconsumed at the end is also
/// remainder.
///
/// The occurrence search is literal, not token-aligned: with `"mysql sql"`
/// and entry `sql`, the match on the second token splits inside `mysql`,
/// leaving `["my", "sql"]` as remainder.
pub fn cut<S, T>(substring: &str, width: usize, vocabulary: &[T], cutoff: u8, scorer: &S) -> Cut
where
    S: Scorer + ?Sized,
    T: AsRef<str>,
{
    let collapsed = substring.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Cut::default();
    }
    if vocabulary.is_empty() {
        return Cut {
            matches: Vec::new(),
            remainder: vec![collapsed],
        };
    }

    let mut matches = Vec::new();
    let mut remainder = Vec::new();
    let mut rest: &str = &collapsed;
    let mut cursor = WindowCursor::new(&collapsed, width);

    while let Some(span) = cursor.current() {
        let Some(record) = best_match(scorer, &span, vocabulary, cutoff) else {
            cursor.advance();
            continue;
        };

        trace!(
            span = %record.source_text,
            entry = %record.matched_entry,
            score = record.score,
            width,
            "window matched"
        );

        if let Some(at) = find_literal(rest, &span) {
            let left = rest[..at].trim();
            if !left.is_empty() {
                remainder.push(left.to_string());
            }
            rest = rest[at + span.len()..].trim();
        }

        matches.push(record);
        cursor.consume();
    }

    if !rest.is_empty() {
        remainder.push(rest.to_string());
    }

    Cut { matches, remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::PhraseScorer;
    use pretty_assertions::assert_eq;

    fn scorer() -> PhraseScorer {
        PhraseScorer::default()
    }

    #[test]
    fn cursor_spans() {
        let mut cursor = WindowCursor::new("a b c d", 2);
        assert_eq!(cursor.span_count(), 3);
        assert_eq!(cursor.current().as_deref(), Some("a b"));
        cursor.advance();
        assert_eq!(cursor.current().as_deref(), Some("b c"));
        cursor.consume();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_too_few_tokens() {
        let cursor = WindowCursor::new("one two", 3);
        assert_eq!(cursor.span_count(), 0);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn match_in_middle_splits_both_sides() {
        let cut = cut("love python programming daily", 2, &["python programming"], 90, &scorer());
        assert_eq!(
            cut.matches,
            vec![MatchRecord::new("python programming", "python programming", 100)]
        );
        assert_eq!(cut.remainder, vec!["love", "daily"]);
    }

    #[test]
    fn overlapping_windows_are_skipped() {
        // "data data" would also match at position 1 if it were evaluated
        let cut = cut("data data data", 2, &["data data"], 90, &scorer());
        assert_eq!(cut.matches.len(), 1);
        assert_eq!(cut.remainder, vec!["data"]);
    }

    #[test]
    fn repeated_phrase_matches_twice() {
        let cut = cut("python python", 1, &["python"], 90, &scorer());
        assert_eq!(cut.matches.len(), 2);
        assert!(cut.remainder.is_empty());
    }

    #[test]
    fn literal_occurrence_inside_earlier_token() {
        let cut = cut("mysql sql", 1, &["sql"], 90, &scorer());
        assert_eq!(cut.matches, vec![MatchRecord::new("sql", "sql", 100)]);
        assert_eq!(cut.remainder, vec!["my", "sql"]);
    }

    #[test]
    fn no_match_keeps_whole_substring() {
        let cut = cut("gardening cooking", 1, &["python"], 90, &scorer());
        assert!(cut.matches.is_empty());
        assert_eq!(cut.remainder, vec!["gardening cooking"]);
    }

    #[test]
    fn empty_vocabulary_short_circuits() {
        let empty: [&str; 0] = [];
        let cut = cut("gardening  cooking", 1, &empty, 0, &scorer());
        assert_eq!(cut.remainder, vec!["gardening cooking"]);
    }

    #[test]
    fn blank_substring() {
        assert_eq!(cut("   ", 1, &["python"], 0, &scorer()), Cut::default());
    }

    #[test]
    fn find_literal_first_occurrence() {
        assert_eq!(find_literal("mysql sql", "sql"), Some(2));
        assert_eq!(find_literal("excel", "sql"), None);
    }
}
