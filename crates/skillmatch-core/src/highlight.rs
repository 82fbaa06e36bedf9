//! Mark extracted phrases inside the original text

/// Marker pair used around highlighted phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStyle {
    /// Yellow on blue terminal colouring
    #[default]
    Ansi,
    /// `[[phrase]]`
    Brackets,
}

impl HighlightStyle {
    pub fn markers(&self) -> (&'static str, &'static str) {
        match self {
            Self::Ansi => ("\x1b[44;33m", "\x1b[0m"),
            Self::Brackets => ("[[", "]]"),
        }
    }
}

/// Wrap every occurrence of each phrase in `text`.
///
/// Matching ignores ASCII case. Phrases of one character are skipped. A phrase
/// ending in `s` that does not occur is tried again in singular form. When
/// phrases overlap, the one listed first keeps the text.
pub fn highlight<S: AsRef<str>>(text: &str, phrases: &[S], style: HighlightStyle) -> String {
    let haystack = text.to_ascii_lowercase();
    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for phrase in phrases {
        let phrase = phrase.as_ref().trim().to_ascii_lowercase();
        if phrase.chars().count() <= 1 {
            continue;
        }

        let mut found = occurrences(&haystack, &phrase);
        if found.is_empty() {
            if let Some(singular) = phrase.strip_suffix('s').filter(|s| s.chars().count() > 1) {
                found = occurrences(&haystack, singular);
            }
        }

        for range in found {
            if ranges.iter().all(|&(s, e)| range.1 <= s || range.0 >= e) {
                ranges.push(range);
            }
        }
    }

    ranges.sort_unstable();

    let (open, close) = style.markers();
    let mut out = String::with_capacity(text.len() + ranges.len() * (open.len() + close.len()));
    let mut last = 0;
    for (start, end) in ranges {
        out.push_str(&text[last..start]);
        out.push_str(open);
        out.push_str(&text[start..end]);
        out.push_str(close);
        last = end;
    }
    out.push_str(&text[last..]);

    out
}

fn occurrences(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    haystack
        .match_indices(needle)
        .map(|(at, m)| (at, at + m.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_phrases_case_insensitively() {
        let out = highlight("I use Python and SQL daily", &["python", "sql"], HighlightStyle::Brackets);
        assert_eq!(out, "I use [[Python]] and [[SQL]] daily");
    }

    #[test]
    fn plural_falls_back_to_singular() {
        let out = highlight("one database only", &["databases"], HighlightStyle::Brackets);
        assert_eq!(out, "one [[database]] only");
    }

    #[test]
    fn single_characters_are_skipped() {
        let out = highlight("R and C", &["r", "c"], HighlightStyle::Brackets);
        assert_eq!(out, "R and C");
    }

    #[test]
    fn first_phrase_wins_overlap() {
        let out = highlight(
            "machine learning",
            &["machine learning", "learning"],
            HighlightStyle::Brackets,
        );
        assert_eq!(out, "[[machine learning]]");
    }

    #[test]
    fn ansi_markers() {
        let out = highlight("excel", &["excel"], HighlightStyle::Ansi);
        assert_eq!(out, "\x1b[44;33mexcel\x1b[0m");
    }
}
