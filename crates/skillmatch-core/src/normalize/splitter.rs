//! Boundary-checked sentence and punctuation splitting
//!
//! Both splitters walk the input char by char and only cut where a delimiter
//! is adjacent to whitespace, so `3.5`, `10:30` or `1,000` stay intact.

/// Characters that end a sentence when followed by whitespace
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '•'];

/// Characters that end a chunk when adjacent to whitespace
const CHUNK_DELIMITERS: &[char] = &[',', ';', ':'];

/// Split text into sentence-like units.
///
/// Cuts at a terminator followed by whitespace and at every newline. Pieces
/// that are empty after trimming are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let boundary = if c == '\n' {
            true
        } else if SENTENCE_TERMINATORS.contains(&c) {
            matches!(chars.peek(), Some((_, next)) if next.is_whitespace())
        } else {
            false
        };

        if boundary {
            push_non_blank(&mut sentences, &text[start..i]);
            start = i + c.len_utf8();
        }
    }
    push_non_blank(&mut sentences, &text[start..]);

    sentences
}

/// Split a sentence at `,` `;` `:` that touch whitespace (or the sentence edge).
pub fn split_punctuation(sentence: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = sentence.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if CHUNK_DELIMITERS.contains(&c) {
            let before_ws = prev.map_or(true, char::is_whitespace);
            let after_ws = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
            if before_ws || after_ws {
                push_non_blank(&mut chunks, &sentence[start..i]);
                start = i + c.len_utf8();
            }
        }
        prev = Some(c);
    }
    push_non_blank(&mut chunks, &sentence[start..]);

    chunks
}

/// Remove every character that is neither alphanumeric nor whitespace,
/// collapse whitespace runs, trim.
///
/// Covers typographic marks as well as ASCII ones: curly quotes, `…`, `—`.
pub fn strip_punctuation(chunk: &str) -> String {
    let mut out = String::with_capacity(chunk.len());
    let mut pending_space = false;

    for c in chunk.chars() {
        if !c.is_alphanumeric() && !c.is_whitespace() {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

fn push_non_blank<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    if !piece.trim().is_empty() {
        out.push(piece);
    }
}
