//! Similarity metrics and the two ordering strategies built on them

use strsim::normalized_levenshtein;

/// A raw string similarity metric on the 0.0-100.0 scale
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Normalized insertion/deletion similarity: `200 * LCS / (|a| + |b|)`.
///
/// A single dropped or doubled letter costs little, which suits typed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl Similarity for IndelRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        200.0 * lcs_len(&a, &b) as f64 / total as f64
    }
}

/// Normalized Levenshtein similarity via strsim
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl Similarity for LevenshteinRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        normalized_levenshtein(a, b) * 100.0
    }
}

/// Length of the longest common subsequence, single-row DP
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }
    row[b.len()]
}

/// Sort whitespace tokens and re-join them with single spaces
pub fn token_sort(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Round a raw similarity onto the integer 0..=100 scale
#[inline]
pub fn to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs() {
        let a: Vec<char> = "javascript".chars().collect();
        let b: Vec<char> = "javscript".chars().collect();
        assert_eq!(lcs_len(&a, &b), 9);
        assert_eq!(lcs_len(&a, &[]), 0);
    }

    #[test]
    fn test_indel_identical() {
        assert_eq!(IndelRatio.similarity("python", "python"), 100.0);
    }

    #[test]
    fn test_indel_typo() {
        let raw = IndelRatio.similarity("javscript", "javascript");
        assert_eq!(to_score(raw), 95);
    }

    #[test]
    fn test_indel_disjoint() {
        assert_eq!(IndelRatio.similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(IndelRatio.similarity("", ""), 0.0);
        assert_eq!(LevenshteinRatio.similarity("", "sql"), 0.0);
    }

    #[test]
    fn test_levenshtein_typo() {
        let raw = LevenshteinRatio.similarity("javscript", "javascript");
        assert_eq!(to_score(raw), 90);
    }

    #[test]
    fn test_token_sort() {
        assert_eq!(token_sort("science  data"), "data science");
    }

    #[test]
    fn test_to_score_bounds() {
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(100.4), 100);
        assert_eq!(to_score(89.5), 90);
        assert_eq!(to_score(f64::NAN), 0);
    }
}
