//! JSON entry point for embedding hosts.
//!
//! Takes and returns JSON strings so the engine can be called across a
//! process or language boundary without sharing Rust types. Failures come
//! back as `{"error": "..."}` rather than as a Rust error.

use crate::error::{MatchError, MatchResult};
use crate::extract::{Extractor, ExtractorConfig, DEFAULT_CUTOFF};
use crate::score::MatchRecord;
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

/// Input for [`extract_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractInput {
    pub text: String,
    pub vocabulary: Vec<String>,
    #[serde(default = "default_cutoff")]
    pub cutoff: u16,
    /// Cutoffs to retry with, in order, while nothing matches
    #[serde(default)]
    pub fallback_cutoffs: Vec<u16>,
}

fn default_cutoff() -> u16 {
    DEFAULT_CUTOFF.into()
}

/// Output of [`extract_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOutput {
    pub matches: Vec<MatchRecord>,
    pub remainder: Vec<String>,
    pub total: usize,
}

/// Run an extraction described by a JSON document.
///
/// Input: `{"text": "...", "vocabulary": ["..."], "cutoff": 90}`
/// Output: `{"matches": [...], "remainder": [...], "total": N}`
pub fn extract_json(input: &str) -> String {
    match run(input) {
        Ok(output) => match serde_json::to_string(&output) {
            Ok(json) => json,
            Err(e) => error_json(&format!("serialization failed: {}", e)),
        },
        Err(e) => error_json(&e.to_string()),
    }
}

fn run(input: &str) -> Result<ExtractOutput, MatchError> {
    let parsed: ExtractInput =
        serde_json::from_str(input).map_err(|e| MatchError::InvalidInput(e.to_string()))?;

    let cutoff = checked_cutoff(parsed.cutoff)?;
    let fallback_cutoffs = parsed
        .fallback_cutoffs
        .iter()
        .map(|&c| checked_cutoff(c))
        .collect::<MatchResult<Vec<u8>>>()?;

    let extractor = Extractor::with_config(ExtractorConfig::with_cutoff(cutoff))?;
    let vocabulary = Vocabulary::new(&parsed.vocabulary);

    let extraction = extractor.extract_with_fallback(&parsed.text, &vocabulary, &fallback_cutoffs);
    let total = extraction.matches.len();

    Ok(ExtractOutput {
        matches: extraction.matches,
        remainder: extraction.remainder,
        total,
    })
}

fn checked_cutoff(cutoff: u16) -> MatchResult<u8> {
    u8::try_from(cutoff)
        .ok()
        .filter(|c| *c <= 100)
        .ok_or(MatchError::InvalidCutoff(cutoff))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_roundtrip() {
        let input = serde_json::json!({
            "text": "I love python programming and sql databases",
            "vocabulary": ["python programming", "sql"],
            "cutoff": 90
        });
        let result = extract_json(&input.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["matches"][0]["matched_entry"], "python programming");
        assert_eq!(parsed["matches"][1]["score"], 100);
        assert_eq!(parsed["remainder"], serde_json::json!(["love", "databases"]));
    }

    #[test]
    fn extract_json_default_cutoff() {
        let input = serde_json::json!({ "text": "javscript", "vocabulary": ["javascript"] });
        let parsed: serde_json::Value = serde_json::from_str(&extract_json(&input.to_string())).unwrap();
        assert_eq!(parsed["total"], 1);
    }

    #[test]
    fn extract_json_fallback() {
        let input = serde_json::json!({
            "text": "javscript",
            "vocabulary": ["javascript"],
            "cutoff": 99,
            "fallback_cutoffs": [90]
        });
        let parsed: serde_json::Value = serde_json::from_str(&extract_json(&input.to_string())).unwrap();
        assert_eq!(parsed["total"], 1);
    }

    #[test]
    fn extract_json_invalid_input() {
        let result = extract_json("not json");
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["error"].as_str().unwrap().starts_with("invalid input"));
    }

    #[test]
    fn extract_json_fallback_out_of_range() {
        for bad in [101, 150, 300] {
            let input = serde_json::json!({
                "text": "javscript",
                "vocabulary": ["javascript"],
                "cutoff": 99,
                "fallback_cutoffs": [90, bad]
            });
            let parsed: serde_json::Value =
                serde_json::from_str(&extract_json(&input.to_string())).unwrap();
            assert_eq!(
                parsed["error"],
                format!("cutoff must be within 0..=100, got {bad}")
            );
        }
    }

    #[test]
    fn extract_json_cutoff_out_of_range() {
        let input = serde_json::json!({ "text": "sql", "vocabulary": ["sql"], "cutoff": 300 });
        let parsed: serde_json::Value = serde_json::from_str(&extract_json(&input.to_string())).unwrap();
        assert_eq!(parsed["error"], "cutoff must be within 0..=100, got 300");
    }
}
