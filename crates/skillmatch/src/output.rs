//! Rendering extraction results for the terminal

use crate::config::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use skillmatch_core::{Extraction, Vocabulary};
use std::fmt::Write as _;

/// One match as reported to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedMatch {
    pub source_text: String,
    pub matched_entry: String,
    /// Display title when the vocabulary knows one, else the entry
    pub title: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matches: Vec<ReportedMatch>,
    pub remainder: Vec<String>,
    pub total: usize,
}

impl Report {
    pub fn new(extraction: &Extraction, vocabulary: &Vocabulary) -> Self {
        let matches: Vec<ReportedMatch> = extraction
            .matches
            .iter()
            .map(|m| ReportedMatch {
                source_text: m.source_text.clone(),
                matched_entry: m.matched_entry.clone(),
                title: vocabulary
                    .display_title(&m.matched_entry)
                    .unwrap_or(&m.matched_entry)
                    .to_string(),
                score: m.score,
            })
            .collect();

        Self {
            total: matches.len(),
            matches,
            remainder: extraction.remainder.clone(),
        }
    }

    /// Display titles in emission order
    pub fn titles(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.title.as_str()).collect()
    }

    /// Phrases to mark in the input: matched spans first, then titles
    pub fn highlight_phrases(&self) -> Vec<&str> {
        self.matches
            .iter()
            .map(|m| m.source_text.as_str())
            .chain(self.titles())
            .collect()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for m in &self.matches {
            let _ = writeln!(out, "{}\t{}\t{}", m.title, m.score, m.source_text);
        }
        if !self.remainder.is_empty() {
            let _ = writeln!(out, "-- unmatched: {}", self.remainder.join(" | "));
        }
        out
    }
}
