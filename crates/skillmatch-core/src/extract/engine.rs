//! Extractor - the staged multi-pass pipeline

use super::window::{cut, Cut};
use crate::error::{MatchError, MatchResult};
use crate::normalize::Normalizer;
use crate::score::{MatchRecord, PhraseScorer, Scorer};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Cutoff used when none is given
pub const DEFAULT_CUTOFF: u8 = 90;

/// Widest phrase window, in words
pub const DEFAULT_MAX_WINDOW: usize = 4;

/// How the cutoff varies with window width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutoffPolicy {
    /// Same cutoff for every window
    Uniform(u8),
    /// `long` for windows wider than two words, `short` for one or two
    Tiered { long: u8, short: u8 },
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self::Uniform(DEFAULT_CUTOFF)
    }
}

impl CutoffPolicy {
    pub fn for_window(&self, width: usize) -> u8 {
        match *self {
            Self::Uniform(cutoff) => cutoff,
            Self::Tiered { long, short } => {
                if width > 2 {
                    long
                } else {
                    short
                }
            }
        }
    }

    fn validate(&self) -> MatchResult<()> {
        let cutoffs = match *self {
            Self::Uniform(cutoff) => [cutoff, cutoff],
            Self::Tiered { long, short } => [long, short],
        };
        match cutoffs.into_iter().find(|c| *c > 100) {
            Some(bad) => Err(MatchError::InvalidCutoff(bad.into())),
            None => Ok(()),
        }
    }
}

/// Extractor configuration
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub cutoff: CutoffPolicy,
    /// Passes run from this width down to 1
    pub max_window: usize,
    /// Working-list size from which a pass fans out over rayon
    pub parallel_threshold: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            cutoff: CutoffPolicy::default(),
            max_window: DEFAULT_MAX_WINDOW,
            parallel_threshold: 64,
        }
    }
}

impl ExtractorConfig {
    pub fn with_cutoff(cutoff: u8) -> Self {
        Self {
            cutoff: CutoffPolicy::Uniform(cutoff),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> MatchResult<()> {
        self.cutoff.validate()?;
        if self.max_window == 0 {
            return Err(MatchError::InvalidWindow(self.max_window));
        }
        Ok(())
    }
}

/// Matches in emission order plus the text no pass could explain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub matches: Vec<MatchRecord>,
    pub remainder: Vec<String>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched vocabulary entries, in emission order
    pub fn matched_entries(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.matched_entry.as_str()).collect()
    }
}

/// Greedy multi-pass phrase extractor.
///
/// Stateless between calls; `Send + Sync` whenever its scorer is.
#[derive(Debug, Clone)]
pub struct Extractor<S = PhraseScorer> {
    scorer: S,
    normalizer: Normalizer,
    config: ExtractorConfig,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// English normalizer, phrase scorer, default configuration
    pub fn new() -> Self {
        Self {
            scorer: PhraseScorer::default(),
            normalizer: Normalizer::english().clone(),
            config: ExtractorConfig::default(),
        }
    }

    pub fn with_config(config: ExtractorConfig) -> MatchResult<Self> {
        Self::with_scorer(PhraseScorer::default(), config)
    }
}

impl<S: Scorer> Extractor<S> {
    pub fn with_scorer(scorer: S, config: ExtractorConfig) -> MatchResult<Self> {
        config.validate()?;
        Ok(Self {
            scorer,
            normalizer: Normalizer::english().clone(),
            config,
        })
    }

    /// Replace the normalizer (e.g. a different stop-word language)
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Normalize `text` and run every pass over it
    pub fn extract(&self, text: &str, vocabulary: &Vocabulary) -> Extraction {
        let working = self.normalizer.normalize(text);
        self.run(working, vocabulary, self.config.cutoff)
    }

    /// Extract with the configured cutoff, then retry with each fallback
    /// cutoff in turn until some run yields a match.
    ///
    /// Returns the last run when none does.
    pub fn extract_with_fallback(
        &self,
        text: &str,
        vocabulary: &Vocabulary,
        fallback_cutoffs: &[u8],
    ) -> Extraction {
        let working = self.normalizer.normalize(text);
        let mut extraction = self.run(working.clone(), vocabulary, self.config.cutoff);

        for &cutoff in fallback_cutoffs {
            if !extraction.is_empty() {
                break;
            }
            debug!(cutoff, "no matches, retrying with lower cutoff");
            extraction = self.run(working.clone(), vocabulary, CutoffPolicy::Uniform(cutoff.min(100)));
        }

        extraction
    }

    /// One window-width pass: `(working, width) -> (matches, next working)`.
    ///
    /// `vocabulary` should already hold only `width`-word entries.
    pub fn pass<T>(
        &self,
        working: &[String],
        width: usize,
        vocabulary: &[T],
        cutoff: u8,
    ) -> (Vec<MatchRecord>, Vec<String>)
    where
        T: AsRef<str> + Sync,
    {
        let cuts = self.cut_all(working, width, vocabulary, cutoff);

        let mut matches = Vec::new();
        let mut next = Vec::new();
        for Cut {
            matches: m,
            remainder,
        } in cuts
        {
            matches.extend(m);
            next.extend(remainder);
        }

        (matches, next)
    }

    fn run(&self, mut working: Vec<String>, vocabulary: &Vocabulary, policy: CutoffPolicy) -> Extraction {
        let mut matches = Vec::new();

        for width in (1..=self.config.max_window).rev() {
            let cutoff = policy.for_window(width).min(100);
            let filtered = vocabulary.with_word_count(width);

            debug!(
                width,
                cutoff,
                candidates = working.len(),
                entries = filtered.len(),
                "running pass"
            );

            let (found, next) = self.pass(&working, width, &filtered, cutoff);
            matches.extend(found);
            working = next;
        }

        debug!(
            matches = matches.len(),
            remainder = working.len(),
            "extraction finished"
        );

        Extraction {
            matches,
            remainder: working,
        }
    }

    /// Parallel over substrings on native with `parallel`, order preserved
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn cut_all<T>(&self, working: &[String], width: usize, vocabulary: &[T], cutoff: u8) -> Vec<Cut>
    where
        T: AsRef<str> + Sync,
    {
        if working.len() >= self.config.parallel_threshold {
            working
                .par_iter()
                .map(|s| cut(s, width, vocabulary, cutoff, &self.scorer))
                .collect()
        } else {
            self.cut_sequential(working, width, vocabulary, cutoff)
        }
    }

    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn cut_all<T>(&self, working: &[String], width: usize, vocabulary: &[T], cutoff: u8) -> Vec<Cut>
    where
        T: AsRef<str> + Sync,
    {
        self.cut_sequential(working, width, vocabulary, cutoff)
    }

    fn cut_sequential<T>(&self, working: &[String], width: usize, vocabulary: &[T], cutoff: u8) -> Vec<Cut>
    where
        T: AsRef<str>,
    {
        working
            .iter()
            .map(|s| cut(s, width, vocabulary, cutoff, &self.scorer))
            .collect()
    }
}

/// Extract with the default English pipeline and a uniform cutoff.
///
/// Cutoffs above 100 behave as 100.
pub fn extract<T: AsRef<str>>(text: &str, vocabulary: &[T], cutoff: u8) -> Extraction {
    let vocabulary = Vocabulary::new(vocabulary);
    Extractor::new().run(
        Normalizer::english().normalize(text),
        &vocabulary,
        CutoffPolicy::Uniform(cutoff.min(100)),
    )
}

/// Only the matches of [`extract`]
pub fn extract_phrases<T: AsRef<str>>(text: &str, vocabulary: &[T], cutoff: u8) -> Vec<MatchRecord> {
    extract(text, vocabulary, cutoff).matches
}
