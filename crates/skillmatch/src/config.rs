//! Command-line and environment configuration

use crate::error::{Error, Result};
use clap::{Parser, ValueEnum};
use skillmatch_core::{CutoffPolicy, ExtractorConfig, MatchError, DEFAULT_CUTOFF, DEFAULT_MAX_WINDOW};
use std::path::PathBuf;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One tab-separated line per match, then the remainder
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "skillmatch")]
#[command(about = "Find known skill and job-title phrases in free-form text")]
#[command(version)]
pub struct Args {
    /// Text to scan (read from stdin when omitted)
    pub text: Option<String>,

    /// Vocabulary file, one title per line
    #[arg(short, long, env = "SKILLMATCH_VOCABULARY")]
    pub vocabulary: PathBuf,

    /// Minimum similarity score 0-100
    #[arg(short, long, env = "SKILLMATCH_CUTOFF", default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: u8,

    /// Lower cutoff to retry with when nothing matched (repeatable)
    #[arg(long = "fallback-cutoff", env = "SKILLMATCH_FALLBACK_CUTOFFS", value_delimiter = ',')]
    pub fallback_cutoffs: Vec<u8>,

    /// Cutoff for windows of three or more words (needs --short-cutoff)
    #[arg(long, env = "SKILLMATCH_LONG_CUTOFF")]
    pub long_cutoff: Option<u8>,

    /// Cutoff for windows of one or two words (needs --long-cutoff)
    #[arg(long, env = "SKILLMATCH_SHORT_CUTOFF")]
    pub short_cutoff: Option<u8>,

    /// Widest phrase window in words
    #[arg(long, env = "SKILLMATCH_MAX_WINDOW", default_value_t = DEFAULT_MAX_WINDOW)]
    pub max_window: usize,

    /// Output format
    #[arg(short, long, value_enum, env = "SKILLMATCH_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the input with matched phrases highlighted to stderr
    #[arg(long)]
    pub highlight: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, env = "SKILLMATCH_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Validated run settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub vocabulary_path: PathBuf,
    pub text: Option<String>,
    pub extractor: ExtractorConfig,
    pub fallback_cutoffs: Vec<u8>,
    pub format: OutputFormat,
    pub highlight: bool,
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self> {
        let cutoff = match (args.long_cutoff, args.short_cutoff) {
            (Some(long), Some(short)) => CutoffPolicy::Tiered { long, short },
            (None, None) => CutoffPolicy::Uniform(args.cutoff),
            _ => {
                return Err(Error::Config(
                    "--long-cutoff and --short-cutoff must be given together".to_string(),
                ))
            }
        };

        if let Some(bad) = args.fallback_cutoffs.iter().find(|c| **c > 100) {
            return Err(MatchError::InvalidCutoff((*bad).into()).into());
        }

        let extractor = ExtractorConfig {
            cutoff,
            max_window: args.max_window,
            ..Default::default()
        };
        extractor.validate()?;

        Ok(Self {
            vocabulary_path: args.vocabulary,
            text: args.text,
            extractor,
            fallback_cutoffs: args.fallback_cutoffs,
            format: args.format,
            highlight: args.highlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["skillmatch"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults() {
        let settings = Settings::from_args(parse(&["-v", "skills.txt"])).unwrap();
        assert_eq!(settings.extractor.cutoff, CutoffPolicy::Uniform(DEFAULT_CUTOFF));
        assert_eq!(settings.extractor.max_window, DEFAULT_MAX_WINDOW);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.text.is_none());
        assert!(settings.fallback_cutoffs.is_empty());
    }

    #[test]
    fn tiered_cutoffs() {
        let args = parse(&["-v", "s.txt", "--long-cutoff", "85", "--short-cutoff", "95", "hi"]);
        let settings = Settings::from_args(args).unwrap();
        assert_eq!(
            settings.extractor.cutoff,
            CutoffPolicy::Tiered { long: 85, short: 95 }
        );
        assert_eq!(settings.text.as_deref(), Some("hi"));
    }

    #[test]
    fn half_tiered_is_rejected() {
        let args = parse(&["-v", "s.txt", "--long-cutoff", "85"]);
        assert!(matches!(Settings::from_args(args), Err(Error::Config(_))));
    }

    #[test]
    fn fallback_cutoffs_repeat_and_split() {
        let args = parse(&["-v", "s.txt", "--fallback-cutoff", "87", "--fallback-cutoff", "80,75"]);
        let settings = Settings::from_args(args).unwrap();
        assert_eq!(settings.fallback_cutoffs, vec![87, 80, 75]);
    }

    #[test]
    fn out_of_range_cutoffs_are_rejected() {
        let args = parse(&["-v", "s.txt", "-c", "120"]);
        assert!(matches!(
            Settings::from_args(args),
            Err(Error::Match(MatchError::InvalidCutoff(120)))
        ));

        let args = parse(&["-v", "s.txt", "--fallback-cutoff", "101"]);
        assert!(matches!(
            Settings::from_args(args),
            Err(Error::Match(MatchError::InvalidCutoff(101)))
        ));
    }

    #[test]
    fn zero_window_is_rejected() {
        let args = parse(&["-v", "s.txt", "--max-window", "0"]);
        assert!(matches!(
            Settings::from_args(args),
            Err(Error::Match(MatchError::InvalidWindow(0)))
        ));
    }

    #[test]
    fn json_format() {
        let settings = Settings::from_args(parse(&["-v", "s.txt", "-f", "json"])).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
    }
}
