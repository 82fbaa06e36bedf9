//! Vocabulary files
//!
//! Plain text, one title per line. Blank lines and lines starting with `#`
//! are skipped. Titles go through [`Vocabulary::from_titles`], so qualifiers
//! like "(Programming Language)" are dropped and the first spelling of a
//! title is the one shown back to users.

use crate::error::{Error, Result};
use skillmatch_core::Vocabulary;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub fn load(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let vocabulary = parse(&contents);

    if vocabulary.is_empty() {
        warn!(path = %path.display(), "vocabulary file has no usable titles");
    } else {
        debug!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
    }

    Ok(vocabulary)
}

/// Like [`load`], but an empty vocabulary is an error
pub fn load_non_empty(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let vocabulary = load(path)?;
    if vocabulary.is_empty() {
        return Err(Error::Vocabulary(format!(
            "{} contains no titles",
            path.display()
        )));
    }
    Ok(vocabulary)
}

pub fn parse(contents: &str) -> Vocabulary {
    Vocabulary::from_titles(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}
