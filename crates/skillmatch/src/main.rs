//! skillmatch - find known skills and job titles in free-form text
//!
//! Usage:
//!     skillmatch --vocabulary skills.txt "I love Pyton and SQL databases"
//!     cat resume.txt | skillmatch -v skills.txt --format json
//!     skillmatch -v titles.txt --long-cutoff 85 --short-cutoff 95 --fallback-cutoff 87

use clap::Parser;
use skillmatch::{vocabulary_file, Args, Error, OutputFormat, Report, Settings};
use skillmatch_core::{highlight, Extractor, HighlightStyle};
use std::io::{self, IsTerminal, Read, Write};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    skillmatch::tracing::init_with_filter(&args.log_level);

    let settings = Settings::from_args(args)?;
    info!(
        vocabulary = %settings.vocabulary_path.display(),
        cutoff = ?settings.extractor.cutoff,
        max_window = settings.extractor.max_window,
        "starting skillmatch {}",
        env!("CARGO_PKG_VERSION")
    );

    let vocabulary = vocabulary_file::load_non_empty(&settings.vocabulary_path)?;
    let text = match settings.text.clone() {
        Some(text) => text,
        None => read_stdin()?,
    };

    let extractor = Extractor::with_config(settings.extractor.clone()).map_err(Error::from)?;
    let extraction = extractor.extract_with_fallback(&text, &vocabulary, &settings.fallback_cutoffs);
    let report = Report::new(&extraction, &vocabulary);

    if settings.highlight {
        let style = if io::stderr().is_terminal() {
            HighlightStyle::Ansi
        } else {
            HighlightStyle::Brackets
        };
        eprintln!("{}", highlight(&text, &report.highlight_phrases(), style));
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report.render(settings.format)?)?;
    if settings.format == OutputFormat::Json {
        writeln!(stdout)?;
    }

    info!(matches = report.total, "done");
    Ok(())
}

fn read_stdin() -> skillmatch::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
