//! skillmatch host
//!
//! Everything around the engine that touches the outside world: CLI and
//! environment configuration, logging, vocabulary files and result rendering.
//! The matching itself lives in `skillmatch-core`.

pub mod config;
pub mod error;
pub mod output;
pub mod tracing;
pub mod vocabulary_file;

pub use config::{Args, OutputFormat, Settings};
pub use error::{Error, Result};
pub use output::{Report, ReportedMatch};
