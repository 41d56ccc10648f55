//! Output formatting module

pub mod formatter;

pub use formatter::{RankReport, ReportGenerator, ScoreReport};
