//! ATS matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use error::{AtsMatcherError, Result};
pub use config::Config;
