pub mod casing;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod parser;

pub use casing::{capitalize_first_letter, titlecase, TitleCaser};
pub use checker::TitleChecker;
pub use config::Config;
pub use error::TitleCaseError;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub error_count: usize,
    pub fixed_count: usize,
    pub errors: Vec<TitleError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleError {
    pub title: String,
    pub expected: String,
    pub line: usize,
    pub column: usize,
}
