use thiserror::Error;

#[derive(Debug, Error)]
pub enum TitleCaseError {
    #[error("invalid exception '{word}': must be a single word of letters, digits or underscores")]
    InvalidException { word: String },

    #[error("invalid ignore pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
