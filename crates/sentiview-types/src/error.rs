use thiserror::Error;

/// Result type for sentiview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Invariant violations detected on domain values
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Confidence score outside the closed unit interval
    #[error("confidence score {score} for '{company}' is outside [0, 1]")]
    InvalidConfidence { company: String, score: f64 },

    /// A required text field is blank
    #[error("record '{company}' has an empty {field}")]
    MissingField {
        company: String,
        field: &'static str,
    },
}
