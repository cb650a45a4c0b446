use std::fmt;

/// Validation failures surfaced by the score engine. No partial result
/// accompanies either variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Region identifier is not a key of the active region table
    InvalidRegion(String),
    /// One or more numeric fields are outside their domain
    InvalidInput(Vec<String>),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InvalidRegion(region) => write!(f, "Unknown region: '{}'", region),
            ScoreError::InvalidInput(errors) => {
                write!(f, "Invalid input: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ScoreError {}
