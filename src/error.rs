//! Error types for the triage engine

use thiserror::Error;

/// Result type alias for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;

#[derive(Error, Debug)]
pub enum TriageError {

    // =============================
    // Caller Errors
    // =============================

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // =============================
    // Engine Errors
    // =============================

    #[error("Missing response templates: {0}")]
    MissingTemplates(String),

    #[error("Lexicon load error: {0}")]
    LexiconLoad(String),

    #[error("Internal fault: {0}")]
    InternalFault(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TriageError {
    /// Whether the caller supplied bad input (maps to a 4xx response)
    pub fn is_client_error(&self) -> bool {
        matches!(self, TriageError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(TriageError::InvalidInput("empty".into()).is_client_error());
        assert!(!TriageError::InternalFault("boom".into()).is_client_error());
        assert!(!TriageError::MissingTemplates("neutral".into()).is_client_error());
    }

    #[test]
    fn test_display_messages() {
        let err = TriageError::InvalidInput("No message provided".into());
        assert_eq!(err.to_string(), "Invalid input: No message provided");
    }
}
