//! Centralized error types for Sentimento.

use thiserror::Error;

/// Message returned to callers for any failure whose cause must stay internal.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Erro interno do servidor. Verifique a configuração do Azure AI.";

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum SentimentoError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Erro na análise: {0}")]
    Upstream(String),

    #[error("Unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

/// Result type for analysis operations.
pub type SentimentoResult<T> = Result<T, SentimentoError>;

impl SentimentoError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an error reported by the sentiment service for a document.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Message safe to hand back to an end user.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the caller sent something unacceptable (as opposed to a
    /// server-side failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_hides_cause() {
        let err = SentimentoError::from(anyhow::anyhow!("connection refused (10.0.0.4:443)"));
        assert_eq!(err.public_message(), UNEXPECTED_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_upstream_embeds_cause() {
        let err = SentimentoError::upstream("InvalidDocument: Document text is empty.");
        assert_eq!(
            err.public_message(),
            "Erro na análise: InvalidDocument: Document text is empty."
        );
    }

    #[test]
    fn test_validation_is_client_error() {
        let err = SentimentoError::validation("Texto é obrigatório para análise");
        assert!(err.is_client_error());
        assert_eq!(err.public_message(), "Texto é obrigatório para análise");
    }
}
