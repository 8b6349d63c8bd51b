//! Seam between the analysis service and the external sentiment provider.

use async_trait::async_trait;
use serde::Serialize;

use crate::model::DocumentSentiment;

/// One unit of text submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDocument {
    pub id: String,
    pub language: String,
    pub text: String,
}

impl TextDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            text: text.into(),
        }
    }
}

/// Error the provider attached to a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentError {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Per-document answer from the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    Analyzed(DocumentSentiment),
    Failed(DocumentError),
}

/// Sentiment analysis with opinion mining.
///
/// `Err` is reserved for transport and decoding failures; a document the
/// provider rejected comes back as `DocumentOutcome::Failed`.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze_sentiment(&self, document: &TextDocument) -> anyhow::Result<DocumentOutcome>;
}
