//! Analysis service: validation, the provider call and result assembly.

use std::sync::Arc;

use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analyzer::{DocumentOutcome, SentimentAnalyzer, TextDocument};
use crate::config::missing_configuration;
use crate::error::{SentimentoError, SentimentoResult};
use crate::model::{AnalysisRequest, AnalysisResult, DEFAULT_LANGUAGE};

/// Message returned when the request carries no usable text.
pub const EMPTY_TEXT_MESSAGE: &str = "Texto é obrigatório para análise";

/// Id given to the single document sent per request.
const DOCUMENT_ID: &str = "0";

/// Turns an [`AnalysisRequest`] into an [`AnalysisResult`].
///
/// An unconfigured service has no analyzer and fails every request with a
/// configuration error without touching the network.
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Option<Arc<dyn SentimentAnalyzer>>,
    default_language: String,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            analyzer: Some(analyzer),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            analyzer: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.analyzer.is_some()
    }

    /// Fail with a configuration error when no analyzer is available.
    pub fn ensure_configured(&self) -> SentimentoResult<&dyn SentimentAnalyzer> {
        self.analyzer.as_deref().ok_or_else(missing_configuration)
    }

    /// Analyze one request.
    pub async fn analyze(&self, request: &AnalysisRequest) -> SentimentoResult<AnalysisResult> {
        let analyzer = self.ensure_configured()?;

        let text = request
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                warn!("Rejected analysis request without text");
                SentimentoError::validation(EMPTY_TEXT_MESSAGE)
            })?;

        let language = request.language_or(&self.default_language);
        let document = TextDocument::new(DOCUMENT_ID, text, language);

        let request_id = Uuid::new_v4();
        let span = info_span!("analysis", %request_id, language = %language);

        let result: SentimentoResult<AnalysisResult> = async {
            debug!(chars = text.chars().count(), "Sending document for sentiment analysis");

            let outcome = analyzer.analyze_sentiment(&document).await.map_err(|e| {
                error!(error = %format!("{e:#}"), "Sentiment analysis failed");
                SentimentoError::Unexpected(e)
            })?;

            match outcome {
                DocumentOutcome::Analyzed(doc) => {
                    let result = AnalysisResult::from_document(text, doc);
                    debug!(
                        sentiment = %result.overall_sentiment,
                        sentences = result.sentences.len(),
                        opinions = result.opinion_count(),
                        "Analysis completed"
                    );
                    Ok(result)
                }
                DocumentOutcome::Failed(err) => {
                    warn!(code = %err.code, message = %err.message, "Service rejected document");
                    Err(SentimentoError::upstream(err.to_string()))
                }
            }
        }
        .instrument(span)
        .await;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DocumentError;
    use crate::model::{ConfidenceScores, DocumentSentiment, Sentence, Sentiment};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingAnalyzer {
        seen: Mutex<Vec<TextDocument>>,
        fail_document: bool,
        fail_transport: bool,
    }

    #[async_trait]
    impl SentimentAnalyzer for RecordingAnalyzer {
        async fn analyze_sentiment(&self, document: &TextDocument) -> anyhow::Result<DocumentOutcome> {
            self.seen.lock().unwrap().push(document.clone());

            if self.fail_transport {
                anyhow::bail!("connection reset by peer");
            }
            if self.fail_document {
                return Ok(DocumentOutcome::Failed(DocumentError {
                    code: "UnsupportedLanguageCode".to_string(),
                    message: "Invalid language code 'xx'.".to_string(),
                }));
            }

            let scores = ConfidenceScores::new(0.6, 0.1, 0.3);
            Ok(DocumentOutcome::Analyzed(DocumentSentiment {
                sentiment: Sentiment::Mixed,
                confidence_scores: scores,
                sentences: vec![Sentence {
                    text: document.text.clone(),
                    sentiment: Sentiment::Mixed,
                    confidence_scores: scores,
                    opinions: Vec::new(),
                }],
            }))
        }
    }

    fn service_with(analyzer: Arc<RecordingAnalyzer>) -> AnalysisService {
        AnalysisService::new(analyzer)
    }

    #[tokio::test]
    async fn test_successful_analysis_keeps_text() {
        let analyzer = Arc::new(RecordingAnalyzer::default());
        let service = service_with(analyzer.clone());
        let text = "O atendimento foi excelente, mas a comida estava fria.";

        let result = service.analyze(&AnalysisRequest::new(text)).await.unwrap();

        assert_eq!(result.document_text, text);
        assert_eq!(result.overall_sentiment, Sentiment::Mixed);
        assert_eq!(result.sentences.len(), 1);
        assert!(result.confidence_scores.is_normalized(0.01));

        let seen = analyzer.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, "0");
        assert_eq!(seen[0].language, "pt");
        assert_eq!(seen[0].text, text);
    }

    #[tokio::test]
    async fn test_language_is_forwarded() {
        let analyzer = Arc::new(RecordingAnalyzer::default());
        let service = service_with(analyzer.clone()).with_default_language("en");

        service.analyze(&AnalysisRequest::new("Great food")).await.unwrap();
        service
            .analyze(&AnalysisRequest::new("Comida ótima").with_language("pt-BR"))
            .await
            .unwrap();

        let seen = analyzer.seen.lock().unwrap();
        assert_eq!(seen[0].language, "en");
        assert_eq!(seen[1].language, "pt-BR");
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_calling_analyzer() {
        let analyzer = Arc::new(RecordingAnalyzer::default());
        let service = service_with(analyzer.clone());

        for request in [
            AnalysisRequest::default(),
            AnalysisRequest::new(""),
            AnalysisRequest::new("   \n\t").with_language("en"),
        ] {
            let err = service.analyze(&request).await.unwrap_err();
            assert!(matches!(err, SentimentoError::Validation(_)));
            assert_eq!(err.public_message(), EMPTY_TEXT_MESSAGE);
        }

        assert!(analyzer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails_before_validation() {
        let service = AnalysisService::unconfigured();
        assert!(!service.is_configured());

        let err = service.analyze(&AnalysisRequest::new("")).await.unwrap_err();
        assert!(matches!(err, SentimentoError::Config(_)));
        assert!(err.public_message().contains("AZURE_LANGUAGE_KEY"));
    }

    #[tokio::test]
    async fn test_document_error_becomes_upstream_error() {
        let analyzer = Arc::new(RecordingAnalyzer {
            fail_document: true,
            ..Default::default()
        });
        let service = service_with(analyzer);

        let err = service.analyze(&AnalysisRequest::new("texto")).await.unwrap_err();
        assert!(matches!(err, SentimentoError::Upstream(_)));
        assert_eq!(
            err.public_message(),
            "Erro na análise: UnsupportedLanguageCode: Invalid language code 'xx'."
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_unexpected() {
        let analyzer = Arc::new(RecordingAnalyzer {
            fail_transport: true,
            ..Default::default()
        });
        let service = service_with(analyzer);

        let err = service.analyze(&AnalysisRequest::new("texto")).await.unwrap_err();
        assert!(matches!(err, SentimentoError::Unexpected(_)));
        assert!(!err.public_message().contains("connection reset"));
    }
}
