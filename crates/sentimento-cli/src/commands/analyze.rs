//! Analyze command.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use sentimento_core::model::{AnalysisRequest, AnalysisResult, ApiResponse};
use sentimento_core::{AnalyzerConfig, SentimentoError};
use tracing::info;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from stdin when omitted)
    pub text: Option<String>,

    /// Language code of the text
    #[arg(short, long)]
    pub language: Option<String>,

    /// Print the raw JSON response instead of the formatted breakdown
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &AnalyzerConfig) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let request = AnalysisRequest {
        text: Some(text),
        language: args.language,
    };

    let service = sentimento_azure::service_from_config(config);
    info!(
        configured = service.is_configured(),
        chars = text_len(&request),
        "Analyzing text from the command line"
    );

    let outcome = service.analyze(&request).await;
    if args.json {
        println!("{}", render_json(&outcome)?);
    } else if let Ok(result) = &outcome {
        output::print_analysis(result);
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Render an outcome as the same envelope the HTTP API returns.
pub fn render_json(outcome: &Result<AnalysisResult, SentimentoError>) -> Result<String> {
    let envelope = match outcome {
        Ok(result) => ApiResponse::ok(result.clone()),
        Err(e) => ApiResponse::failure(e.public_message()),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn text_len(request: &AnalysisRequest) -> usize {
    request.text.as_deref().map_or(0, |t| t.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentimento_core::error::UNEXPECTED_ERROR_MESSAGE;
    use sentimento_core::model::{ConfidenceScores, Sentence, Sentiment};
    use serde_json::Value;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            document_text: "Adorei o filme.".to_string(),
            overall_sentiment: Sentiment::Positive,
            confidence_scores: ConfidenceScores::new(0.95, 0.03, 0.02),
            sentences: vec![Sentence {
                text: "Adorei o filme.".to_string(),
                sentiment: Sentiment::Positive,
                confidence_scores: ConfidenceScores::new(0.95, 0.03, 0.02),
                opinions: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_render_success_envelope() {
        let json = render_json(&Ok(sample_result())).unwrap();
        let body: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(body["success"], true);
        assert!(body.get("error").is_none());
        assert_eq!(body["data"]["documentText"], "Adorei o filme.");
        assert_eq!(body["data"]["overallSentiment"], "positive");
        assert_eq!(body["data"]["sentences"][0]["opinions"], serde_json::json!([]));
    }

    #[test]
    fn test_render_failure_hides_cause() {
        let err = SentimentoError::from(anyhow::anyhow!("connection refused (10.0.0.4:443)"));
        let json = render_json(&Err(err)).unwrap();
        let body: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], UNEXPECTED_ERROR_MESSAGE);
        assert!(body.get("data").is_none());
        assert!(!json.contains("connection refused"));
    }

    #[test]
    fn test_render_validation_failure_keeps_message() {
        let json = render_json(&Err(SentimentoError::validation("Texto vazio"))).unwrap();
        let body: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(body["error"], "Texto vazio");
    }

    #[tokio::test]
    async fn test_execute_without_credentials_fails() {
        let args = AnalyzeArgs {
            text: Some("texto".to_string()),
            language: None,
            json: true,
        };
        let err = execute(args, &AnalyzerConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("AZURE_LANGUAGE_KEY"));
    }
}
