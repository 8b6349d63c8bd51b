//! Azure AI Language HTTP client.
//!
//! Calls the single-purpose sentiment endpoint with opinion mining enabled:
//! `POST {endpoint}/text/analytics/v3.1/sentiment?opinionMining=true`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use sentimento_core::analyzer::{DocumentOutcome, SentimentAnalyzer, TextDocument};
use sentimento_core::{AnalysisService, AnalyzerConfig, SentimentoResult};

use crate::wire::{SentimentRequest, SentimentResponse};

/// Text Analytics API version used for sentiment requests.
pub const API_VERSION: &str = "v3.1";

/// Header carrying the resource key.
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Azure sentiment client.
#[derive(Clone)]
pub struct AzureSentimentClient {
    endpoint: String,
    key: String,
    client: reqwest::Client,
}

impl AzureSentimentClient {
    /// Create a new client for the given resource endpoint and key.
    pub fn new(endpoint: &str, key: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build HTTP client, using defaults without timeout");
                reqwest::Client::default()
            });

        Self {
            endpoint: endpoint.trim().trim_end_matches('/').to_string(),
            key: key.trim().to_string(),
            client,
        }
    }

    /// Create a client from configuration, failing when credentials are missing.
    pub fn from_config(config: &AnalyzerConfig) -> SentimentoResult<Self> {
        let credentials = config.credentials()?;
        Ok(Self::new(credentials.endpoint, credentials.key, config.timeout))
    }

    /// Full URL of the sentiment operation.
    pub fn sentiment_url(&self) -> String {
        format!(
            "{}/text/analytics/{}/sentiment?opinionMining=true",
            self.endpoint, API_VERSION
        )
    }
}

#[async_trait]
impl SentimentAnalyzer for AzureSentimentClient {
    async fn analyze_sentiment(&self, document: &TextDocument) -> Result<DocumentOutcome> {
        let url = self.sentiment_url();
        debug!(url = %url, language = %document.language, "Calling Azure sentiment analysis");

        let response = self
            .client
            .post(&url)
            .header(KEY_HEADER, &self.key)
            .json(&SentimentRequest::single(document))
            .send()
            .await
            .context("Failed to connect to Azure AI Language")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Azure AI Language API error ({}): {}", status, body);
        }

        let result: SentimentResponse = response
            .json()
            .await
            .context("Failed to parse Azure AI Language response")?;

        debug!(
            model_version = result.model_version.as_deref().unwrap_or("unknown"),
            documents = result.documents.len(),
            errors = result.errors.len(),
            "Received sentiment response"
        );

        result.into_outcome(&document.id)
    }
}

/// Build the analysis service for `config`.
///
/// Missing credentials yield an unconfigured service, so the problem is
/// reported on each request instead of preventing startup.
pub fn service_from_config(config: &AnalyzerConfig) -> AnalysisService {
    let service = match AzureSentimentClient::from_config(config) {
        Ok(client) => AnalysisService::new(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "Sentiment service is not configured");
            AnalysisService::unconfigured()
        }
    };

    service.with_default_language(config.default_language.clone())
}
