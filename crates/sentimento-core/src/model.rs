//! Sentiment analysis domain models.
//!
//! These are the shapes returned to clients. Every collection is total:
//! a sentence without opinions carries an empty `opinions` list.

use serde::{Deserialize, Serialize};

/// Language used when a request does not name one.
pub const DEFAULT_LANGUAGE: &str = "pt";

/// Body accepted by the analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Language to tag the document with, falling back to `default` when
    /// the field is absent or blank.
    pub fn language_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.language.as_deref().map(str::trim) {
            Some(lang) if !lang.is_empty() => lang,
            _ => default,
        }
    }
}

/// Sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }

    /// Portuguese label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positivo",
            Self::Neutral => "Neutro",
            Self::Negative => "Negativo",
            Self::Mixed => "Misto",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability-like distribution over positive, neutral and negative.
///
/// Opinion targets are only scored positive/negative upstream, so `neutral`
/// defaults to zero when missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    pub negative: f64,
}

impl ConfidenceScores {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// True when every component lies in [0, 1] and the three sum to 1
    /// within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        in_range(self.positive)
            && in_range(self.neutral)
            && in_range(self.negative)
            && (self.total() - 1.0).abs() <= tolerance
    }

    /// Label with the highest score. Ties resolve positive, then neutral.
    pub fn dominant(&self) -> Sentiment {
        if self.positive >= self.neutral && self.positive >= self.negative {
            Sentiment::Positive
        } else if self.neutral >= self.negative {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}

/// A qualifying phrase attached to an opinion target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub text: String,
    pub sentiment: Sentiment,
}

/// The span an opinion is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpinionTarget {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    pub target: OpinionTarget,
    pub assessments: Vec<Assessment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    #[serde(default)]
    pub opinions: Vec<Opinion>,
}

/// Document-level result produced by an analyzer, before it is tied back to
/// the submitted text.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSentiment {
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    pub sentences: Vec<Sentence>,
}

/// Display-friendly analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub document_text: String,
    pub overall_sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    pub sentences: Vec<Sentence>,
}

impl AnalysisResult {
    pub fn from_document(document_text: impl Into<String>, document: DocumentSentiment) -> Self {
        Self {
            document_text: document_text.into(),
            overall_sentiment: document.sentiment,
            confidence_scores: document.confidence_scores,
            sentences: document.sentences,
        }
    }

    pub fn opinion_count(&self) -> usize {
        self.sentences.iter().map(|s| s.opinions.len()).sum()
    }
}

/// Envelope shared by every response of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: AnalysisResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
