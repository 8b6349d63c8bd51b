//! Text Analytics v3.1 sentiment wire format.
//!
//! Upstream marks most nested collections optional; everything is
//! normalized to plain vectors here so the rest of the workspace never sees
//! an absent list.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sentimento_core::analyzer::{DocumentError, DocumentOutcome, TextDocument};
use sentimento_core::model::{
    Assessment, ConfidenceScores, DocumentSentiment, Opinion, OpinionTarget, Sentence, Sentiment,
};

/// Relation type linking a target to one of its assessments.
const ASSESSMENT_RELATION: &str = "assessment";

#[derive(Debug, Serialize)]
pub struct SentimentRequest<'a> {
    pub documents: Vec<&'a TextDocument>,
}

impl<'a> SentimentRequest<'a> {
    pub fn single(document: &'a TextDocument) -> Self {
        Self {
            documents: vec![document],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    #[serde(default)]
    pub documents: Vec<DocumentResult>,
    #[serde(default)]
    pub errors: Vec<DocumentErrorEntry>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    pub id: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    #[serde(default)]
    pub sentences: Vec<SentenceResult>,
    #[serde(default)]
    pub warnings: Vec<Warning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    #[serde(default)]
    pub targets: Vec<TargetResult>,
    #[serde(default)]
    pub assessments: Vec<AssessmentResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetResult {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence_scores: ConfidenceScores,
    #[serde(default)]
    pub relations: Vec<TargetRelation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRelation {
    pub relation_type: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub text: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub is_negated: bool,
}

#[derive(Debug, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DocumentErrorEntry {
    pub id: String,
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub innererror: Option<Box<ErrorBody>>,
}

impl ErrorBody {
    /// The most specific error in the chain.
    pub fn innermost(&self) -> &ErrorBody {
        let mut current = self;
        while let Some(inner) = current.innererror.as_deref() {
            current = inner;
        }
        current
    }
}

impl SentimentResponse {
    /// Pick the outcome for `document_id` out of the batch reply.
    pub fn into_outcome(self, document_id: &str) -> Result<DocumentOutcome> {
        if let Some(entry) = self.errors.iter().find(|e| e.id == document_id) {
            let error = entry.error.innermost();
            return Ok(DocumentOutcome::Failed(DocumentError {
                code: error.code.clone(),
                message: error.message.clone(),
            }));
        }

        let document = self
            .documents
            .iter()
            .find(|d| d.id == document_id)
            .ok_or_else(|| anyhow!("No result returned for document '{}'", document_id))?;

        for warning in &document.warnings {
            warn!(code = %warning.code, message = %warning.message, "Sentiment service warning");
        }

        Ok(DocumentOutcome::Analyzed(document.to_sentiment(&self.documents)))
    }
}

impl DocumentResult {
    /// Normalize into the domain shape. `batch` is the full `documents`
    /// array, which assessment references index into.
    pub fn to_sentiment(&self, batch: &[DocumentResult]) -> DocumentSentiment {
        DocumentSentiment {
            sentiment: self.sentiment,
            confidence_scores: self.confidence_scores,
            sentences: self
                .sentences
                .iter()
                .map(|sentence| sentence.to_sentence(batch))
                .collect(),
        }
    }
}

impl SentenceResult {
    fn to_sentence(&self, batch: &[DocumentResult]) -> Sentence {
        let opinions = self
            .targets
            .iter()
            .map(|target| Opinion {
                target: OpinionTarget {
                    text: target.text.clone(),
                    sentiment: target.sentiment,
                    confidence_scores: target.confidence_scores,
                },
                assessments: target
                    .relations
                    .iter()
                    .filter(|r| r.relation_type == ASSESSMENT_RELATION)
                    .filter_map(|r| resolve_assessment(batch, &r.reference))
                    .map(|a| Assessment {
                        text: a.text.clone(),
                        sentiment: a.sentiment,
                    })
                    .collect(),
            })
            .collect();

        Sentence {
            text: self.text.clone(),
            sentiment: self.sentiment,
            confidence_scores: self.confidence_scores,
            opinions,
        }
    }
}

/// Indices encoded in `#/documents/{d}/sentences/{s}/assessments/{a}`.
fn parse_assessment_ref(reference: &str) -> Option<(usize, usize, usize)> {
    let mut parts = reference.strip_prefix("#/")?.split('/');

    let mut index_after = |name: &str| -> Option<usize> {
        if parts.next()? != name {
            return None;
        }
        parts.next()?.parse().ok()
    };

    let document = index_after("documents")?;
    let sentence = index_after("sentences")?;
    let assessment = index_after("assessments")?;

    match parts.next() {
        None => Some((document, sentence, assessment)),
        Some(_) => None,
    }
}

fn resolve_assessment<'a>(batch: &'a [DocumentResult], reference: &str) -> Option<&'a AssessmentResult> {
    let resolved = parse_assessment_ref(reference).and_then(|(d, s, a)| {
        batch.get(d)?.sentences.get(s)?.assessments.get(a)
    });

    if resolved.is_none() {
        warn!(reference, "Skipping unresolvable assessment reference");
    }
    resolved
}
