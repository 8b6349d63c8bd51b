//! Sentimento Core Library
//!
//! Domain models, configuration and the analysis service that turns raw
//! text into a display-friendly sentiment breakdown.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod model;
pub mod service;

pub use analyzer::{DocumentError, DocumentOutcome, SentimentAnalyzer, TextDocument};
pub use config::AnalyzerConfig;
pub use error::{SentimentoError, SentimentoResult};
pub use service::AnalysisService;
