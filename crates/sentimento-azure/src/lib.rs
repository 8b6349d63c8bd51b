//! # Sentimento Azure
//!
//! Client for the Azure AI Language sentiment endpoint with opinion mining.
//!
//! The wire format lives in [`wire`]; [`AzureSentimentClient`] implements
//! [`sentimento_core::SentimentAnalyzer`] on top of it.

pub mod client;
pub mod wire;

pub use client::{service_from_config, AzureSentimentClient, API_VERSION};
