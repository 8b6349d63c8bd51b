//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sentimento_core::config::{ENDPOINT_ENV, KEY_ENV};
use sentimento_core::model::DEFAULT_LANGUAGE;
use sentimento_core::AnalyzerConfig;

pub mod analyze;
pub mod serve;

/// Sentimento - sentiment analysis proxy for Azure AI Language
#[derive(Parser)]
#[command(name = "sentimento")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP proxy and web client
    Serve(serve::ServeArgs),

    /// Analyze a text and print the sentiment breakdown
    Analyze(analyze::AnalyzeArgs),
}

/// Sentiment service settings.
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Azure AI Language resource key
    #[arg(long = "key", env = KEY_ENV, global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Azure AI Language endpoint URL
    #[arg(long = "endpoint", env = ENDPOINT_ENV, global = true)]
    pub endpoint: Option<String>,

    /// Language used when a request does not specify one
    #[arg(long, default_value = DEFAULT_LANGUAGE, global = true)]
    pub default_language: String,

    /// Upstream request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,
}

impl ServiceArgs {
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            key: self.key.clone(),
            endpoint: self.endpoint.clone(),
            default_language: self.default_language.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = self.service.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, &config).await,
            Commands::Analyze(args) => analyze::execute(args, &config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_service_args_build_config() {
        let cli = Cli::try_parse_from([
            "sentimento",
            "--key",
            "abc",
            "--endpoint",
            "https://demo.cognitiveservices.azure.com",
            "--timeout",
            "5",
            "serve",
        ])
        .unwrap();

        let config = cli.service.to_config();
        assert!(config.is_configured());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.default_language, "pt");
    }
}
