//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sentimento_core::AnalyzerConfig;
use tracing::info;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to logs/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("logs").join("serve.log"))
    }
}

pub async fn execute(args: ServeArgs, config: &AnalyzerConfig) -> Result<()> {
    let service = sentimento_azure::service_from_config(config);
    info!(
        host = %args.host,
        port = args.port,
        configured = service.is_configured(),
        "Starting web server"
    );

    println!();
    println!("  {} {}", "Sentimento".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Client".green(), args.host, args.port);
    println!("  {}     http://{}:{}/api", "API".green(), args.host, args.port);
    if !service.is_configured() {
        println!(
            "  {} {}",
            "!".yellow().bold(),
            "AZURE_LANGUAGE_KEY / AZURE_LANGUAGE_ENDPOINT not set; analysis requests will fail".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sentimento_web::run_server(service, &args.host, args.port).await?;

    Ok(())
}
