//! Lectern CLI binary.
//!
//! This binary provides command-line access to the analysis pipeline:
//! - Analyze a presentation from local files, remote documents, and URLs
//! - List the available prompt templates

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{handle_analyze, handle_templates, Cli, Commands};

    // Load .env before anything reads the environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Analyze(args) => {
            handle_analyze(args).await?;
        }

        Commands::Templates => {
            handle_templates()?;
        }
    }

    Ok(())
}
