//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Lectern - conference presentation analysis with configurable LLM providers
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(about = "Analyze conference presentations with configurable LLM providers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a presentation from documents and resource URLs
    Analyze(AnalyzeArgs),

    /// List the available prompt templates
    Templates,
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Presentation title
    #[arg(long)]
    pub title: String,

    /// Presenter or author names
    #[arg(long)]
    pub presenters: String,

    /// Your personal notes about the session
    #[arg(long)]
    pub notes: String,

    /// Path to a slide deck (pdf, pptx, ppt)
    #[arg(long, conflicts_with = "deck_url")]
    pub deck: Option<PathBuf>,

    /// URL of a slide deck to download
    #[arg(long)]
    pub deck_url: Option<String>,

    /// Path to a transcript (txt, vtt)
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Supporting resource URL, repeatable
    #[arg(long = "resource-url")]
    pub resource_urls: Vec<String>,

    /// GitHub repository with lab guides and code samples
    #[arg(long)]
    pub github_url: Option<String>,

    /// Prompt template identifier
    #[arg(long, default_value = "presales_engineer")]
    pub template: String,

    /// Directory for the generated report
    #[arg(long, default_value = "outputs")]
    pub output_dir: PathBuf,
}
