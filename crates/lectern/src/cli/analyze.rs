//! The analyze command handler.

use crate::cli::{templates_dir, AnalyzeArgs};
use lectern::{AnalysisInput, ContentSource, Pipeline, ProviderClient, TemplateStore};
use lectern_error::{LecternError, PipelineError, PipelineErrorKind};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

fn read_source(path: &Path) -> Result<ContentSource, LecternError> {
    let bytes = std::fs::read(path).map_err(|e| {
        PipelineError::new(PipelineErrorKind::InputRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    Ok(match lectern_core::DocumentKind::from_extension(&extension) {
        Some(lectern_core::DocumentKind::Transcript) => {
            ContentSource::Transcript { bytes, extension }
        }
        _ => ContentSource::Deck { bytes, extension },
    })
}

/// Run one analysis from command-line arguments.
pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = ProviderClient::from_env()?;
    let pipeline = Pipeline::new(
        TemplateStore::new(templates_dir()),
        Arc::new(client),
        &args.output_dir,
    );

    let deck = match (&args.deck, &args.deck_url) {
        (Some(path), _) => Some(read_source(path)?),
        (None, Some(url)) => Some(ContentSource::RemoteUrl { uri: url.clone() }),
        (None, None) => None,
    };
    let transcript = args.transcript.as_deref().map(read_source).transpose()?;

    let input = AnalysisInput::builder()
        .title(args.title)
        .presenters(args.presenters)
        .notes(args.notes)
        .deck(deck)
        .transcript(transcript)
        .resource_urls(args.resource_urls)
        .github_url(args.github_url)
        .template_id(args.template)
        .build()?;

    let outcome = pipeline.run(&input).await?;

    for url in outcome.failed_urls() {
        eprintln!("warning: could not fetch {url}");
    }

    if !outcome.result().success() {
        eprintln!("Analysis failed: {}", outcome.result().error());
        std::process::exit(1);
    }

    println!("{}", outcome.result().text());
    if let Some(path) = outcome.markdown_path() {
        info!(path = %path.display(), "Report written");
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}
