//! Markdown report writing.

use lectern_core::{AnalysisResult, OutputMetadata};
use lectern_error::{PipelineError, PipelineErrorKind, PipelineResult};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Persist an analysis as a Markdown report with a metadata header.
///
/// Creates `output_dir` if needed and returns the written path.
///
/// # Examples
///
/// ```no_run
/// use lectern::write_markdown;
/// use lectern_core::{AnalysisResult, OutputMetadata};
///
/// let result = AnalysisResult::completed("## Summary...", "anthropic", "claude-sonnet-4-20250514");
/// let metadata = OutputMetadata::builder()
///     .title("Intro to X")
///     .presenters("A")
///     .date("August 28, 2026")
///     .time("09:15 AM")
///     .build()
///     .unwrap();
/// let path = write_markdown(&result, &metadata, "outputs", "analysis_20260828_091500.md").unwrap();
/// assert!(path.ends_with("analysis_20260828_091500.md"));
/// ```
#[instrument(skip(result, metadata))]
pub fn write_markdown(
    result: &AnalysisResult,
    metadata: &OutputMetadata,
    output_dir: impl AsRef<Path> + std::fmt::Debug,
    filename: &str,
) -> PipelineResult<PathBuf> {
    let output_dir = output_dir.as_ref();
    std::fs::create_dir_all(output_dir).map_err(|e| {
        PipelineError::new(PipelineErrorKind::OutputWrite {
            path: output_dir.display().to_string(),
            message: e.to_string(),
        })
    })?;

    let path = output_dir.join(filename);
    let body = render_markdown(result, metadata);
    std::fs::write(&path, body).map_err(|e| {
        PipelineError::new(PipelineErrorKind::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    info!(path = %path.display(), "Wrote analysis report");
    Ok(path)
}

fn render_markdown(result: &AnalysisResult, metadata: &OutputMetadata) -> String {
    let mut lines = vec![
        format!("# Presentation Analysis: {}", metadata.title()),
        String::new(),
        format!("**Presenters:** {}", metadata.presenters()),
        format!("**Date:** {}", metadata.date()),
        format!("**Time:** {}", metadata.time()),
    ];
    if let Some(url) = metadata.github_url() {
        lines.push(format!("**GitHub Repository:** {}", url));
    }
    lines.push(format!(
        "**Generated by:** {} ({})",
        result.provider(),
        result.model()
    ));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(result.text().clone());
    lines.push(String::new());
    lines.join("\n")
}
