//! The analysis pipeline: extract, fetch, render, generate.

use chrono::Local;
use derive_builder::Builder;
use derive_getters::Getters;
use lectern_core::{
    combine_sources, AnalysisRequest, AnalysisResult, ContentSource, DocumentKind, OutputMetadata,
};
use lectern_error::{
    LecternResult, PipelineError, PipelineErrorKind, ValidationError, ValidationErrorKind,
};
use lectern_models::{GenerationDriver, GenerationRequest};
use lectern_prompt::{render, TemplateStore};
use lectern_scrape::WebFetcher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Everything one analysis invocation needs, as supplied by the caller.
///
/// # Examples
///
/// ```
/// use lectern::AnalysisInput;
///
/// let input = AnalysisInput::builder()
///     .title("Intro to X")
///     .presenters("A. Speaker")
///     .notes("solid overview")
///     .resource_urls(vec!["https://example.com/docs".to_string()])
///     .build()
///     .unwrap();
/// assert_eq!(input.template_id(), "presales_engineer");
/// ```
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct AnalysisInput {
    /// Presentation title
    title: String,
    /// Presenter or author names
    presenters: String,
    /// The attendee's personal notes
    notes: String,
    /// Slide deck source, local bytes or a remote URL
    #[builder(default)]
    deck: Option<ContentSource>,
    /// Transcript source
    #[builder(default)]
    transcript: Option<ContentSource>,
    /// Supporting resource URLs, fetched in order
    #[builder(default)]
    resource_urls: Vec<String>,
    /// Optional GitHub repository URL
    #[builder(default)]
    github_url: Option<String>,
    /// Prompt template identifier
    #[builder(default = "lectern_prompt::DEFAULT_TEMPLATE_ID.to_string()")]
    template_id: String,
}

impl AnalysisInput {
    /// Builder for an analysis input.
    pub fn builder() -> AnalysisInputBuilder {
        AnalysisInputBuilder::default()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (value, name) in [
            (&self.title, "title"),
            (&self.presenters, "presenters"),
            (&self.notes, "notes"),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::MissingField(
                    name.to_string(),
                )));
            }
        }
        if self.deck.is_none() && self.transcript.is_none() && self.resource_urls.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::NoContent));
        }
        Ok(())
    }
}

/// What one pipeline run produced.
#[derive(Debug, Clone, Getters)]
pub struct AnalysisOutcome {
    /// The generation outcome, successful or not
    result: AnalysisResult,
    /// Where the Markdown report was written, on success
    markdown_path: Option<PathBuf>,
    /// Resource URLs that could not be fetched
    failed_urls: Vec<String>,
}

/// A downloaded document scoped to one request.
///
/// The file is removed when the guard drops, on every exit path.
struct TempDocument {
    path: PathBuf,
}

impl TempDocument {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDocument {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Cleaned up temporary file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove temporary file"),
        }
    }
}

/// The sequential analysis pipeline.
///
/// Each run is a single logical thread of control: extract, fetch,
/// render, generate, write. No state is shared across runs.
pub struct Pipeline {
    templates: TemplateStore,
    fetcher: WebFetcher,
    driver: Arc<dyn GenerationDriver>,
    output_dir: PathBuf,
}

impl Pipeline {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        templates: TemplateStore,
        driver: Arc<dyn GenerationDriver>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            templates,
            fetcher: WebFetcher::default(),
            driver,
            output_dir: output_dir.into(),
        }
    }

    /// Run one analysis end to end.
    ///
    /// Validation and extraction problems are returned as errors;
    /// generation failures are folded into the outcome's
    /// [`AnalysisResult`] so the caller can render them without
    /// treating them as faults.
    #[instrument(skip(self, input), fields(title = %input.title()))]
    pub async fn run(&self, input: &AnalysisInput) -> LecternResult<AnalysisOutcome> {
        input.validate()?;
        let started = Local::now();

        // Guards keep downloaded documents alive until the run exits,
        // then delete them on success and failure alike.
        let mut temp_guards: Vec<TempDocument> = Vec::new();

        let deck_text = match input.deck() {
            Some(source) => Some(
                self.extract_document(source, DocumentKind::Deck, &mut temp_guards)
                    .await?,
            ),
            None => None,
        };
        let transcript_text = match input.transcript() {
            Some(source) => Some(
                self.extract_document(source, DocumentKind::Transcript, &mut temp_guards)
                    .await?,
            ),
            None => None,
        };

        let combined_text = combine_sources(deck_text.as_deref(), transcript_text.as_deref());

        let batch = self.fetcher.fetch_all(input.resource_urls()).await;
        if !input.resource_urls().is_empty() && !batch.is_success() {
            warn!("Could not fetch any of the provided resource URLs");
        } else if !batch.failed_urls().is_empty() {
            warn!(failed = batch.failed_urls().len(), "Some resource URLs could not be fetched");
        }

        let request = AnalysisRequest::builder()
            .title(input.title().clone())
            .presenters(input.presenters().clone())
            .user_notes(input.notes().clone())
            .combined_text(combined_text)
            .github_url(input.github_url().clone())
            .resources(batch.resources().clone())
            .template_id(input.template_id().clone())
            .build()
            .map_err(|e| {
                ValidationError::new(ValidationErrorKind::MalformedRequest(e.to_string()))
            })?;
        request.validate()?;

        let template = self.templates.load_or_fallback(request.template_id());
        let prompt = render(&template, &request);
        debug!(chars = prompt.len(), template = %template.name(), "Rendered analysis prompt");

        let generation = GenerationRequest::builder().prompt(prompt).build().map_err(|e| {
            ValidationError::new(ValidationErrorKind::MalformedRequest(e.to_string()))
        })?;

        info!(provider = self.driver.provider_name(), "Requesting analysis");
        let result = match self.driver.generate(&generation).await {
            Ok(output) => {
                info!(
                    provider = %output.provider(),
                    model = %output.model(),
                    "Received analysis response"
                );
                AnalysisResult::completed(output.text().clone(), output.provider(), output.model())
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                AnalysisResult::failed(e.to_string())
            }
        };

        let markdown_path = if result.success() {
            let metadata = OutputMetadata::builder()
                .title(input.title().clone())
                .presenters(input.presenters().clone())
                .date(started.format("%B %d, %Y").to_string())
                .time(started.format("%I:%M %p").to_string())
                .github_url(input.github_url().clone())
                .build()
                .map_err(|e| {
                    ValidationError::new(ValidationErrorKind::MalformedRequest(e.to_string()))
                })?;
            let filename = format!("analysis_{}.md", started.format("%Y%m%d_%H%M%S"));
            Some(crate::write_markdown(
                &result,
                &metadata,
                &self.output_dir,
                &filename,
            )?)
        } else {
            None
        };

        Ok(AnalysisOutcome {
            result,
            markdown_path,
            failed_urls: batch.failed_urls().clone(),
        })
    }

    /// Resolve a content source to extracted text, downloading remote
    /// documents into guarded temp files first.
    async fn extract_document(
        &self,
        source: &ContentSource,
        expected: DocumentKind,
        temp_guards: &mut Vec<TempDocument>,
    ) -> LecternResult<String> {
        let source = match source {
            ContentSource::RemoteUrl { uri } => {
                let downloaded = self
                    .fetcher
                    .download_document(uri, &std::env::temp_dir())
                    .await?;
                let guard = TempDocument::new(downloaded.path().clone());
                let bytes = std::fs::read(guard.path()).map_err(|e| {
                    PipelineError::new(PipelineErrorKind::InputRead {
                        path: guard.path().display().to_string(),
                        message: e.to_string(),
                    })
                })?;
                let extension = downloaded.extension().clone();
                temp_guards.push(guard);
                match expected {
                    DocumentKind::Deck => ContentSource::Deck { bytes, extension },
                    DocumentKind::Transcript => ContentSource::Transcript { bytes, extension },
                }
            }
            other => other.clone(),
        };

        let extension = source.extension().unwrap_or_default();
        if DocumentKind::from_extension(extension) != Some(expected) {
            return Err(ValidationError::new(ValidationErrorKind::DisallowedFileType(
                extension.to_string(),
            ))
            .into());
        }

        let extracted = lectern_extract::extract(&source)?;
        if extracted.is_empty() {
            let what = match expected {
                DocumentKind::Deck => "the presentation",
                DocumentKind::Transcript => "the transcript",
            };
            return Err(ValidationError::new(ValidationErrorKind::EmptyYield(
                what.to_string(),
            ))
            .into());
        }

        info!(
            kind = %expected,
            units = extracted.unit_count(),
            chars = extracted.text().len(),
            "Extracted document text"
        );
        Ok(extracted.text().clone())
    }
}
