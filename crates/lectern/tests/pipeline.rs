//! End-to-end pipeline tests with a recording mock driver.

use async_trait::async_trait;
use lectern::{AnalysisInput, ContentSource, Pipeline, TemplateStore};
use lectern_error::{LecternErrorKind, ModelsError, ModelsResult, ProviderErrorKind};
use lectern_models::{GenerationDriver, GenerationOutput, GenerationRequest};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Driver that records prompts and returns a canned response.
struct MockDriver {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl MockDriver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, request: &GenerationRequest) -> ModelsResult<GenerationOutput> {
        self.prompts.lock().unwrap().push(request.prompt().clone());
        if self.fail {
            return Err(ModelsError::provider(
                "mock",
                ProviderErrorKind::ApiError {
                    status: 529,
                    message: "overloaded".to_string(),
                },
            ));
        }
        Ok(GenerationOutput::new("## Analysis\nDetails.", "mock", "mock-1"))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-1"
    }
}

fn pipeline(driver: Arc<MockDriver>, output_dir: &std::path::Path) -> Pipeline {
    // Nonexistent template dir forces the built-in generic template.
    Pipeline::new(TemplateStore::new("/nonexistent"), driver, output_dir)
}

fn base_input() -> lectern::AnalysisInputBuilder {
    let mut builder = AnalysisInput::builder();
    builder
        .title("Edge Routing at Scale")
        .presenters("R. Vega")
        .notes("strong BGP section");
    builder
}

/// Minimal one-slide pptx assembled in memory.
fn minimal_pptx(slide_text: &str) -> Vec<u8> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut archive = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default();
        archive.start_file("ppt/slides/slide1.xml", options).unwrap();
        write!(
            archive,
            r#"<?xml version="1.0" encoding="UTF-8"?><p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:sp><p:txBody><a:p><a:r><a:t>{slide_text}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#
        )
        .unwrap();
        archive.finish().unwrap();
    }
    cursor.into_inner()
}

async fn fixture_server(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 2048];
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes()).await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn resources_without_deck_focus_the_prompt_on_urls() -> anyhow::Result<()> {
    let url = fixture_server(
        "<html><head><title>BGP Guide</title></head><body><p>route reflectors</p></body></html>",
    )
    .await;
    let dir = tempfile::tempdir()?;
    let driver = MockDriver::new();
    let pipeline = pipeline(driver.clone(), dir.path());

    let input = base_input().resource_urls(vec![url]).build()?;
    let outcome = pipeline.run(&input).await?;

    assert!(outcome.result().success());
    let prompts = driver.prompts();
    assert_eq!(prompts.len(), 1, "driver must be called exactly once");
    assert!(prompts[0].contains("analyzing technical content."));
    assert!(prompts[0].contains("--- Resource 1: BGP Guide ---"));
    assert!(prompts[0].contains("route reflectors"));
    assert!(prompts[0]
        .contains("Focus on the information provided in the resource URLs since no slide deck was provided."));
    Ok(())
}

#[tokio::test]
async fn deck_text_precedes_transcript_text_in_the_prompt() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let driver = MockDriver::new();
    let pipeline = pipeline(driver.clone(), dir.path());

    let input = base_input()
        .deck(Some(ContentSource::Deck {
            bytes: minimal_pptx("anycast overview"),
            extension: "pptx".to_string(),
        }))
        .transcript(Some(ContentSource::Transcript {
            bytes: b"so today we will talk about anycast".to_vec(),
            extension: "txt".to_string(),
        }))
        .build()?;
    let outcome = pipeline.run(&input).await?;

    assert!(outcome.result().success());
    let prompt = driver.prompts().remove(0);
    let deck_at = prompt.find("SLIDE DECK CONTENT:").unwrap();
    let transcript_at = prompt.find("PRESENTATION TRANSCRIPT:").unwrap();
    assert!(deck_at < transcript_at);
    assert!(prompt.contains("anycast overview"));
    assert!(prompt.contains("so today we will talk about anycast"));
    Ok(())
}

#[tokio::test]
async fn successful_run_writes_a_markdown_report() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let driver = MockDriver::new();
    let pipeline = pipeline(driver, dir.path());

    let input = base_input()
        .transcript(Some(ContentSource::Transcript {
            bytes: b"talk content".to_vec(),
            extension: "txt".to_string(),
        }))
        .github_url(Some("https://github.com/acme/labs".to_string()))
        .build()?;
    let outcome = pipeline.run(&input).await?;

    let path = outcome.markdown_path().as_ref().unwrap();
    assert!(path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("analysis_"));

    let report = std::fs::read_to_string(path)?;
    assert!(report.contains("# Presentation Analysis: Edge Routing at Scale"));
    assert!(report.contains("**GitHub Repository:** https://github.com/acme/labs"));
    assert!(report.contains("## Analysis\nDetails."));
    Ok(())
}

#[tokio::test]
async fn generation_failure_is_folded_into_the_result() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let driver = MockDriver::failing();
    let pipeline = pipeline(driver, dir.path());

    let input = base_input()
        .transcript(Some(ContentSource::Transcript {
            bytes: b"talk content".to_vec(),
            extension: "txt".to_string(),
        }))
        .build()?;
    let outcome = pipeline.run(&input).await?;

    assert!(!outcome.result().success());
    assert!(outcome.result().error().contains("529"));
    assert!(outcome.markdown_path().is_none());
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 0, "no report on failure");
    Ok(())
}

#[tokio::test]
async fn missing_required_field_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(MockDriver::new(), dir.path());

    let input = base_input()
        .notes("  ")
        .resource_urls(vec!["https://a".to_string()])
        .build()
        .unwrap();
    let err = pipeline.run(&input).await.unwrap_err();

    assert!(matches!(err.kind(), LecternErrorKind::Validation(_)));
    assert!(err.to_string().contains("notes"));
}

#[tokio::test]
async fn disallowed_deck_extension_is_rejected_before_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let driver = MockDriver::new();
    let pipeline = pipeline(driver.clone(), dir.path());

    let input = base_input()
        .deck(Some(ContentSource::Deck {
            bytes: b"MZ".to_vec(),
            extension: "exe".to_string(),
        }))
        .build()
        .unwrap();
    let err = pipeline.run(&input).await.unwrap_err();

    assert!(err.to_string().contains("Invalid file type"));
    assert!(driver.prompts().is_empty());
}

#[tokio::test]
async fn transcript_extension_cannot_masquerade_as_a_deck() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(MockDriver::new(), dir.path());

    let input = base_input()
        .deck(Some(ContentSource::Deck {
            bytes: b"text".to_vec(),
            extension: "txt".to_string(),
        }))
        .build()
        .unwrap();
    assert!(pipeline.run(&input).await.is_err());
}

#[tokio::test]
async fn empty_deck_yield_surfaces_the_scanned_slides_message() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = pipeline(MockDriver::new(), dir.path());

    let input = base_input()
        .deck(Some(ContentSource::Deck {
            bytes: minimal_pptx(" "),
            extension: "pptx".to_string(),
        }))
        .build()
        .unwrap();
    let err = pipeline.run(&input).await.unwrap_err();

    assert!(err.to_string().contains("image-based (scanned slides) or empty"));
}
