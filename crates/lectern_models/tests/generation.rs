//! Generation-path tests against a local fixture server.

use lectern_models::{GenerationDriver, GenerationRequest, OllamaDriver};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

async fn fixture_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 8192];
        let _ = stream.read(&mut buf).await;
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes()).await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn successful_generation_is_tagged_with_provider_and_model() -> anyhow::Result<()> {
    let base = fixture_server("HTTP/1.1 200 OK", r#"{"response": "analysis text"}"#).await;
    let driver = OllamaDriver::new(base, "llama3.1");

    let request = GenerationRequest::builder()
        .prompt("Summarize this talk.")
        .build()?;
    let output = driver.generate(&request).await?;

    assert_eq!(output.text(), "analysis text");
    assert_eq!(output.provider(), "ollama");
    assert_eq!(output.model(), "llama3.1");
    Ok(())
}

#[tokio::test]
async fn api_error_carries_status_and_body() {
    let base = fixture_server("HTTP/1.1 500 Internal Server Error", "model not loaded").await;
    let driver = OllamaDriver::new(base, "llama3.1");

    let request = GenerationRequest::builder().prompt("p").build().unwrap();
    let err = driver.generate(&request).await.unwrap_err();
    let message = err.to_string();

    assert!(message.contains("500"));
    assert!(message.contains("model not loaded"));
}

#[tokio::test]
async fn empty_response_text_is_an_error() {
    let base = fixture_server("HTTP/1.1 200 OK", r#"{"response": ""}"#).await;
    let driver = OllamaDriver::new(base, "llama3.1");

    let request = GenerationRequest::builder().prompt("p").build().unwrap();
    let err = driver.generate(&request).await.unwrap_err();

    assert!(err.to_string().contains("no text output"));
}

#[tokio::test]
async fn transport_failure_is_reported_not_panicked() {
    let driver = OllamaDriver::new("http://127.0.0.1:1", "llama3.1");

    let request = GenerationRequest::builder().prompt("p").build().unwrap();
    let err = driver.generate(&request).await.unwrap_err();

    assert!(err.to_string().contains("Request failed"));
}
