//! Fetcher tests against a local fixture HTTP server.

use lectern_scrape::WebFetcher;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a fixed HTTP response for a bounded number of connections.
async fn fixture_server(status_line: &'static str, body: &'static str, connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{}", addr)
}

/// Accept one connection and never respond, forcing a client timeout.
async fn hanging_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut buf = [0u8; 2048];
        let _ = stream.read(&mut buf).await;
        tokio::time::sleep(Duration::from_secs(60)).await;
        drop(stream);
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_url_extracts_title_and_readable_text() -> anyhow::Result<()> {
    let base = fixture_server(
        "HTTP/1.1 200 OK",
        "<html><head><title>Fixture</title></head>\
         <body><script>junk()</script><p>useful text</p></body></html>",
        1,
    )
    .await;

    let fetcher = WebFetcher::default();
    let resource = fetcher.fetch_url(&base).await?;

    assert_eq!(resource.title(), "Fixture");
    assert_eq!(resource.content(), "useful text");
    Ok(())
}

#[tokio::test]
async fn fetch_all_records_failures_and_keeps_successes() {
    let good = fixture_server(
        "HTTP/1.1 200 OK",
        "<html><head><title>Good</title></head><body><p>content</p></body></html>",
        1,
    )
    .await;
    let bad = fixture_server("HTTP/1.1 404 Not Found", "gone", 1).await;

    let fetcher = WebFetcher::default();
    let batch = fetcher.fetch_all(&[good.clone(), bad.clone()]).await;

    assert!(batch.is_success());
    assert_eq!(batch.resources().len(), 1);
    assert_eq!(batch.resources()[0].title(), "Good");
    assert_eq!(batch.failed_urls(), &vec![bad]);
    assert_eq!(*batch.requested(), 2);
}

#[tokio::test]
async fn timed_out_url_is_recorded_and_input_order_preserved() {
    let first = fixture_server(
        "HTTP/1.1 200 OK",
        "<html><head><title>First</title></head><body><p>one</p></body></html>",
        1,
    )
    .await;
    let hung = hanging_server().await;
    let last = fixture_server(
        "HTTP/1.1 200 OK",
        "<html><head><title>Last</title></head><body><p>three</p></body></html>",
        1,
    )
    .await;

    let fetcher = WebFetcher::new(Duration::from_secs(1));
    let batch = fetcher.fetch_all(&[first, hung.clone(), last]).await;

    assert!(batch.is_success());
    let titles: Vec<&str> = batch
        .resources()
        .iter()
        .map(|r| r.title().as_str())
        .collect();
    assert_eq!(titles, ["First", "Last"]);
    assert_eq!(batch.failed_urls(), &vec![hung]);
    assert_eq!(*batch.requested(), 3);
}

#[tokio::test]
async fn all_failures_is_a_batch_failure() {
    let bad = fixture_server("HTTP/1.1 500 Internal Server Error", "oops", 1).await;

    let fetcher = WebFetcher::default();
    let batch = fetcher.fetch_all(&[bad]).await;

    assert!(!batch.is_success());
    assert!(batch.resources().is_empty());
    assert_eq!(batch.failed_urls().len(), 1);
}

#[tokio::test]
async fn unreachable_host_is_recorded_not_fatal() {
    // Port 1 on localhost refuses connections in practice.
    let fetcher = WebFetcher::new(Duration::from_secs(2));
    let batch = fetcher
        .fetch_all(&["http://127.0.0.1:1/nope".to_string()])
        .await;

    assert!(!batch.is_success());
    assert_eq!(batch.failed_urls().len(), 1);
}

#[tokio::test]
async fn download_rejects_unsupported_extension() {
    let fetcher = WebFetcher::default();
    let dir = std::env::temp_dir();
    let err = fetcher
        .download_document("https://example.com/malware.exe", &dir)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("supported document type"));
}

#[tokio::test]
async fn download_rejects_invalid_url() {
    let fetcher = WebFetcher::default();
    let dir = std::env::temp_dir();
    let err = fetcher
        .download_document("not a url", &dir)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid URL"));
}
