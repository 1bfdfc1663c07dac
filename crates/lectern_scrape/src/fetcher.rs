//! Batch URL fetching with readable-text cleanup.

use lectern_core::FetchedResource;
use lectern_error::{FetchError, FetchErrorKind, FetchResult};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default per-request timeout for resource fetches.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Non-content elements removed before text extraction.
const SKIP_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Outcome of one batch of resource fetches.
///
/// The success definition is asymmetric on purpose: an empty input is
/// a success, while a non-empty input where every URL failed is a
/// batch failure the caller warns about (and may still proceed past
/// when other content exists).
///
/// # Examples
///
/// ```
/// use lectern_scrape::FetchBatch;
///
/// let empty = FetchBatch::new(vec![], vec![], 0);
/// assert!(empty.is_success());
///
/// let all_failed = FetchBatch::new(vec![], vec!["https://a".to_string()], 1);
/// assert!(!all_failed.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct FetchBatch {
    /// Successfully fetched resources, in input order
    resources: Vec<FetchedResource>,
    /// URLs that failed, verbatim, in input order
    failed_urls: Vec<String>,
    /// Number of URLs attempted
    requested: usize,
}

impl FetchBatch {
    /// Assemble a batch outcome.
    pub fn new(
        resources: Vec<FetchedResource>,
        failed_urls: Vec<String>,
        requested: usize,
    ) -> Self {
        Self {
            resources,
            failed_urls,
            requested,
        }
    }

    /// At least one resource was fetched, or nothing was requested.
    pub fn is_success(&self) -> bool {
        self.requested == 0 || !self.resources.is_empty()
    }

    /// One-line summary for logs and user-facing warnings.
    pub fn summary(&self) -> String {
        if self.resources.is_empty() && self.requested > 0 {
            "No resources were successfully fetched".to_string()
        } else if self.failed_urls.is_empty() {
            format!("Successfully fetched {} resource(s)", self.resources.len())
        } else {
            format!(
                "Successfully fetched {} resource(s) ({} failed)",
                self.resources.len(),
                self.failed_urls.len()
            )
        }
    }
}

/// Fetcher for supporting-material web pages.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
}

impl Default for WebFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
    }
}

impl WebFetcher {
    /// Create a fetcher with the given per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed (e.g. no TLS
    /// backend), the same way `reqwest::Client::new` does.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to construct HTTP client");
        Self { client }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Fetch every URL in input order, recording failures per URL.
    ///
    /// Each fetch carries its own timeout; a slow or failing URL never
    /// short-circuits the rest, and the resulting resource list
    /// reflects input order.
    #[instrument(skip(self, urls), fields(count = urls.len()))]
    pub async fn fetch_all(&self, urls: &[String]) -> FetchBatch {
        if urls.is_empty() {
            return FetchBatch::new(Vec::new(), Vec::new(), 0);
        }

        info!(count = urls.len(), "Fetching resource URLs");

        let mut resources = Vec::new();
        let mut failed_urls = Vec::new();

        for url in urls {
            match self.fetch_url(url.trim()).await {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to fetch resource URL");
                    failed_urls.push(url.clone());
                }
            }
        }

        let batch = FetchBatch::new(resources, failed_urls, urls.len());
        info!("{}", batch.summary());
        batch
    }

    /// Fetch and clean a single page.
    #[instrument(skip(self))]
    pub async fn fetch_url(&self, url: &str) -> FetchResult<FetchedResource> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::new(FetchErrorKind::Timeout(url.to_string()))
            } else {
                FetchError::new(FetchErrorKind::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::new(FetchErrorKind::Timeout(url.to_string()))
            } else {
                FetchError::new(FetchErrorKind::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })
            }
        })?;

        let (title, content) = extract_readable(&body, url);
        debug!(url = %url, chars = content.len(), "Fetched resource content");

        Ok(FetchedResource::new(url, title, content))
    }
}

/// Reduce an HTML document to its title and readable lines.
///
/// Non-content subtrees are skipped before text extraction; lines are
/// trimmed and blank lines dropped. The title falls back to the URL
/// string when the page is untitled.
fn extract_readable(html: &str, url: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|el| el.text().collect::<String>().trim().to_string())
        })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| url.to_string());

    let mut text = String::new();
    if let Ok(body_selector) = Selector::parse("body") {
        for element in document.select(&body_selector) {
            collect_element_text(&element, &mut text);
        }
    }

    let content = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    (title, content)
}

fn collect_element_text(element: &ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = child.value().as_element() {
            if SKIP_TAGS.contains(&child_el.name()) {
                continue;
            }
            if let Some(child_ref) = ElementRef::wrap(child) {
                collect_element_text(&child_ref, out);
                out.push('\n');
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_extraction_skips_non_content_tags() {
        let html = r#"
        <html>
        <head><title>Test Page</title></head>
        <body>
            <script>alert('ignore me')</script>
            <nav>Home | About</nav>
            <h1>Hello World</h1>
            <p>This is a test paragraph.</p>
            <footer>copyright</footer>
        </body>
        </html>
        "#;

        let (title, content) = extract_readable(html, "https://example.com");
        assert_eq!(title, "Test Page");
        assert!(content.contains("Hello World"));
        assert!(content.contains("This is a test paragraph."));
        assert!(!content.contains("alert"));
        assert!(!content.contains("Home | About"));
        assert!(!content.contains("copyright"));
    }

    #[test]
    fn untitled_page_falls_back_to_url() {
        let (title, _) = extract_readable("<body><p>x</p></body>", "https://example.com/a");
        assert_eq!(title, "https://example.com/a");
    }

    #[test]
    fn blank_lines_are_dropped_and_lines_trimmed() {
        let html = "<body><p>  spaced  </p><p></p><p>next</p></body>";
        let (_, content) = extract_readable(html, "u");
        assert_eq!(content, "spaced\nnext");
    }

    #[test]
    fn batch_success_asymmetry() {
        assert!(FetchBatch::new(vec![], vec![], 0).is_success());
        assert!(!FetchBatch::new(vec![], vec!["https://a".to_string()], 1).is_success());
        let partial = FetchBatch::new(
            vec![FetchedResource::new("https://b", "B", "body")],
            vec!["https://a".to_string()],
            2,
        );
        assert!(partial.is_success());
    }
}
