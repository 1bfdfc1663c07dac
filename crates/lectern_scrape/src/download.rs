//! Downloading remote deck and transcript documents to local files.

use crate::WebFetcher;
use lectern_core::{DECK_EXTENSIONS, TRANSCRIPT_EXTENSIONS};
use lectern_error::{FetchError, FetchErrorKind, FetchResult};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use url::Url;

/// A remote document saved to local storage for extraction.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct DownloadedDocument {
    /// Where the document was written
    path: PathBuf,
    /// Filename taken from the URL path
    filename: String,
    /// Lowercased file extension
    extension: String,
}

fn filename_from_url(url: &Url) -> Option<(String, String)> {
    let segment = url.path_segments()?.next_back()?;
    if segment.is_empty() {
        return None;
    }
    let (_, extension) = segment.rsplit_once('.')?;
    Some((segment.to_string(), extension.to_ascii_lowercase()))
}

impl WebFetcher {
    /// Download a deck or transcript document referenced by URL.
    ///
    /// The URL path must end in a supported document extension; pages
    /// and other file types are rejected before any request is made.
    #[instrument(skip(self, output_dir))]
    pub async fn download_document(
        &self,
        url: &str,
        output_dir: &Path,
    ) -> FetchResult<DownloadedDocument> {
        let parsed = Url::parse(url.trim())
            .map_err(|_| FetchError::new(FetchErrorKind::InvalidUrl(url.to_string())))?;

        let (filename, extension) = filename_from_url(&parsed)
            .ok_or_else(|| FetchError::new(FetchErrorKind::UnsupportedDocument(url.to_string())))?;

        if !DECK_EXTENSIONS.contains(&extension.as_str())
            && !TRANSCRIPT_EXTENSIONS.contains(&extension.as_str())
        {
            return Err(FetchError::new(FetchErrorKind::UnsupportedDocument(
                url.to_string(),
            )));
        }

        let response = self.client().get(parsed).send().await.map_err(|e| {
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

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if content_type.starts_with("text/html") {
                warn!(url = %url, content_type = %content_type, "Document URL returned an HTML page");
            }
        }

        let bytes = response.bytes().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })
        })?;

        let path = output_dir.join(&filename);
        std::fs::write(&path, &bytes)
            .map_err(|e| FetchError::new(FetchErrorKind::Io(e.to_string())))?;

        info!(path = %path.display(), bytes = bytes.len(), "Downloaded document");

        Ok(DownloadedDocument {
            path,
            filename,
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_and_extension_come_from_url_path() {
        let url = Url::parse("https://example.com/files/deck.PDF?token=abc").unwrap();
        let (filename, extension) = filename_from_url(&url).unwrap();
        assert_eq!(filename, "deck.PDF");
        assert_eq!(extension, "pdf");
    }

    #[test]
    fn extensionless_path_yields_none() {
        let url = Url::parse("https://example.com/files/deck").unwrap();
        assert!(filename_from_url(&url).is_none());
    }

    #[test]
    fn trailing_slash_yields_none() {
        let url = Url::parse("https://example.com/files/").unwrap();
        assert!(filename_from_url(&url).is_none());
    }
}
