//! Web resource fetching for Lectern.
//!
//! Retrieves and cleans readable text from supporting-material URLs
//! and downloads remote deck/transcript documents for extraction.
//! Fetches are independent per URL: one failure never aborts a batch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod download;
mod fetcher;

pub use download::DownloadedDocument;
pub use fetcher::{FetchBatch, WebFetcher, DEFAULT_FETCH_TIMEOUT_SECS};
