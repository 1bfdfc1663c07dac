//! Fetched web resource entities.

use serde::{Deserialize, Serialize};

/// Maximum characters of content retained per fetched resource.
pub const MAX_RESOURCE_CHARS: usize = 10_000;

/// Readable content retrieved from one successfully fetched URL.
///
/// Failed URLs are recorded separately as plain strings, not as
/// `FetchedResource` values.
///
/// # Examples
///
/// ```
/// use lectern_core::{FetchedResource, MAX_RESOURCE_CHARS};
///
/// let resource = FetchedResource::new(
///     "https://example.com",
///     "Example Domain",
///     "x".repeat(50_000),
/// );
/// assert_eq!(resource.content().chars().count(), MAX_RESOURCE_CHARS);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct FetchedResource {
    /// Source URL
    url: String,
    /// Page title, falling back to the URL when untitled
    title: String,
    /// Readable text, capped at [`MAX_RESOURCE_CHARS`] characters
    content: String,
}

impl FetchedResource {
    /// Create a resource, capping content at [`MAX_RESOURCE_CHARS`].
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content: String = content.into();
        let content = if content.chars().count() > MAX_RESOURCE_CHARS {
            content.chars().take(MAX_RESOURCE_CHARS).collect()
        } else {
            content
        };
        Self {
            url: url.into(),
            title: title.into(),
            content,
        }
    }
}
