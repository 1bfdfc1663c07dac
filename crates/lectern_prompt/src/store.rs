//! Directory-backed template collection.

use crate::PromptTemplate;
use lectern_error::{TemplateError, TemplateErrorKind, TemplateResult};
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// The baseline analysis perspective used when none is requested.
pub const DEFAULT_TEMPLATE_ID: &str = "presales_engineer";

/// Metadata for one available template, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct TemplateSummary {
    /// Template identifier (filename without extension)
    id: String,
    /// Display name
    name: String,
    /// One-line description
    description: String,
}

/// Read-only collection of JSON templates keyed by filename.
///
/// # Examples
///
/// ```no_run
/// use lectern_prompt::{TemplateStore, DEFAULT_TEMPLATE_ID};
///
/// let store = TemplateStore::new("templates");
/// let template = store.load_or_fallback(DEFAULT_TEMPLATE_ID);
/// assert!(!template.name().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    /// Create a store over a template directory. The directory is read
    /// lazily, so a missing directory only surfaces on load.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// List available templates sorted by display name.
    ///
    /// Unparseable files are skipped with a warning rather than
    /// failing the listing.
    #[instrument(skip(self))]
    pub fn available(&self) -> Vec<TemplateSummary> {
        let mut summaries = Vec::new();

        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Template directory not readable");
                return summaries;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load(id) {
                Ok(template) => summaries.push(TemplateSummary {
                    id: id.to_string(),
                    name: template.name().clone(),
                    description: template.description().clone(),
                }),
                Err(e) => {
                    warn!(id = %id, error = %e, "Skipping unparseable template");
                }
            }
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }

    /// Load one template by id.
    #[instrument(skip(self))]
    pub fn load(&self, id: &str) -> TemplateResult<PromptTemplate> {
        let path = self.dir.join(format!("{id}.json"));
        if !path.exists() {
            return Err(TemplateError::new(TemplateErrorKind::NotFound(
                id.to_string(),
            )));
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| TemplateError::new(TemplateErrorKind::FileRead(e.to_string())))?;

        let mut template: PromptTemplate = serde_json::from_str(&raw)
            .map_err(|e| TemplateError::new(TemplateErrorKind::JsonParse(e.to_string())))?;
        template.set_id(id);

        debug!(id = %id, name = %template.name(), "Loaded prompt template");
        Ok(template)
    }

    /// Load a template, warning and substituting the built-in generic
    /// template when the id cannot be resolved.
    pub fn load_or_fallback(&self, id: &str) -> PromptTemplate {
        match self.load(id) {
            Ok(template) => template,
            Err(e) => {
                warn!(id = %id, error = %e, "Prompt template not found, using generic fallback");
                PromptTemplate::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_template(dir: &std::path::Path, id: &str, body: &str) {
        let mut file = std::fs::File::create(dir.join(format!("{id}.json"))).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    #[test]
    fn listing_sorts_by_name_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        write_template(
            dir.path(),
            "zeta",
            r#"{"name": "Alpha View", "description": "a"}"#,
        );
        write_template(
            dir.path(),
            "alpha",
            r#"{"name": "Zed View", "description": "z"}"#,
        );
        write_template(dir.path(), "broken", "{not json");

        let store = TemplateStore::new(dir.path());
        let summaries = store.available();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name(), "Alpha View");
        assert_eq!(summaries[0].id(), "zeta");
        assert_eq!(summaries[1].name(), "Zed View");
    }

    #[test]
    fn load_fills_id_from_filename() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), "custom", r#"{"name": "Custom"}"#);

        let store = TemplateStore::new(dir.path());
        let template = store.load("custom").unwrap();
        assert_eq!(template.id(), "custom");
    }

    #[test]
    fn missing_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        let err = store.load("nope").unwrap_err();
        assert!(matches!(err.kind, TemplateErrorKind::NotFound(ref id) if id == "nope"));
    }

    #[test]
    fn fallback_substitutes_for_missing_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::new(dir.path());
        let template = store.load_or_fallback("nope");
        assert_eq!(template.id(), "generic");
    }
}
