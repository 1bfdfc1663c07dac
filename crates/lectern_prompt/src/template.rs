//! The prompt template data model.

use serde::{Deserialize, Serialize};

fn default_role() -> String {
    "technical advisor".to_string()
}

/// A nested heading rendered beneath its parent section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptSubsection {
    /// Subsection heading text
    title: String,
    /// Instruction prose under the heading
    #[serde(default)]
    instruction: String,
}

/// One response section the model is asked to produce.
///
/// Sections are emitted in template order; the renderer never omits or
/// reorders them based on request content. A template that wants a
/// section only under some condition ships a variant without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptSection {
    /// Section heading text
    #[serde(default)]
    title: Option<String>,
    /// Instruction prose under the heading
    #[serde(default)]
    instruction: Option<String>,
    /// Nested subsections, rendered in order
    #[serde(default)]
    subsections: Vec<PromptSubsection>,
}

/// A complete analysis perspective loaded from JSON.
///
/// The `task_description` may carry `{content_type}`,
/// `{resources_note}`, and `{resource_focus}` markers, replaced by the
/// renderer with strings computed from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptTemplate {
    /// Template identifier, taken from the filename
    #[serde(default)]
    id: String,
    /// Display name
    name: String,
    /// One-line description of the perspective
    #[serde(default)]
    description: String,
    /// The role the model is asked to assume
    #[serde(default = "default_role")]
    role: String,
    /// Task prose with substitution markers
    #[serde(default)]
    task_description: String,
    /// Ordered response sections
    #[serde(default)]
    sections: Vec<PromptSection>,
    /// Closing instruction appended after the sections
    #[serde(default)]
    closing: Option<String>,
}

impl PromptTemplate {
    pub(crate) fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    /// The built-in generic template used when a requested id cannot
    /// be resolved. It renders through the same engine as any loaded
    /// template, so the two paths cannot drift.
    pub fn fallback() -> Self {
        serde_json::from_str(FALLBACK_TEMPLATE_JSON)
            .expect("built-in fallback template is valid JSON")
    }
}

/// Generic technical-analysis template, embedded so the engine always
/// has something to render.
const FALLBACK_TEMPLATE_JSON: &str = r#"{
    "id": "generic",
    "name": "Generic Technical Analysis",
    "description": "Broad technical analysis that works for any role",
    "role": "technical advisor",
    "task_description": "Analyze this {content_type}{resources_note} and provide comprehensive technical insights.{resource_focus}",
    "sections": [
        {
            "title": "EXECUTIVE SUMMARY",
            "instruction": "Provide a 3-5 sentence overview of the key value and relevance of this content."
        },
        {
            "title": "KEY TECHNICAL INSIGHTS",
            "instruction": "List 5-8 important technical concepts, technologies, or methodologies discussed:\n- [Insight 1]\n- [Insight 2]\n..."
        },
        {
            "title": "PRACTICAL APPLICATIONS",
            "subsections": [
                {
                    "title": "Use Cases",
                    "instruction": "Explain 2-3 specific ways this information can be applied in real-world scenarios."
                },
                {
                    "title": "Implementation Considerations",
                    "instruction": "Describe key factors to consider when implementing these concepts."
                },
                {
                    "title": "Potential Challenges",
                    "instruction": "List 2-3 common challenges and how to address them."
                }
            ]
        },
        {
            "title": "DEEP DIVE TOPICS",
            "instruction": "Identify 3-5 areas that warrant further exploration or research."
        },
        {
            "title": "FOLLOW-UP QUESTIONS",
            "instruction": "List 5-7 questions that will help deepen understanding of the topic:\n1. [Question 1]\n2. [Question 2]\n..."
        }
    ],
    "closing": "Keep your response practical, technically accurate, and actionable."
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_template_parses() {
        let template = PromptTemplate::fallback();
        assert_eq!(template.id(), "generic");
        assert_eq!(template.role(), "technical advisor");
        assert_eq!(template.sections().len(), 5);
        assert!(template.closing().is_some());
    }

    #[test]
    fn missing_role_defaults_to_technical_advisor() {
        let template: PromptTemplate =
            serde_json::from_str(r#"{"name": "Bare", "task_description": "x"}"#).unwrap();
        assert_eq!(template.role(), "technical advisor");
        assert!(template.sections().is_empty());
    }
}
