//! Deterministic prompt assembly.

use crate::{PromptSection, PromptTemplate};
use lectern_core::AnalysisRequest;

const CONTENT_TYPE_SLIDES: &str = "presentation";
const CONTENT_TYPE_BARE: &str = "technical content";

/// Assemble the complete instruction string for one analysis request.
///
/// Assembly builds an ordered list of fragments, skipping the absent
/// ones, and joins the rest with newlines. Section order always
/// follows the template.
///
/// # Examples
///
/// ```
/// use lectern_core::AnalysisRequest;
/// use lectern_prompt::{render, PromptTemplate};
///
/// let request = AnalysisRequest::builder()
///     .title("Intro to X")
///     .presenters("A")
///     .user_notes("notes")
///     .combined_text("SLIDE DECK CONTENT:\nslides")
///     .template_id("generic")
///     .build()
///     .unwrap();
///
/// let prompt = render(&PromptTemplate::fallback(), &request);
/// assert!(prompt.contains("- Title: Intro to X"));
/// assert!(prompt.contains("## EXECUTIVE SUMMARY"));
/// ```
pub fn render(template: &PromptTemplate, request: &AnalysisRequest) -> String {
    let has_slides = request.has_slides();
    let has_resources = !request.resources().is_empty();
    let content_type = if has_slides {
        CONTENT_TYPE_SLIDES
    } else {
        CONTENT_TYPE_BARE
    };

    let mut lines: Vec<String> = vec![
        format!("You are a {} analyzing {}.", template.role(), content_type),
        String::new(),
        "CONTEXT:".to_string(),
        format!("- Title: {}", request.title()),
        format!(
            "- {}: {}",
            if has_slides {
                "Presenters"
            } else {
                "Authors/Sources"
            },
            request.presenters()
        ),
        format!("- Attendee's Personal Notes: {}", request.user_notes()),
    ];

    if let Some(url) = request.github_url() {
        lines.push(format!(
            "- GitHub Repository: {} (contains lab guides, code samples, and related materials)",
            url
        ));
    }

    if has_slides {
        lines.push(String::new());
        lines.push("SLIDE CONTENT EXTRACTED:".to_string());
        lines.push(request.combined_text().clone());
    }

    if has_resources {
        lines.push(String::new());
        lines.push("ADDITIONAL RESOURCES PROVIDED:".to_string());
        for (i, resource) in request.resources().iter().enumerate() {
            lines.push(format!("\n--- Resource {}: {} ---", i + 1, resource.title()));
            lines.push(format!("URL: {}", resource.url()));
            lines.push(format!("Content:\n{}", resource.content()));
        }
    }

    lines.push(String::new());
    lines.push("YOUR TASK:".to_string());
    lines.push(task_description(template, has_slides, has_resources, content_type));
    lines.push(String::new());
    lines.push("Please structure your response in the following sections:".to_string());

    for section in template.sections() {
        lines.push(render_section(section));
    }

    if let Some(closing) = template.closing() {
        lines.push(String::new());
        lines.push(closing.clone());
    }

    lines.join("\n")
}

/// Substitute the three request-derived markers into the template's
/// task prose.
fn task_description(
    template: &PromptTemplate,
    has_slides: bool,
    has_resources: bool,
    content_type: &str,
) -> String {
    let resources_note = if has_resources {
        " and the provided resources"
    } else {
        ""
    };
    let resource_focus = if has_resources && !has_slides {
        " Focus on the information provided in the resource URLs since no slide deck was provided."
    } else if has_resources {
        " Consider how the additional resources (lab guides, documentation, articles, etc.) complement and expand upon the presentation content."
    } else {
        ""
    };

    template
        .task_description()
        .replace("{content_type}", content_type)
        .replace("{resources_note}", resources_note)
        .replace("{resource_focus}", resource_focus)
}

fn render_section(section: &PromptSection) -> String {
    let mut lines = Vec::new();

    if let Some(title) = section.title() {
        lines.push(format!("\n## {title}"));
    }
    if let Some(instruction) = section.instruction() {
        lines.push(instruction.clone());
    }
    for subsection in section.subsections() {
        lines.push(format!("\n### {}", subsection.title()));
        if !subsection.instruction().is_empty() {
            lines.push(subsection.instruction().clone());
        }
    }

    lines.join("\n")
}
