//! The templates command handler.

use crate::cli::templates_dir;
use lectern::TemplateStore;

/// List the available prompt templates.
pub fn handle_templates() -> Result<(), Box<dyn std::error::Error>> {
    let store = TemplateStore::new(templates_dir());
    let summaries = store.available();

    if summaries.is_empty() {
        println!("No templates found in '{}'.", templates_dir());
        return Ok(());
    }

    for summary in summaries {
        println!("{:<24} {} - {}", summary.id(), summary.name(), summary.description());
    }

    Ok(())
}
