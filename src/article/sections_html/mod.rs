//! HTML renderers for section variants.
//!
//! One module per variant. `render_section` checks the variants in a fixed
//! order and renders every one that is present, each in its own sub-block:
//! summary → paragraphs → checklist → plays → perspectives → comparisonTable → faqs

pub mod summary;
pub mod paragraphs;
pub mod checklist;
pub mod plays;
pub mod comparison_table;
pub mod faqs;

use crate::article::types::Section;
use crate::article::utils::{escape_attr, escape_html};

/// Render one section. `slug` is only used for log context.
pub fn render_section(slug: &str, section: &Section) -> String {
    let mut parts = Vec::new();

    match section.anchor() {
        Some(id) => parts.push(format!("<section id=\"{}\">", escape_attr(id))),
        None => parts.push("<section>".to_string()),
    }
    if let Some(title) = section.display_title() {
        parts.push(format!("<h2>{}</h2>", escape_html(title)));
    }

    if let Some(text) = &section.summary {
        parts.push(summary::render(text));
    }
    if let Some(items) = &section.paragraphs {
        parts.push(paragraphs::render(items));
    }
    if let Some(list) = &section.checklist {
        parts.push(checklist::render(list));
    }
    if let Some(items) = &section.plays {
        parts.push(plays::render(items, plays::PlayKind::Plays));
    }
    if let Some(items) = &section.perspectives {
        parts.push(plays::render(items, plays::PlayKind::Perspectives));
    }
    if let Some(table) = &section.comparison_table {
        let context = format!("{}#{}", slug, section.anchor().unwrap_or("?"));
        parts.push(comparison_table::render(table, &context));
    }
    if let Some(items) = &section.faqs {
        parts.push(faqs::render(items));
    }

    parts.push("</section>".to_string());
    parts.join("\n")
}
