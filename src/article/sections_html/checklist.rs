//! Checklists. Items keep authored order; subheadings render in place.

use crate::article::types::{Checklist, ChecklistItem};
use crate::article::utils::escape_html;

pub fn render(checklist: &Checklist) -> String {
    let mut lines = vec!["<div class=\"section-checklist\">".to_string()];

    if let Some(title) = checklist.title.as_deref().filter(|t| !t.trim().is_empty()) {
        lines.push(format!("<h3 class=\"checklist-title\">{}</h3>", escape_html(title)));
    }

    lines.push("<ul class=\"checklist\">".to_string());
    for item in &checklist.items {
        match item {
            ChecklistItem::Item(text) => {
                lines.push(format!("<li>{}</li>", escape_html(text)));
            }
            ChecklistItem::Subheading { subheading } => {
                lines.push(format!(
                    "<li class=\"checklist-subheading\"><strong>{}</strong></li>",
                    escape_html(subheading)
                ));
            }
        }
    }
    lines.push("</ul>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}
