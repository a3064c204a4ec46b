//! Summary block: one short lead paragraph.

use crate::article::utils::escape_html;

pub fn render(text: &str) -> String {
    format!(
        "<div class=\"section-summary\">\n<p class=\"summary\">{}</p>\n</div>",
        escape_html(text)
    )
}
