//! FAQ lists.

use crate::article::types::Faq;
use crate::article::utils::escape_html;

pub fn render(faqs: &[Faq]) -> String {
    let mut lines = vec!["<div class=\"section-faqs\">".to_string()];
    for faq in faqs {
        lines.push("<details class=\"faq\">".to_string());
        lines.push(format!("<summary>{}</summary>", escape_html(&faq.title)));
        lines.push(format!("<p>{}</p>", escape_html(&faq.body)));
        lines.push("</details>".to_string());
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}
