//! Paragraph lists with inline rich content.

use crate::article::types::{InlineNode, Paragraph};
use crate::article::utils::{escape_attr, escape_html};

pub fn render(paragraphs: &[Paragraph]) -> String {
    let mut lines = vec!["<div class=\"section-paragraphs\">".to_string()];
    for paragraph in paragraphs {
        lines.push(format!("<p>{}</p>", render_paragraph(paragraph)));
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

pub fn render_paragraph(paragraph: &Paragraph) -> String {
    match paragraph {
        Paragraph::Plain(text) => escape_html(text),
        Paragraph::Rich(nodes) => nodes.iter().map(render_inline).collect(),
    }
}

fn render_inline(node: &InlineNode) -> String {
    match node {
        InlineNode::Text { text } => escape_html(text),
        InlineNode::Link { href, label } => {
            format!("<a href=\"{}\">{}</a>", escape_attr(href), escape_html(label))
        }
        InlineNode::Raw { html } => html.clone(),
    }
}
