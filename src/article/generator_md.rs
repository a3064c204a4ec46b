//! Article Renderer (Markdown)
//!
//! Markdown export of an article: frontmatter, then sections in authored
//! order with the same variant precedence as the HTML renderer.

use crate::article::types::{Article, ArticleMeta, ChecklistItem, ComparisonTable, InlineNode, Paragraph, Section};

/// Markdown renderer - stateless.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn render(article: &Article) -> String {
        let mut blocks = vec![frontmatter(&article.meta), format!("# {}", article.meta.title)];
        for section in &article.sections {
            blocks.push(render_section(section));
        }
        blocks.join("\n\n")
    }
}

fn frontmatter(meta: &ArticleMeta) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", quoted(&meta.title)),
        format!("slug: {}", quoted(&meta.slug)),
        format!("date: \"{}\"", meta.date),
    ];
    if let Some(updated) = meta.updated {
        lines.push(format!("updated: \"{}\"", updated));
    }
    if !meta.category.is_empty() {
        lines.push(format!("category: {}", quoted(&meta.category)));
    }
    if !meta.tags.is_empty() {
        let tags: Vec<String> = meta.tags.iter().map(|t| quoted(t)).collect();
        lines.push(format!("tags: [{}]", tags.join(", ")));
    }
    lines.push("---".to_string());
    lines.join("\n")
}

/// YAML double-quoted scalar.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn render_section(section: &Section) -> String {
    let mut blocks = Vec::new();

    if let Some(title) = section.display_title() {
        blocks.push(format!("## {}", title));
    }
    if let Some(summary) = &section.summary {
        blocks.push(format!("> {}", summary));
    }
    if let Some(paragraphs) = &section.paragraphs {
        blocks.extend(paragraphs.iter().map(paragraph));
    }
    if let Some(checklist) = &section.checklist {
        let mut lines = Vec::new();
        if let Some(title) = &checklist.title {
            lines.push(format!("### {}", title));
            lines.push(String::new());
        }
        for item in &checklist.items {
            match item {
                ChecklistItem::Item(text) => lines.push(format!("- [ ] {}", text)),
                ChecklistItem::Subheading { subheading } => lines.push(format!("**{}**", subheading)),
            }
        }
        blocks.push(lines.join("\n"));
    }
    for plays in [&section.plays, &section.perspectives].into_iter().flatten() {
        for play in plays {
            blocks.push(format!("**{}**: {}", play.title, play.detail));
        }
    }
    if let Some(table) = &section.comparison_table {
        blocks.push(table_markdown(table));
    }
    if let Some(faqs) = &section.faqs {
        for faq in faqs {
            blocks.push(format!("### {}\n\n{}", faq.title, faq.body));
        }
    }

    blocks.join("\n\n")
}

fn paragraph(p: &Paragraph) -> String {
    match p {
        Paragraph::Plain(text) => text.clone(),
        Paragraph::Rich(nodes) => nodes
            .iter()
            .map(|node| match node {
                InlineNode::Text { text } => text.clone(),
                InlineNode::Link { href, label } => format!("[{}]({})", label, href),
                // Markdown allows inline HTML
                InlineNode::Raw { html } => html.clone(),
            })
            .collect(),
    }
}

fn table_markdown(table: &ComparisonTable) -> String {
    let columns = table.column_count();
    if columns == 0 {
        return String::new();
    }
    let row_line = |cells: &[String]| {
        let padded: Vec<String> = (0..columns)
            .map(|i| cells.get(i).map(|c| c.replace('|', "\\|")).unwrap_or_default())
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut lines = vec![
        row_line(&table.headers),
        format!("|{}", "---|".repeat(columns)),
    ];
    lines.extend(table.rows.iter().map(|row| row_line(row)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::types::{Checklist, Faq};

    fn article(sections: Vec<Section>) -> Article {
        Article {
            meta: ArticleMeta {
                title: "Guide".to_string(),
                slug: "guide".to_string(),
                tags: vec!["vps".to_string(), "ops".to_string()],
                ..Default::default()
            },
            sections,
        }
    }

    #[test]
    fn test_frontmatter() {
        let md = MarkdownRenderer::render(&article(vec![]));
        assert!(md.starts_with("---\ntitle: \"Guide\"\nslug: \"guide\""));
        assert!(md.contains("tags: [\"vps\", \"ops\"]"));
        assert!(md.ends_with("# Guide"));
    }

    #[test]
    fn test_frontmatter_escapes_quotes_and_backslashes() {
        let mut a = article(vec![]);
        a.meta.title = r#"Paths like C:\data and "quotes""#.to_string();
        a.meta.category = r#"ops\"#.to_string();
        a.meta.tags = vec![r#"a"b"#.to_string()];
        let md = MarkdownRenderer::render(&a);
        assert!(md.contains(r#"title: "Paths like C:\\data and \"quotes\"""#));
        assert!(md.contains(r#"category: "ops\\""#));
        assert!(md.contains(r#"tags: ["a\"b"]"#));
    }

    #[test]
    fn test_section_blocks() {
        let section = Section {
            id: Some("s".into()),
            title: Some("Launch".into()),
            checklist: Some(Checklist {
                title: None,
                items: vec![
                    ChecklistItem::Item("Backups".into()),
                    ChecklistItem::Subheading { subheading: "Security".into() },
                    ChecklistItem::Item("Firewall".into()),
                ],
            }),
            comparison_table: Some(ComparisonTable {
                headers: vec!["Host".into(), "Price".into()],
                rows: vec![vec!["Vultr".into()]],
            }),
            faqs: Some(vec![Faq { title: "Why?".into(), body: "Because.".into() }]),
            ..Default::default()
        };
        let md = MarkdownRenderer::render(&article(vec![section]));
        assert!(md.contains("## Launch"));
        assert!(md.contains("- [ ] Backups\n**Security**\n- [ ] Firewall"));
        assert!(md.contains("| Host | Price |\n|---|---|\n| Vultr |  |"));
        assert!(md.contains("### Why?\n\nBecause."));
    }

    #[test]
    fn test_rich_paragraph_links() {
        let p = Paragraph::Rich(vec![
            InlineNode::Text { text: "Read ".into() },
            InlineNode::Link { href: "/blog/x".into(), label: "this".into() },
        ]);
        assert_eq!(paragraph(&p), "Read [this](/blog/x)");
    }
}
