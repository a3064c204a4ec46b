//! Shared data types for article content.
//!
//! Articles are authored as JSON literals (camelCase field names) and are never
//! mutated after loading. A `Section` is an all-optional struct rather than an
//! enum because authors routinely combine variants (e.g. a summary followed by a
//! checklist) in one section.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Article metadata (title, SEO fields, dates, taxonomy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub meta_description: String,
    pub slug: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Minutes; estimated from word count when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl ArticleMeta {
    /// Title used in `<title>` and Open Graph: `seoTitle` if set, else `title`.
    pub fn head_title(&self) -> &str {
        match self.seo_title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.title,
        }
    }

    /// Last modification date (`updated`, falling back to `date`).
    pub fn modified(&self) -> NaiveDate {
        self.updated.unwrap_or(self.date)
    }
}

/// One inline piece of a rich paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    Text { text: String },
    Link { href: String, label: String },
    /// Pre-built markup, emitted verbatim.
    Raw { html: String },
}

/// A paragraph: plain text or a sequence of inline nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paragraph {
    Plain(String),
    Rich(Vec<InlineNode>),
}

impl Paragraph {
    /// Text content with markup stripped (links keep their label).
    pub fn plain_text(&self) -> String {
        match self {
            Paragraph::Plain(text) => text.clone(),
            Paragraph::Rich(nodes) => nodes
                .iter()
                .map(|node| match node {
                    InlineNode::Text { text } => text.as_str(),
                    InlineNode::Link { label, .. } => label.as_str(),
                    InlineNode::Raw { .. } => "",
                })
                .collect(),
        }
    }
}

/// Checklist entry. Subheadings sit positionally between ordinary items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChecklistItem {
    Item(String),
    Subheading { subheading: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Checklist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// A title + detail pair, used by both `plays` and `perspectives`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub title: String,
    #[serde(alias = "body")]
    pub detail: String,
}

/// Literal 2D grid. Row lengths are not checked against the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComparisonTable {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl ComparisonTable {
    /// Number of cells each rendered row gets.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Indices and lengths of rows whose cell count differs from the header.
    pub fn mismatched_rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let expected = self.headers.len();
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| row.len() != expected)
            .map(|(i, row)| (i, row.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "question")]
    pub title: String,
    #[serde(alias = "answer")]
    pub body: String,
}

/// A titled block within an article.
///
/// Populated variants render in this order: summary, paragraphs, checklist,
/// plays, perspectives, comparisonTable, faqs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<Paragraph>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Checklist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<Vec<Play>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspectives: Option<Vec<Play>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_table: Option<ComparisonTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
}

impl Section {
    /// Non-empty id, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Plain text of every variant, in render order. Used for word counts.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.clone());
        }
        if let Some(summary) = &self.summary {
            parts.push(summary.clone());
        }
        if let Some(paragraphs) = &self.paragraphs {
            parts.extend(paragraphs.iter().map(Paragraph::plain_text));
        }
        if let Some(checklist) = &self.checklist {
            parts.extend(checklist.title.iter().cloned());
            parts.extend(checklist.items.iter().map(|item| match item {
                ChecklistItem::Item(text) => text.clone(),
                ChecklistItem::Subheading { subheading } => subheading.clone(),
            }));
        }
        for plays in [&self.plays, &self.perspectives].into_iter().flatten() {
            parts.extend(plays.iter().map(|p| format!("{} {}", p.title, p.detail)));
        }
        if let Some(table) = &self.comparison_table {
            parts.extend(table.headers.iter().cloned());
            parts.extend(table.rows.iter().map(|row| row.join(" ")));
        }
        if let Some(faqs) = &self.faqs {
            parts.extend(faqs.iter().map(|f| format!("{} {}", f.title, f.body)));
        }
        parts.join(" ")
    }
}

/// One blog post: meta plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub meta: ArticleMeta,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Table-of-contents entry for a titled section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub title: String,
}

/// Titled sections with an id, in authored order.
pub fn table_of_contents(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .filter_map(|s| {
            Some(TocEntry {
                id: s.anchor()?.to_string(),
                title: s.display_title()?.to_string(),
            })
        })
        .collect()
}
