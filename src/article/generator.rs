//! Article Renderer
//!
//! Main entry point for turning an article into an HTML document.
//! Sections are rendered in authored order by `sections_html`, then wrapped in
//! the shared layout template (head, header, optional table of contents).
//!
//! Public API (consumed by site::builder and comparison::page):
//! - ArticleRenderer::new() -> Self
//! - ArticleRenderer::render(meta, sections) -> Result<String>
//! - ArticleRenderer::render_page(meta, body, toc, words) -> Result<String>

use askama::Template;

use crate::article::sections_html::render_section;
use crate::article::types::{table_of_contents, ArticleMeta, Section, TocEntry};
use crate::article::utils::{reading_time_minutes, word_count};

/// A table of contents is shown once an article has this many titled sections.
pub const TOC_MIN_ENTRIES: usize = 3;

#[derive(Template)]
#[template(path = "article_layout.html")]
struct ArticleLayoutTemplate<'a> {
    head_title: &'a str,
    description: &'a str,
    slug: &'a str,
    title: &'a str,
    category: Option<String>,
    date_iso: String,
    date_display: String,
    updated_display: Option<String>,
    author: Option<&'a str>,
    reading_time: u32,
    tags: &'a [String],
    cover: Option<&'a str>,
    cover_alt: &'a str,
    toc: Vec<TocEntry>,
    body: String,
}

/// Article renderer - stateless HTML generator.
///
/// The output is a pure function of its inputs: rendering the same
/// `(meta, sections)` twice yields identical bytes.
pub struct ArticleRenderer;

impl ArticleRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a complete HTML document for an article.
    ///
    /// # Arguments
    /// * `meta` - Article metadata (title and slug are required upstream by validation)
    /// * `sections` - Ordered sections; may be empty
    pub fn render(&self, meta: &ArticleMeta, sections: &[Section]) -> Result<String, askama::Error> {
        let body = self.render_body(&meta.slug, sections);
        let words: usize = sections
            .iter()
            .map(|s| word_count(&s.plain_text()))
            .sum();
        self.render_page(meta, body, table_of_contents(sections), words)
    }

    /// Render only the sections, joined in authored order.
    pub fn render_body(&self, slug: &str, sections: &[Section]) -> String {
        tracing::debug!("Rendering {} sections for '{}'", sections.len(), slug);
        sections
            .iter()
            .map(|section| render_section(slug, section))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Wrap a pre-rendered body in the shared layout.
    ///
    /// `words` feeds the reading-time estimate when `meta.reading_time` is unset.
    pub fn render_page(
        &self,
        meta: &ArticleMeta,
        body: String,
        toc: Vec<TocEntry>,
        words: usize,
    ) -> Result<String, askama::Error> {
        let toc = if toc.len() >= TOC_MIN_ENTRIES { toc } else { Vec::new() };

        let category = match (meta.category.as_str(), meta.sub_category.as_deref()) {
            ("", _) => None,
            (category, Some(sub)) if !sub.is_empty() => Some(format!("{} / {}", category, sub)),
            (category, _) => Some(category.to_string()),
        };

        let template = ArticleLayoutTemplate {
            head_title: meta.head_title(),
            description: &meta.meta_description,
            slug: &meta.slug,
            title: &meta.title,
            category,
            date_iso: meta.date.format("%Y-%m-%d").to_string(),
            date_display: display_date(meta.date),
            updated_display: meta
                .updated
                .filter(|u| *u != meta.date)
                .map(display_date),
            author: meta.author.as_deref(),
            reading_time: meta
                .reading_time
                .unwrap_or_else(|| reading_time_minutes(words)),
            tags: &meta.tags,
            cover: meta.cover.as_deref(),
            cover_alt: meta.cover_alt.as_deref().unwrap_or(""),
            toc,
            body,
        };
        template.render()
    }
}

impl Default for ArticleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn display_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
