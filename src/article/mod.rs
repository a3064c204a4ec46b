//! Article Module
//!
//! Content schema and renderers for blog-post articles.
//!
//! ## Parts
//! - `types` - ArticleMeta, Section and its variants
//! - `validate` - build-time lint (missing/duplicate ids, table shapes)
//! - `sections_html` - one renderer per section variant
//! - `generator` - full HTML document via the shared layout
//! - `generator_md` - markdown export

pub mod types;
pub mod utils;
pub mod validate;
pub mod sections_html;
pub mod generator;
pub mod generator_md;

pub use types::{
    Article, ArticleMeta, Checklist, ChecklistItem, ComparisonTable, Faq, InlineNode, Paragraph,
    Play, Section, TocEntry,
};
pub use validate::{validate_article, LintReport};
pub use generator::ArticleRenderer;
pub use generator_md::MarkdownRenderer;
