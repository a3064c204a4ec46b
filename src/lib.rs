//! Article Layout Rust Implementation
//!
//! Static rendering of blog articles and "X vs Y" comparison pages from
//! declarative JSON content.
//!
//! - `article/`: content schema, validation, HTML and markdown renderers
//! - `comparison/`: scoreboard averages, winners and comparison page rendering
//! - `seo/`: serializable page metadata and schema.org data for the head layer
//! - `site/`: content loading, site index and parallel static build
//! - `config`: environment-driven site configuration
//! - `error`: error types

pub mod error;
pub mod config;
pub mod article;
pub mod comparison;
pub mod seo;
pub mod site;

// Re-export commonly used types
pub use error::{ArticleError, ScoreboardError, SiteError};
pub use config::SiteConfig;
pub use article::{Article, ArticleMeta, ArticleRenderer, MarkdownRenderer, Section, validate_article};
pub use comparison::{ComparisonPage, ComparisonPageRenderer, ScoreRow, ScoreboardSummary};
pub use seo::PageMetadata;
pub use site::{SiteBuilder, SiteContent, SiteIndex};
