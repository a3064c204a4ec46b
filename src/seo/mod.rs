//! Metadata exposed to the external head/SEO layer.

pub mod metadata;
pub mod structured_data;

pub use metadata::{OpenGraph, PageMetadata};
pub use structured_data::{article_schema, faq_page_schema};
