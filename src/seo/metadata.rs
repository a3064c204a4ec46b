//! Page metadata for the external head/SEO layer.
//!
//! Plain serializable data only; no tags are emitted here.

use serde::Serialize;
use serde_json::Value;

use crate::article::types::{ArticleMeta, Section};
use crate::config::SiteConfig;
use crate::seo::structured_data::{article_schema, faq_page_schema};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub og_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub published_time: String,
    pub modified_time: String,
    pub tags: Vec<String>,
}

/// Everything a head-tag generator needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub open_graph: OpenGraph,
    /// schema.org blocks: BlogPosting, plus FAQPage when the page has FAQs.
    pub structured_data: Vec<Value>,
}

impl PageMetadata {
    pub fn build(meta: &ArticleMeta, sections: &[Section], config: &SiteConfig) -> Self {
        let canonical_url = config.canonical_url(&meta.slug);
        let image = meta.cover.as_deref().map(|c| config.absolute_url(c));

        let mut structured_data = vec![article_schema(meta, &canonical_url, image.as_deref())];
        if let Some(faq) = faq_page_schema(sections) {
            structured_data.push(faq);
        }

        Self {
            title: meta.head_title().to_string(),
            description: meta.meta_description.clone(),
            canonical_url: canonical_url.clone(),
            category: meta.category.clone(),
            sub_category: meta.sub_category.clone(),
            open_graph: OpenGraph {
                title: meta.head_title().to_string(),
                description: meta.meta_description.clone(),
                url: canonical_url,
                og_type: "article".to_string(),
                image,
                image_alt: meta.cover_alt.clone(),
                published_time: meta.date.to_string(),
                modified_time: meta.modified().to_string(),
                tags: meta.tags.clone(),
            },
            structured_data,
        }
    }
}
