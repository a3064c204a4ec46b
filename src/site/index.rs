//! Site index: every published page, newest first, grouped by category and tag.
//!
//! Written as `index.json` for listing pages and the external router.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::article::types::ArticleMeta;
use crate::config::SiteConfig;
use crate::site::loader::SiteContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Article,
    Comparison,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub slug: String,
    pub kind: PageKind,
    pub title: String,
    pub description: String,
    pub url: String,
    pub date: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SiteIndex {
    pub pages: Vec<IndexEntry>,
    /// Category → slugs, in page order.
    pub categories: BTreeMap<String, Vec<String>>,
    /// Tag → slugs, in page order.
    pub tags: BTreeMap<String, Vec<String>>,
}

impl SiteIndex {
    pub fn build(content: &SiteContent, config: &SiteConfig) -> Self {
        let mut metas: Vec<(&ArticleMeta, PageKind)> = content
            .articles
            .iter()
            .map(|a| (&a.meta, PageKind::Article))
            .chain(content.comparisons.iter().map(|c| (&c.meta, PageKind::Comparison)))
            .collect();
        // Newest first; slug breaks ties so the order is stable
        metas.sort_by(|(a, _), (b, _)| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let mut index = SiteIndex::default();
        for (meta, kind) in metas {
            if !meta.category.is_empty() {
                index
                    .categories
                    .entry(meta.category.clone())
                    .or_default()
                    .push(meta.slug.clone());
            }
            for tag in &meta.tags {
                let slugs = index.tags.entry(tag.clone()).or_default();
                if !slugs.contains(&meta.slug) {
                    slugs.push(meta.slug.clone());
                }
            }
            index.pages.push(IndexEntry {
                slug: meta.slug.clone(),
                kind,
                title: meta.title.clone(),
                description: meta.meta_description.clone(),
                url: config.canonical_url(&meta.slug),
                date: meta.date.to_string(),
                category: meta.category.clone(),
                sub_category: meta.sub_category.clone(),
                tags: meta.tags.clone(),
            });
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::types::Article;
    use chrono::NaiveDate;

    fn article(slug: &str, day: u32, category: &str, tags: &[&str]) -> Article {
        Article {
            meta: ArticleMeta {
                title: slug.to_uppercase(),
                slug: slug.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
                category: category.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
            sections: vec![],
        }
    }

    #[test]
    fn test_index_order_and_groups() {
        let content = SiteContent {
            articles: vec![
                article("old", 1, "hosting", &["vps"]),
                article("new", 20, "hosting", &["vps", "cdn"]),
                article("mid", 10, "email", &[]),
            ],
            comparisons: vec![],
        };
        let index = SiteIndex::build(&content, &SiteConfig::default());

        let slugs: Vec<&str> = index.pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
        assert_eq!(index.categories["hosting"], vec!["new", "old"]);
        assert_eq!(index.tags["vps"], vec!["new", "old"]);
        assert_eq!(index.tags["cdn"], vec!["new"]);
        assert_eq!(index.pages[0].url, "https://example.com/blog/new");
    }
}
