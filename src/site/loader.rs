//! Content loading.
//!
//! Layout under the content directory:
//! - `articles/*.json` - one `Article` per file
//! - `comparisons/*.json` - one `ComparisonPage` per file
//!
//! Files are read in sorted path order so builds are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::article::types::Article;
use crate::comparison::types::ComparisonPage;

/// All authored content, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub articles: Vec<Article>,
    pub comparisons: Vec<ComparisonPage>,
}

impl SiteContent {
    /// Load every article and comparison page under `content_dir`.
    pub fn load(content_dir: &Path) -> Result<Self> {
        let articles = load_dir(&content_dir.join("articles"))?;
        let comparisons = load_dir(&content_dir.join("comparisons"))?;
        tracing::info!(
            "Loaded {} articles and {} comparison pages from {:?}",
            articles.len(),
            comparisons.len(),
            content_dir
        );
        Ok(Self { articles, comparisons })
    }

    /// Drop pages marked `draft`.
    pub fn without_drafts(self) -> Self {
        let before = self.page_count();
        let content = Self {
            articles: self.articles.into_iter().filter(|a| !a.meta.draft).collect(),
            comparisons: self.comparisons.into_iter().filter(|c| !c.meta.draft).collect(),
        };
        tracing::debug!("Skipped {} draft pages", before - content.page_count());
        content
    }

    pub fn page_count(&self) -> usize {
        self.articles.len() + self.comparisons.len()
    }
}

/// Parse a single JSON content file.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {:?}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse content file: {:?}", path))
}

/// Parse every `*.json` file in `dir`. A missing directory yields no pages.
fn load_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    if !dir.exists() {
        tracing::debug!("Content directory {:?} does not exist, skipping", dir);
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to list content directory: {:?}", dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_file(path)).collect()
}
