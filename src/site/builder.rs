//! Site Builder
//!
//! Static build in three steps:
//! 1. `lint` - validate every page; structural errors stop the build
//! 2. `render_all` - render pages in parallel (each render is pure)
//! 3. `write` - write HTML, metadata JSON, markdown and `index.json`
//!
//! Uses rayon `par_iter` for CPU parallelism; pages share no mutable state.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::article::generator::ArticleRenderer;
use crate::article::generator_md::MarkdownRenderer;
use crate::article::types::{Article, ArticleMeta, Section};
use crate::article::utils::text::is_canonical_slug;
use crate::article::validate::{validate_article, validate_meta, validate_sections, LintReport};
use crate::comparison::page::ComparisonPageRenderer;
use crate::comparison::scoreboard::validate_scoreboard;
use crate::comparison::types::ComparisonPage;
use crate::config::SiteConfig;
use crate::error::{ArticleError, SiteError};
use crate::seo::PageMetadata;
use crate::site::index::SiteIndex;
use crate::site::loader::SiteContent;

/// Outcome of validating the whole site.
#[derive(Debug, Default)]
pub struct SiteLint {
    pub errors: Vec<SiteError>,
    pub warnings: Vec<String>,
}

impl SiteLint {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn absorb(&mut self, report: LintReport) {
        self.errors.extend(report.errors.into_iter().map(SiteError::from));
        self.warnings.extend(report.warnings.iter().map(ToString::to_string));
        self.warnings.extend(report.notes);
    }
}

/// One rendered page, ready to be written.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub slug: String,
    pub html: String,
    pub metadata: PageMetadata,
    /// Markdown export; articles only.
    pub markdown: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub articles: usize,
    pub comparisons: usize,
    pub warnings: usize,
}

pub struct SiteBuilder {
    config: SiteConfig,
    articles: ArticleRenderer,
    comparisons: ComparisonPageRenderer,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            articles: ArticleRenderer::new(),
            comparisons: ComparisonPageRenderer::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Validate all pages and check slugs are unique across the site.
    pub fn lint(&self, content: &SiteContent) -> SiteLint {
        let mut lint = SiteLint::default();

        for article in &content.articles {
            lint.absorb(validate_article(article));
        }

        for page in &content.comparisons {
            lint.absorb(validate_meta(&page.meta));
            lint.absorb(validate_sections(&page.meta.slug, &page.sections));
            match validate_scoreboard(&page.scoreboard, &page.contender_keys()) {
                Ok(notes) => lint
                    .warnings
                    .extend(notes.into_iter().map(|n| format!("{}: {}", page.meta.slug, n))),
                Err(source) => lint.errors.push(SiteError::Scoreboard {
                    slug: page.meta.slug.clone(),
                    source,
                }),
            }
        }

        let mut seen = HashSet::new();
        let slugs = content
            .articles
            .iter()
            .map(|a| &a.meta.slug)
            .chain(content.comparisons.iter().map(|c| &c.meta.slug));
        for slug in slugs {
            if !slug.is_empty() && !seen.insert(slug) {
                lint.errors.push(SiteError::DuplicateSlug(slug.clone()));
            }
        }

        lint
    }

    /// Render every page in parallel. Output order follows input order.
    pub fn render_all(&self, content: &SiteContent) -> Result<Vec<BuiltPage>, SiteError> {
        let mut pages: Vec<BuiltPage> = content
            .articles
            .par_iter()
            .map(|article| self.render_article(article))
            .collect::<Result<Vec<_>, SiteError>>()?;

        let comparisons: Vec<BuiltPage> = content
            .comparisons
            .par_iter()
            .map(|page| self.render_comparison(page))
            .collect::<Result<Vec<_>, SiteError>>()?;

        pages.extend(comparisons);
        Ok(pages)
    }

    pub fn render_article(&self, article: &Article) -> Result<BuiltPage, SiteError> {
        tracing::debug!("Rendering article '{}'", article.meta.slug);
        Ok(BuiltPage {
            slug: article.meta.slug.clone(),
            html: self.articles.render(&article.meta, &article.sections)?,
            metadata: self.metadata(&article.meta, &article.sections),
            markdown: Some(MarkdownRenderer::render(article)),
        })
    }

    pub fn render_comparison(&self, page: &ComparisonPage) -> Result<BuiltPage, SiteError> {
        tracing::debug!("Rendering comparison page '{}'", page.meta.slug);
        Ok(BuiltPage {
            slug: page.meta.slug.clone(),
            html: self.comparisons.render(page)?,
            metadata: self.metadata(&page.meta, &page.sections),
            markdown: None,
        })
    }

    fn metadata(&self, meta: &ArticleMeta, sections: &[Section]) -> PageMetadata {
        PageMetadata::build(meta, sections, &self.config)
    }

    /// Write pages and the site index under `output_dir`.
    ///
    /// Every slug is checked before anything is written, so a bad slug leaves
    /// no partial output and nothing lands outside `output_dir`.
    pub fn write(&self, pages: &[BuiltPage], index: &SiteIndex, output_dir: &Path) -> Result<(), SiteError> {
        if let Some(page) = pages.iter().find(|p| !is_canonical_slug(&p.slug)) {
            return Err(ArticleError::InvalidSlug {
                slug: page.slug.clone(),
            }
            .into());
        }

        fs::create_dir_all(output_dir)?;
        for page in pages {
            fs::write(output_dir.join(format!("{}.html", page.slug)), &page.html)?;
            fs::write(
                output_dir.join(format!("{}.meta.json", page.slug)),
                serde_json::to_string_pretty(&page.metadata)?,
            )?;
            if let Some(markdown) = &page.markdown {
                fs::write(output_dir.join(format!("{}.md", page.slug)), markdown)?;
            }
        }
        fs::write(output_dir.join("index.json"), serde_json::to_string_pretty(index)?)?;
        Ok(())
    }

    /// Lint, render and write the site. Drafts are dropped unless configured.
    pub fn build(&self, content: SiteContent) -> Result<BuildReport, SiteError> {
        let content = if self.config.include_drafts {
            content
        } else {
            content.without_drafts()
        };

        let lint = self.lint(&content);
        for warning in &lint.warnings {
            tracing::warn!("{}", warning);
        }
        if !lint.is_ok() {
            for error in &lint.errors {
                tracing::error!("{}", error);
            }
            return Err(SiteError::Validation(lint.errors.len()));
        }

        let pages = self.render_all(&content)?;
        let index = SiteIndex::build(&content, &self.config);
        self.write(&pages, &index, &self.config.output_dir)?;

        let report = BuildReport {
            articles: content.articles.len(),
            comparisons: content.comparisons.len(),
            warnings: lint.warnings.len(),
        };
        tracing::info!(
            "Built {} articles and {} comparison pages into {:?} ({} warnings)",
            report.articles,
            report.comparisons,
            self.config.output_dir,
            report.warnings
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::types::{Contender, ContenderTheme, ScoreRow};
    use crate::error::ScoreboardError;

    fn article(slug: &str) -> Article {
        Article { meta: meta(slug), sections: vec![] }
    }

    fn meta(slug: &str) -> ArticleMeta {
        ArticleMeta {
            title: slug.to_string(),
            slug: slug.to_string(),
            meta_description: "d".to_string(),
            ..Default::default()
        }
    }

    fn comparison(slug: &str, scoreboard: Vec<ScoreRow>) -> ComparisonPage {
        ComparisonPage {
            meta: meta(slug),
            contenders: vec![Contender {
                key: "a".to_string(),
                name: "A".to_string(),
                blurb: String::new(),
                url: String::new(),
                theme: ContenderTheme::default(),
            }],
            comparison_rows: vec![],
            scoreboard,
            sections: vec![],
        }
    }

    #[test]
    fn test_lint_duplicate_slug() {
        let content = SiteContent {
            articles: vec![Article { meta: meta("same"), sections: vec![] }],
            comparisons: vec![comparison("same", vec![ScoreRow::new("r", &[("a", 5.0)])])],
        };
        let lint = SiteBuilder::new(SiteConfig::default()).lint(&content);
        assert_eq!(lint.errors.len(), 1);
        assert!(matches!(&lint.errors[0], SiteError::DuplicateSlug(s) if s == "same"));
    }

    #[test]
    fn test_lint_empty_scoreboard() {
        let content = SiteContent {
            articles: vec![],
            comparisons: vec![comparison("vs", vec![])],
        };
        let lint = SiteBuilder::new(SiteConfig::default()).lint(&content);
        assert!(matches!(
            &lint.errors[0],
            SiteError::Scoreboard { source: ScoreboardError::EmptyScoreboard, .. }
        ));
    }

    #[test]
    fn test_render_all_keeps_order() {
        let content = SiteContent {
            articles: (0..8).map(|i| Article { meta: meta(&format!("a{}", i)), sections: vec![] }).collect(),
            comparisons: vec![comparison("vs", vec![ScoreRow::new("r", &[("a", 5.0)])])],
        };
        let pages = SiteBuilder::new(SiteConfig::default()).render_all(&content).unwrap();
        let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "vs"]);
        assert!(pages[8].markdown.is_none());
    }

    #[test]
    fn test_build_rejects_path_slugs_before_writing() {
        let root = tempfile::tempdir().unwrap();
        let output_dir = root.path().join("dist");
        let config = SiteConfig {
            output_dir: output_dir.clone(),
            ..Default::default()
        };
        let builder = SiteBuilder::new(config);

        for bad in ["hosting/vps", "../escaped"] {
            let content = SiteContent {
                articles: vec![article("a"), article(bad)],
                comparisons: vec![],
            };
            let lint = builder.lint(&content);
            assert!(matches!(
                &lint.errors[..],
                [SiteError::Article(ArticleError::InvalidSlug { slug })] if slug == bad
            ));

            let err = builder.build(content).unwrap_err();
            assert!(matches!(err, SiteError::Validation(1)));
        }
        assert!(!output_dir.exists());
        assert!(!root.path().join("escaped.html").exists());
    }

    #[test]
    fn test_write_refuses_unsafe_slug() {
        let root = tempfile::tempdir().unwrap();
        let output_dir = root.path().join("dist");
        let builder = SiteBuilder::new(SiteConfig::default());
        let content = SiteContent {
            articles: vec![article("a"), article("../escaped")],
            comparisons: vec![],
        };
        let pages = builder.render_all(&content).unwrap();

        let err = builder
            .write(&pages, &SiteIndex::default(), &output_dir)
            .unwrap_err();
        assert!(matches!(err, SiteError::Article(ArticleError::InvalidSlug { .. })));
        assert!(!output_dir.join("a.html").exists());
        assert!(!root.path().join("escaped.html").exists());
    }

    #[test]
    fn test_lint_duplicate_contender() {
        let mut page = comparison("vs", vec![ScoreRow::new("r", &[("a", 5.0)])]);
        page.contenders.push(page.contenders[0].clone());
        let content = SiteContent { articles: vec![], comparisons: vec![page] };
        let lint = SiteBuilder::new(SiteConfig::default()).lint(&content);
        assert!(matches!(
            &lint.errors[..],
            [SiteError::Scoreboard { source: ScoreboardError::DuplicateContender { .. }, .. }]
        ));
    }
}
