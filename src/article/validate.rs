//! Build-time validation of article content.
//!
//! Structural problems (missing section id, duplicate id, missing title/slug,
//! slug that is not kebab-case) are errors and must stop a build. Table shape mismatches are warnings; the
//! renderer pads them.

use std::collections::HashSet;

use crate::article::types::{Article, ArticleMeta, Section};
use crate::article::utils::text::is_canonical_slug;
use crate::error::ArticleError;

/// Outcome of validating one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LintReport {
    pub errors: Vec<ArticleError>,
    pub warnings: Vec<ArticleError>,
    /// Free-form notes that have no error type (e.g. missing description).
    pub notes: Vec<String>,
}

impl LintReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, err: ArticleError) {
        if err.is_recoverable() {
            self.warnings.push(err);
        } else {
            self.errors.push(err);
        }
    }

    /// First structural error, if any.
    pub fn into_result(self) -> Result<Vec<ArticleError>, ArticleError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.warnings),
        }
    }

    pub fn merge(&mut self, other: LintReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.notes.extend(other.notes);
    }
}

/// Validate an article's meta and sections.
pub fn validate_article(article: &Article) -> LintReport {
    let mut report = validate_meta(&article.meta);
    report.merge(validate_sections(&article.meta.slug, &article.sections));
    report
}

pub fn validate_meta(meta: &ArticleMeta) -> LintReport {
    let mut report = LintReport::default();

    if meta.title.trim().is_empty() {
        report.push(ArticleError::MissingMetaField {
            slug: meta.slug.clone(),
            field: "title",
        });
    }
    if meta.slug.trim().is_empty() {
        report.push(ArticleError::MissingMetaField {
            slug: meta.slug.clone(),
            field: "slug",
        });
    } else if !is_canonical_slug(&meta.slug) {
        report.push(ArticleError::InvalidSlug {
            slug: meta.slug.clone(),
        });
    }

    if meta.meta_description.trim().is_empty() {
        report
            .notes
            .push(format!("article '{}' has no metaDescription", meta.slug));
    }

    let mut seen = HashSet::new();
    for tag in &meta.tags {
        if !seen.insert(tag.as_str()) {
            report
                .notes
                .push(format!("article '{}' repeats tag '{}'", meta.slug, tag));
        }
    }

    if let Some(updated) = meta.updated {
        if updated < meta.date {
            report.notes.push(format!(
                "article '{}' was updated ({}) before it was published ({})",
                meta.slug, updated, meta.date
            ));
        }
    }

    report
}

/// Validate section ids and table shapes.
pub fn validate_sections(slug: &str, sections: &[Section]) -> LintReport {
    let mut report = LintReport::default();
    let mut seen_ids = HashSet::new();

    for (index, section) in sections.iter().enumerate() {
        let id = match section.anchor() {
            Some(id) => id,
            None => {
                report.push(ArticleError::MissingSectionId {
                    slug: slug.to_string(),
                    index,
                });
                continue;
            }
        };

        if !seen_ids.insert(id) {
            report.push(ArticleError::DuplicateSectionId {
                slug: slug.to_string(),
                id: id.to_string(),
            });
        }

        if let Some(table) = &section.comparison_table {
            for (row, found) in table.mismatched_rows() {
                report.push(ArticleError::MalformedComparisonRow {
                    slug: slug.to_string(),
                    section: id.to_string(),
                    row,
                    expected: table.headers.len(),
                    found,
                });
            }
        }
    }

    report
}
