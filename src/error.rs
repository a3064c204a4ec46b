//! Error types for content validation, scoring and site builds.
//!
//! All of these are authoring errors. Structural ones abort a build;
//! `MalformedComparisonRow` is reported as a warning and the row still renders.

use thiserror::Error;

/// Problems found in an article's meta or sections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArticleError {
    /// A section has no `id`, so it cannot be linked to.
    #[error("article '{slug}': section #{index} has no id")]
    MissingSectionId { slug: String, index: usize },

    /// Two sections share the same `id`.
    #[error("article '{slug}': duplicate section id '{id}'")]
    DuplicateSectionId { slug: String, id: String },

    /// `title` or `slug` is empty.
    #[error("article '{slug}': meta field '{field}' is missing")]
    MissingMetaField { slug: String, field: &'static str },

    /// The slug is not lowercase kebab-case. It names output files, so
    /// separators or `..` would escape the output directory.
    #[error("slug '{slug}' is not lowercase kebab-case")]
    InvalidSlug { slug: String },

    /// A comparison table row has a different cell count than the header.
    #[error(
        "article '{slug}': section '{section}' table row {row} has {found} cells, expected {expected}"
    )]
    MalformedComparisonRow {
        slug: String,
        section: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ArticleError {
    /// Recoverable problems are rendered anyway and only logged.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ArticleError::MalformedComparisonRow { .. })
    }
}

/// Problems with a comparison page scoreboard.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreboardError {
    /// A comparison page must ship at least one scored row.
    #[error("scoreboard has no rows; averages are undefined")]
    EmptyScoreboard,

    #[error("scoreboard has no contenders")]
    NoContenders,

    /// The same contender key is listed twice.
    #[error("contender '{contender}' is listed more than once")]
    DuplicateContender { contender: String },

    /// A row does not carry a score for one of the contenders.
    #[error("scoreboard row '{row}' has no score for '{contender}'")]
    MissingScore { row: String, contender: String },

    /// A row scores a key that is not one of the page's contenders.
    #[error("scoreboard row '{row}' scores unknown contender '{contender}'")]
    UnknownContender { row: String, contender: String },
}

/// Errors raised while building the whole site.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Article(#[from] ArticleError),

    #[error("comparison page '{slug}': {source}")]
    Scoreboard {
        slug: String,
        #[source]
        source: ScoreboardError,
    },

    /// Two pages resolve to the same output path.
    #[error("slug '{0}' is used by more than one page")]
    DuplicateSlug(String),

    /// Content failed validation; the individual errors were logged.
    #[error("{0} structural content error(s); see log for details")]
    Validation(usize),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
