// Content lint entry point
//
// Purpose: validate every page (drafts included) without writing output.
// Exits non-zero when a structural error is found.
// Usage: cargo run --bin lint_content

use article_layout_rust::{SiteBuilder, SiteConfig, SiteContent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "article_layout_rust=info,lint_content=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    let content = SiteContent::load(&config.content_dir)?;
    let pages = content.page_count();

    let lint = SiteBuilder::new(config).lint(&content);
    for warning in &lint.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &lint.errors {
        tracing::error!("{}", error);
    }

    if !lint.is_ok() {
        anyhow::bail!(
            "{} error(s), {} warning(s) across {} pages",
            lint.errors.len(),
            lint.warnings.len(),
            pages
        );
    }
    tracing::info!("{} pages OK ({} warnings)", pages, lint.warnings.len());
    Ok(())
}
