// Static site build entry point
//
// Purpose: validate all content, then render every published page
// Usage: cargo run --bin build_site

use article_layout_rust::{SiteBuilder, SiteConfig, SiteContent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "article_layout_rust=info,build_site=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  CONTENT_DIR: {:?}", config.content_dir);
    tracing::info!("  OUTPUT_DIR: {:?}", config.output_dir);
    tracing::info!("  BASE_URL: {}", config.base_url);
    tracing::info!("  BLOG_PATH: {}", config.blog_path);
    tracing::info!("  INCLUDE_DRAFTS: {}", config.include_drafts);

    let started = std::time::Instant::now();
    let content = SiteContent::load(&config.content_dir)?;
    let report = SiteBuilder::new(config).build(content)?;

    tracing::info!(
        "Done: {} pages in {:?}",
        report.articles + report.comparisons,
        started.elapsed()
    );
    Ok(())
}
