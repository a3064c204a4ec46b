//! Site configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `CONTENT_DIR` | `content` |
//! | `OUTPUT_DIR` | `dist` |
//! | `BASE_URL` | `https://example.com` |
//! | `BLOG_PATH` | `/blog` |
//! | `INCLUDE_DRAFTS` | `false` |

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Scheme and host, no trailing slash.
    pub base_url: String,
    /// Path prefix for article URLs, leading slash, no trailing slash.
    pub blog_path: String,
    pub include_drafts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            base_url: "https://example.com".to_string(),
            blog_path: "/blog".to_string(),
            include_drafts: false,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            content_dir: lookup("CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.content_dir),
            output_dir: lookup("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            base_url: lookup("BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            blog_path: lookup("BLOG_PATH")
                .map(|v| normalize_path(&v))
                .unwrap_or(defaults.blog_path),
            include_drafts: lookup("INCLUDE_DRAFTS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.include_drafts),
        }
    }

    /// Canonical URL of a page: `{base_url}{blog_path}/{slug}`.
    pub fn canonical_url(&self, slug: &str) -> String {
        format!("{}{}/{}", self.base_url, self.blog_path, slug)
    }

    /// Absolute URL for an asset reference; absolute inputs are returned as is.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(
            config.canonical_url("best-vps"),
            "https://example.com/blog/best-vps"
        );
    }

    #[test]
    fn test_overrides_are_normalized() {
        let vars: HashMap<&str, &str> = [
            ("BASE_URL", "https://hostpicks.io/"),
            ("BLOG_PATH", "articles/"),
            ("INCLUDE_DRAFTS", "TRUE"),
        ]
        .into_iter()
        .collect();
        let config = SiteConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.canonical_url("x"), "https://hostpicks.io/articles/x");
        assert!(config.include_drafts);
    }

    #[test]
    fn test_root_blog_path() {
        let config = SiteConfig::from_lookup(|k| (k == "BLOG_PATH").then(|| "/".to_string()));
        assert_eq!(config.canonical_url("x"), "https://example.com/x");
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("/img/a.png"), "https://example.com/img/a.png");
        assert_eq!(config.absolute_url("img/a.png"), "https://example.com/img/a.png");
        assert_eq!(config.absolute_url("https://cdn.x/a.png"), "https://cdn.x/a.png");
    }
}
