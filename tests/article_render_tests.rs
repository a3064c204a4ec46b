//! Article Rendering Integration Tests
//!
//! Renders the bundled sample article and hand-built sections end to end.

use article_layout_rust::article::{
    Article, ArticleMeta, ArticleRenderer, Checklist, ChecklistItem, MarkdownRenderer, Section,
};
use article_layout_rust::site::loader::load_file;
use article_layout_rust::validate_article;
use std::path::Path;

fn sample_article() -> Article {
    load_file(Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/content/articles/vps-launch-checklist.json"
    )))
    .unwrap()
}

fn minimal_meta() -> ArticleMeta {
    serde_json::from_str(r#"{"title": "T", "slug": "t", "date": "2024-06-01"}"#).unwrap()
}

#[test]
fn test_sample_article_renders() {
    let article = sample_article();
    let report = validate_article(&article);
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    // "Cloudways" plan row is one cell short
    assert_eq!(report.warnings.len(), 1);

    let html = ArticleRenderer::new().render(&article.meta, &article.sections).unwrap();
    assert!(html.contains("<title>VPS Launch Checklist (2024) | 12 Steps Before Going Live</title>"));
    assert!(html.contains("<section id=\"checklist\">"));
    assert!(html.contains("<h3 class=\"checklist-title\">Before you point DNS</h3>"));
    assert!(html.contains("<a href=\"/blog/cloudways-vs-digitalocean-vs-vultr\">"));
    assert!(html.contains("<tr><td>Cloudways</td><td>1</td><td>1 GB</td><td></td></tr>"));
    assert!(html.contains("class=\"toc\""));
}

#[test]
fn test_sections_keep_authored_order() {
    let article = sample_article();
    let html = ArticleRenderer::new().render(&article.meta, &article.sections).unwrap();
    let positions: Vec<usize> = ["overview", "checklist", "plans", "faq"]
        .iter()
        .map(|id| html.find(&format!("<section id=\"{}\">", id)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_checklist_scenario() {
    let sections = vec![Section {
        id: Some("s1".to_string()),
        title: Some("T".to_string()),
        checklist: Some(Checklist {
            title: None,
            items: ["a", "b", "c"].iter().map(|s| ChecklistItem::Item(s.to_string())).collect(),
        }),
        ..Default::default()
    }];
    let html = ArticleRenderer::new().render(&minimal_meta(), &sections).unwrap();

    let items: Vec<&str> = html
        .lines()
        .filter(|l| l.starts_with("<li>") && !l.contains("href"))
        .collect();
    assert_eq!(items, vec!["<li>a</li>", "<li>b</li>", "<li>c</li>"]);
    assert!(!html.contains("checklist-title"));
}

#[test]
fn test_empty_sections_render_head_only() {
    let html = ArticleRenderer::new().render(&minimal_meta(), &[]).unwrap();
    assert!(html.contains("<title>T</title>"));
    assert!(!html.contains("<section"));
}

#[test]
fn test_render_is_idempotent() {
    let article = sample_article();
    let renderer = ArticleRenderer::new();
    let first = renderer.render(&article.meta, &article.sections).unwrap();
    let second = renderer.render(&article.meta, &article.sections).unwrap();
    assert_eq!(first, second);
    assert_eq!(MarkdownRenderer::render(&article), MarkdownRenderer::render(&article));
}

#[test]
fn test_render_does_not_mutate_input() {
    let article = sample_article();
    let before = article.clone();
    ArticleRenderer::new().render(&article.meta, &article.sections).unwrap();
    assert_eq!(article, before);
}
