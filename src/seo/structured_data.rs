//! schema.org blocks built straight from content data.

use serde_json::{json, Value};

use crate::article::types::{ArticleMeta, Section};

/// BlogPosting block for an article.
pub fn article_schema(meta: &ArticleMeta, canonical_url: &str, image: Option<&str>) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": meta.title,
        "description": meta.meta_description,
        "url": canonical_url,
        "mainEntityOfPage": canonical_url,
        "datePublished": meta.date.to_string(),
        "dateModified": meta.modified().to_string(),
        "keywords": meta.tags.join(", "),
    });
    if let Some(author) = &meta.author {
        schema["author"] = json!({ "@type": "Person", "name": author });
    }
    if let Some(image) = image {
        schema["image"] = json!(image);
    }
    schema
}

/// FAQPage block from every `faqs` entry on the page, in order.
/// `None` when the page has no FAQs.
pub fn faq_page_schema(sections: &[Section]) -> Option<Value> {
    let questions: Vec<Value> = sections
        .iter()
        .filter_map(|s| s.faqs.as_ref())
        .flatten()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.title,
                "acceptedAnswer": { "@type": "Answer", "text": faq.body },
            })
        })
        .collect();

    if questions.is_empty() {
        return None;
    }
    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    }))
}
