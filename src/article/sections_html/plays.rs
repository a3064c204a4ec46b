//! `plays` and `perspectives`: title + detail cards.
//!
//! Both fields share one shape; only the wrapper class differs.

use crate::article::types::Play;
use crate::article::utils::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Plays,
    Perspectives,
}

impl PlayKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            PlayKind::Plays => "section-plays",
            PlayKind::Perspectives => "section-perspectives",
        }
    }
}

pub fn render(items: &[Play], kind: PlayKind) -> String {
    let mut lines = vec![format!("<div class=\"{}\">", kind.css_class())];
    for item in items {
        lines.push("<div class=\"play\">".to_string());
        lines.push(format!("<h3>{}</h3>", escape_html(&item.title)));
        lines.push(format!("<p>{}</p>", escape_html(&item.detail)));
        lines.push("</div>".to_string());
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_share_markup() {
        let items = vec![Play { title: "Own the niche".into(), detail: "Pick one vertical.".into() }];
        let plays = render(&items, PlayKind::Plays);
        let perspectives = render(&items, PlayKind::Perspectives);
        assert!(plays.starts_with("<div class=\"section-plays\">"));
        assert!(perspectives.starts_with("<div class=\"section-perspectives\">"));
        assert_eq!(
            plays.replace("section-plays", ""),
            perspectives.replace("section-perspectives", "")
        );
    }
}
