//! Comparison page renderer.
//!
//! Body layout: contender cards, descriptive comparison table, scoreboard
//! table (per-row winner + average row), overall-winner callout, then the
//! page's ordinary sections through the article renderer.

use crate::article::generator::ArticleRenderer;
use crate::article::types::table_of_contents;
use crate::article::utils::{escape_attr, escape_html, word_count};
use crate::comparison::scoreboard::{self, ScoreboardSummary};
use crate::comparison::types::{ComparisonPage, Contender};
use crate::error::SiteError;

pub struct ComparisonPageRenderer {
    article: ArticleRenderer,
}

impl ComparisonPageRenderer {
    pub fn new() -> Self {
        Self {
            article: ArticleRenderer::new(),
        }
    }

    /// Render the full HTML document for a comparison page.
    pub fn render(&self, page: &ComparisonPage) -> Result<String, SiteError> {
        let summary = self.summarize(page)?;

        let mut body = vec![
            render_contenders(page, &summary),
        ];
        if !page.comparison_rows.is_empty() {
            body.push(render_comparison_rows(page));
        }
        body.push(render_scoreboard(page, &summary));
        body.push(render_verdict(page, &summary));
        if !page.sections.is_empty() {
            body.push(self.article.render_body(&page.meta.slug, &page.sections));
        }

        let words: usize = page
            .contenders
            .iter()
            .map(|c| word_count(&c.blurb))
            .chain(page.sections.iter().map(|s| word_count(&s.plain_text())))
            .sum();

        Ok(self.article.render_page(
            &page.meta,
            body.join("\n"),
            table_of_contents(&page.sections),
            words,
        )?)
    }

    /// Scoreboard result for a page, with the slug attached to any error.
    pub fn summarize(&self, page: &ComparisonPage) -> Result<ScoreboardSummary, SiteError> {
        scoreboard::compute(&page.scoreboard, &page.contender_keys()).map_err(|source| {
            SiteError::Scoreboard {
                slug: page.meta.slug.clone(),
                source,
            }
        })
    }
}

impl Default for ComparisonPageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name<'a>(page: &'a ComparisonPage, key: &'a str) -> &'a str {
    page.contender(key).map(|c| c.name.as_str()).unwrap_or(key)
}

fn render_contenders(page: &ComparisonPage, summary: &ScoreboardSummary) -> String {
    let mut lines = vec!["<div class=\"contenders\">".to_string()];
    for contender in &page.contenders {
        lines.push(render_contender_card(contender, summary));
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn render_contender_card(contender: &Contender, summary: &ScoreboardSummary) -> String {
    let theme = &contender.theme;
    let mut lines = vec![format!(
        "<div class=\"contender-card {}\" data-contender=\"{}\">",
        escape_attr(&theme.gradient),
        escape_attr(&contender.key)
    )];

    if let Some(logo) = &theme.logo_url {
        lines.push(format!(
            "<img class=\"contender-logo\" src=\"{}\" alt=\"{} logo\">",
            escape_attr(logo),
            escape_attr(&contender.name)
        ));
    }
    lines.push(format!("<h3>{}</h3>", escape_html(&contender.name)));
    if contender.key == summary.overall_winner {
        lines.push(format!(
            "<span class=\"badge {}\">Overall winner</span>",
            escape_attr(&theme.badge_class)
        ));
    }
    if let Some(avg) = summary.average(&contender.key) {
        lines.push(format!("<p class=\"contender-score\">{:.1}/10</p>", avg));
    }
    if !contender.blurb.is_empty() {
        lines.push(format!("<p>{}</p>", escape_html(&contender.blurb)));
    }
    if !contender.url.is_empty() {
        lines.push(format!(
            "<a class=\"contender-link\" href=\"{}\" rel=\"nofollow\">Visit {}</a>",
            escape_attr(&contender.url),
            escape_html(&contender.name)
        ));
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn header_row(page: &ComparisonPage, first: &str, last: Option<&str>) -> String {
    let mut head = format!("<thead><tr><th>{}</th>", escape_html(first));
    for contender in &page.contenders {
        head.push_str(&format!("<th>{}</th>", escape_html(&contender.name)));
    }
    if let Some(last) = last {
        head.push_str(&format!("<th>{}</th>", escape_html(last)));
    }
    head.push_str("</tr></thead>");
    head
}

/// Descriptive table. Missing values render as blank cells.
fn render_comparison_rows(page: &ComparisonPage) -> String {
    let mut lines = vec![
        "<div class=\"comparison-rows\">".to_string(),
        "<table>".to_string(),
        header_row(page, "Feature", None),
        "<tbody>".to_string(),
    ];
    for row in &page.comparison_rows {
        let mut tr = format!("<tr><th scope=\"row\">{}</th>", escape_html(&row.label));
        for contender in &page.contenders {
            let value = row.values.get(&contender.key).map(String::as_str).unwrap_or("");
            tr.push_str(&format!("<td>{}</td>", escape_html(value)));
        }
        tr.push_str("</tr>");
        lines.push(tr);
    }
    lines.push("</tbody>".to_string());
    lines.push("</table>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn render_scoreboard(page: &ComparisonPage, summary: &ScoreboardSummary) -> String {
    let mut lines = vec![
        "<div class=\"scoreboard\">".to_string(),
        "<table>".to_string(),
        header_row(page, "Criterion", Some("Winner")),
        "<tbody>".to_string(),
    ];

    for (row, result) in page.scoreboard.iter().zip(&summary.row_winners) {
        let mut tr = format!("<tr><th scope=\"row\">{}</th>", escape_html(&row.label));
        for contender in &page.contenders {
            let score = row.score(&contender.key).unwrap_or_default();
            if contender.key == result.winner {
                tr.push_str(&format!("<td class=\"row-winner\">{:.1}</td>", score));
            } else {
                tr.push_str(&format!("<td>{:.1}</td>", score));
            }
        }
        tr.push_str(&format!(
            "<td>{}</td></tr>",
            escape_html(display_name(page, &result.winner))
        ));
        lines.push(tr);
    }
    lines.push("</tbody>".to_string());

    let mut foot = String::from("<tfoot><tr><th scope=\"row\">Average</th>");
    for avg in &summary.averages {
        if avg.key == summary.overall_winner {
            foot.push_str(&format!("<td class=\"overall-winner\">{:.1}</td>", avg.rounded));
        } else {
            foot.push_str(&format!("<td>{:.1}</td>", avg.rounded));
        }
    }
    foot.push_str(&format!(
        "<td>{}</td></tr></tfoot>",
        escape_html(display_name(page, &summary.overall_winner))
    ));
    lines.push(foot);

    lines.push("</table>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

fn render_verdict(page: &ComparisonPage, summary: &ScoreboardSummary) -> String {
    let winner = display_name(page, &summary.overall_winner);
    let score = summary.average(&summary.overall_winner).unwrap_or_default();
    let mut text = format!(
        "<strong>{}</strong> wins with an average of {:.1}/10",
        escape_html(winner),
        score
    );
    if summary.is_overall_tie() {
        let others: Vec<String> = summary
            .overall_leaders
            .iter()
            .skip(1)
            .map(|key| escape_html(display_name(page, key)))
            .collect();
        text.push_str(&format!(", level with {}", others.join(", ")));
    }
    format!("<div class=\"verdict\">\n<p>{}.</p>\n</div>", text)
}
