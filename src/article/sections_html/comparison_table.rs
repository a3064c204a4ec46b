//! Comparison tables.
//!
//! Rows are rendered as authored. Short rows are padded with blank cells so the
//! grid stays rectangular; long rows keep their extra cells.

use crate::article::types::ComparisonTable;
use crate::article::utils::escape_html;

/// Render a table. `context` identifies the section in log messages.
pub fn render(table: &ComparisonTable, context: &str) -> String {
    let columns = table.column_count();
    let expected = table.headers.len();

    for (row, found) in table.mismatched_rows() {
        tracing::warn!(
            "{}: comparison table row {} has {} cells, header has {}",
            context, row, found, expected
        );
    }

    let mut lines = vec![
        "<div class=\"section-comparison-table\">".to_string(),
        "<table>".to_string(),
    ];

    if !table.headers.is_empty() {
        let mut head = String::from("<thead><tr>");
        for i in 0..columns {
            let cell = table.headers.get(i).map(String::as_str).unwrap_or("");
            head.push_str(&format!("<th>{}</th>", escape_html(cell)));
        }
        head.push_str("</tr></thead>");
        lines.push(head);
    }

    lines.push("<tbody>".to_string());
    for row in &table.rows {
        let mut tr = String::from("<tr>");
        for i in 0..columns {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            tr.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        tr.push_str("</tr>");
        lines.push(tr);
    }
    lines.push("</tbody>".to_string());
    lines.push("</table>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_row_padded() {
        let table = ComparisonTable {
            headers: vec!["Plan".into(), "Price".into(), "RAM".into()],
            rows: vec![vec!["Basic".into(), "$5".into()]],
        };
        let html = render(&table, "test#t");
        assert!(html.contains("<tr><td>Basic</td><td>$5</td><td></td></tr>"));
    }

    #[test]
    fn test_long_row_keeps_cells() {
        let table = ComparisonTable {
            headers: vec!["A".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        };
        let html = render(&table, "test#t");
        assert!(html.contains("<thead><tr><th>A</th><th></th></tr></thead>"));
        assert!(html.contains("<tr><td>1</td><td>2</td></tr>"));
    }

    #[test]
    fn test_empty_table() {
        let html = render(&ComparisonTable::default(), "test#t");
        assert!(!html.contains("<thead>"));
        assert!(html.contains("<tbody>\n</tbody>"));
    }
}
