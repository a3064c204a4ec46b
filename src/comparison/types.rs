//! Data types for "X vs Y vs Z" comparison pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::article::types::{ArticleMeta, Section};

/// Brand theming for a contender card. Values are CSS class lists / URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContenderTheme {
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub badge_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// A product or service being compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contender {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub theme: ContenderTheme,
}

/// Descriptive (unscored) side-by-side row: `{ "label": ..., "<key>": "text" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
}

/// Scored row: `{ "label": ..., "<key>": 1-10 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub label: String,
    #[serde(flatten)]
    pub scores: BTreeMap<String, f64>,
}

impl ScoreRow {
    pub fn new(label: &str, scores: &[(&str, f64)]) -> Self {
        Self {
            label: label.to_string(),
            scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    pub fn score(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }
}

/// A full comparison page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPage {
    pub meta: ArticleMeta,
    pub contenders: Vec<Contender>,
    #[serde(default)]
    pub comparison_rows: Vec<ComparisonRow>,
    #[serde(default)]
    pub scoreboard: Vec<ScoreRow>,
    /// Ordinary article sections rendered after the scoreboard.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ComparisonPage {
    /// Contender keys in authored order. This order decides ties.
    pub fn contender_keys(&self) -> Vec<&str> {
        self.contenders.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn contender(&self, key: &str) -> Option<&Contender> {
        self.contenders.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_row_flattened_keys() {
        let row: ScoreRow =
            serde_json::from_str(r#"{"label": "Speed", "cloudways": 9.4, "vultr": 8}"#).unwrap();
        assert_eq!(row.label, "Speed");
        assert_eq!(row.score("cloudways"), Some(9.4));
        assert_eq!(row.score("vultr"), Some(8.0));
        assert_eq!(row.score("linode"), None);
    }

    #[test]
    fn test_comparison_row_flattened_keys() {
        let row: ComparisonRow = serde_json::from_str(
            r#"{"label": "Support", "cloudways": "24/7 chat", "vultr": "Tickets"}"#,
        )
        .unwrap();
        assert_eq!(row.values.get("vultr").map(String::as_str), Some("Tickets"));
    }

    #[test]
    fn test_contender_theme_defaults() {
        let contender: Contender =
            serde_json::from_str(r#"{"key": "vultr", "name": "Vultr"}"#).unwrap();
        assert_eq!(contender.theme, ContenderTheme::default());
        assert!(contender.blurb.is_empty());
    }
}
