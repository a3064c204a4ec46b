//! Scoreboard Calculator
//!
//! Averages each contender's 1-10 scores across all rows, picks a winner per
//! row and an overall winner.
//!
//! Tie policy (applies everywhere): the first tied contender in contender
//! order wins. All tied contenders are still listed in `leaders`.
//! The overall winner is chosen on the unrounded mean. Means within
//! `TIE_EPSILON` of each other are a tie, so float noise never breaks one.

use std::collections::HashSet;

use serde::Serialize;

use crate::comparison::types::ScoreRow;
use crate::error::ScoreboardError;

/// Lowest and highest score an author is expected to use.
pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 10.0;

/// Scores or means closer than this are equal.
pub const TIE_EPSILON: f64 = 1e-9;

/// Average score of one contender.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContenderAverage {
    pub key: String,
    /// Unrounded mean.
    pub mean: f64,
    /// Mean rounded to one decimal place (half-up).
    pub rounded: f64,
}

/// Winner of a single scoreboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowResult {
    pub label: String,
    pub top_score: f64,
    /// Every contender reaching `top_score`, in contender order.
    pub leaders: Vec<String>,
    /// First of `leaders`.
    pub winner: String,
}

impl RowResult {
    pub fn is_tie(&self) -> bool {
        self.leaders.len() > 1
    }
}

/// Full result for one comparison page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardSummary {
    /// In contender order.
    pub averages: Vec<ContenderAverage>,
    pub row_winners: Vec<RowResult>,
    /// Contenders sharing the highest mean, in contender order.
    pub overall_leaders: Vec<String>,
    pub overall_winner: String,
}

impl ScoreboardSummary {
    /// Rounded average for `key`.
    pub fn average(&self, key: &str) -> Option<f64> {
        self.averages.iter().find(|a| a.key == key).map(|a| a.rounded)
    }

    pub fn is_overall_tie(&self) -> bool {
        self.overall_leaders.len() > 1
    }
}

/// Round half-up to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Check a scoreboard before computing it.
///
/// Returns non-fatal notes (scores outside 1-10) on success.
pub fn validate_scoreboard(
    rows: &[ScoreRow],
    contender_keys: &[&str],
) -> Result<Vec<String>, ScoreboardError> {
    if contender_keys.is_empty() {
        return Err(ScoreboardError::NoContenders);
    }
    let mut seen = HashSet::new();
    if let Some(key) = contender_keys.iter().find(|key| !seen.insert(**key)) {
        return Err(ScoreboardError::DuplicateContender {
            contender: key.to_string(),
        });
    }
    if rows.is_empty() {
        return Err(ScoreboardError::EmptyScoreboard);
    }

    let mut notes = Vec::new();
    for row in rows {
        for key in row.scores.keys() {
            if !contender_keys.contains(&key.as_str()) {
                return Err(ScoreboardError::UnknownContender {
                    row: row.label.clone(),
                    contender: key.clone(),
                });
            }
        }
        for key in contender_keys {
            let score = row.score(key).ok_or_else(|| ScoreboardError::MissingScore {
                row: row.label.clone(),
                contender: key.to_string(),
            })?;
            if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                notes.push(format!(
                    "row '{}': score {} for '{}' is outside {}-{}",
                    row.label, score, key, SCORE_MIN, SCORE_MAX
                ));
            }
        }
    }
    Ok(notes)
}

/// Compute averages, row winners and the overall winner.
///
/// # Errors
/// Fails on an empty scoreboard, no or repeated contenders, or a row that does
/// not score exactly the given contenders.
pub fn compute(
    rows: &[ScoreRow],
    contender_keys: &[&str],
) -> Result<ScoreboardSummary, ScoreboardError> {
    for note in validate_scoreboard(rows, contender_keys)? {
        tracing::warn!("{}", note);
    }

    let row_count = rows.len() as f64;
    let averages: Vec<ContenderAverage> = contender_keys
        .iter()
        .map(|key| {
            let total: f64 = rows
                .iter()
                .filter_map(|row| row.score(key))
                .sum();
            let mean = total / row_count;
            ContenderAverage {
                key: key.to_string(),
                mean,
                rounded: round_one_decimal(mean),
            }
        })
        .collect();

    let row_winners = rows
        .iter()
        .map(|row| {
            let scored: Vec<(&str, f64)> = contender_keys
                .iter()
                .filter_map(|key| row.score(key).map(|s| (*key, s)))
                .collect();
            let (top_score, leaders) = leaders_of(&scored);
            RowResult {
                label: row.label.clone(),
                top_score,
                winner: leaders[0].clone(),
                leaders,
            }
        })
        .collect();

    let means: Vec<(&str, f64)> = averages
        .iter()
        .map(|a| (a.key.as_str(), a.mean))
        .collect();
    let (_, overall_leaders) = leaders_of(&means);

    Ok(ScoreboardSummary {
        overall_winner: overall_leaders[0].clone(),
        overall_leaders,
        averages,
        row_winners,
    })
}

/// Maximum value and every key reaching it, keeping input order.
/// `scored` is never empty here: validation guarantees at least one contender.
fn leaders_of(scored: &[(&str, f64)]) -> (f64, Vec<String>) {
    let top = scored
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::NEG_INFINITY, f64::max);
    let leaders = scored
        .iter()
        .filter(|(_, s)| top - *s <= TIE_EPSILON)
        .map(|(k, _)| k.to_string())
        .collect();
    (top, leaders)
}
