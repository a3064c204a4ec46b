//! Comparison Module
//!
//! "X vs Y vs Z" pages: contenders, descriptive rows and a 1-10 scoreboard
//! whose averages decide the winner.

pub mod types;
pub mod scoreboard;
pub mod page;

pub use types::{ComparisonPage, ComparisonRow, Contender, ContenderTheme, ScoreRow};
pub use scoreboard::{compute, round_one_decimal, validate_scoreboard, RowResult, ScoreboardSummary};
pub use page::ComparisonPageRenderer;
