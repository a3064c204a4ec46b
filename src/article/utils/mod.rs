//! Utility functions for article rendering.

pub mod escape;
pub mod text;

pub use escape::{escape_html, escape_attr};
pub use text::{word_count, reading_time_minutes, slugify};
