//! Site Module
//!
//! Loads authored content, validates it and writes the static site.

pub mod loader;
pub mod index;
pub mod builder;

pub use loader::SiteContent;
pub use index::{IndexEntry, PageKind, SiteIndex};
pub use builder::{BuildReport, BuiltPage, SiteBuilder, SiteLint};
