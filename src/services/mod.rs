//! Service layer for the feed builder.
//!
//! This module contains the business logic for:
//! - Item lookups against the remote API (`ItemSource`, `HackerNewsClient`)
//! - Keyword source resolution (`KeywordSource`)
//! - Whole-word keyword matching (`KeywordMatcher`)
//! - Top-comment enrichment (`top_comment_summary`)

mod enrichment;
mod keywords;
mod matcher;
mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use enrichment::top_comment_summary;
pub use keywords::{KeywordSource, load_from_file};
pub use matcher::{KeywordMatcher, matches};
pub use source::{HackerNewsClient, ItemSource};
