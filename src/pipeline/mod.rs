//! Pipeline entry points for feed operations.
//!
//! - `select_stories`: Resolve candidate ids and keep keyword matches
//! - `build_entries`: Package selected stories with summaries
//! - `run_feed`: Fetch, filter, and write the feed in one pass

pub mod entries;
pub mod run;
pub mod select;

pub use entries::build_entries;
pub use run::{RunOutcome, run_feed};
pub use select::select_stories;
