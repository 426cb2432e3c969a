// src/pipeline/run.rs

//! Full feed run: top stories → selection → entries → feed.

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::feed::{FeedSummary, FeedWriter};
use crate::models::Config;
use crate::pipeline::{build_entries, select_stories};
use crate::services::{ItemSource, KeywordMatcher};

/// Summary of a feed run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Candidate ids taken from the top-stories listing
    pub candidates: usize,
    /// Entries handed to the feed writer
    pub matched: usize,
    pub feed: FeedSummary,
}

/// Run one fetch-filter-write cycle.
///
/// Network failures only shrink the result; the feed is written even when it
/// ends up empty. With `filter.require_keywords` set, an empty keyword set is
/// a configuration error and nothing is fetched.
pub async fn run_feed(
    config: &Config,
    keywords: &[String],
    source: &dyn ItemSource,
    writer: &dyn FeedWriter,
) -> Result<RunOutcome> {
    let start_time = Utc::now();

    if keywords.is_empty() && config.filter.require_keywords {
        log::error!("No keywords loaded. Exiting.");
        return Err(AppError::config("no keywords loaded"));
    }

    let matcher = KeywordMatcher::new(keywords);
    if matcher.is_pass_through() {
        log::info!("No keywords active; every story will be included");
    } else {
        log::info!("Filtering with {} keywords", matcher.len());
    }

    let api = &config.api;
    let candidates = source.top_story_ids(config.filter.top_limit).await;
    log::info!("Fetched {} top stories.", candidates.len());

    let stories = select_stories(
        source,
        &candidates,
        &matcher,
        &api.discussion_url,
        api.max_concurrent,
    )
    .await;
    log::info!("Found {} matching stories.", stories.len());

    let entries = build_entries(
        source,
        &stories,
        &api.discussion_url,
        config.feed.enrich_with_top_comment,
        api.max_concurrent,
    )
    .await;

    let feed = writer.write_feed(&entries).await?;

    let elapsed = Utc::now() - start_time;
    log::debug!("Run finished in {} ms", elapsed.num_milliseconds());

    Ok(RunOutcome {
        candidates: candidates.len(),
        matched: entries.len(),
        feed,
    })
}
