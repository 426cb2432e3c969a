//! Local filesystem RSS writer.
//!
//! Renders entries as an RSS 2.0 channel and writes it atomically
//! (temp file, then rename), creating the output directory if needed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::feed::{FeedSummary, FeedWriter};
use crate::models::{FeedConfig, MatchedEntry};

const GENERATOR: &str = concat!("hnfeed ", env!("CARGO_PKG_VERSION"));

/// Writes an RSS document to a single file.
#[derive(Debug, Clone)]
pub struct RssFileWriter {
    path: PathBuf,
    title: String,
    link: String,
    description: String,
    language: String,
    author: Option<String>,
}

impl RssFileWriter {
    /// Create a writer targeting `config.output_dir/config.output_file`.
    pub fn new(config: &FeedConfig) -> Self {
        Self::with_path(config, config.output_path())
    }

    /// Create a writer with channel metadata from `config` and an explicit path.
    pub fn with_path(config: &FeedConfig, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: config.title.clone(),
            link: config.link.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            author: config.author.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the channel for `entries`.
    pub fn render(&self, entries: &[MatchedEntry]) -> Channel {
        let items: Vec<Item> = entries.iter().map(to_item).collect();

        ChannelBuilder::default()
            .title(self.title.clone())
            .link(self.link.clone())
            .description(self.description.clone())
            .language(Some(self.language.clone()))
            .managing_editor(self.author.clone())
            .generator(Some(GENERATOR.to_string()))
            .last_build_date(Some(Utc::now().to_rfc2822()))
            .items(items)
            .build()
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl FeedWriter for RssFileWriter {
    async fn write_feed(&self, entries: &[MatchedEntry]) -> Result<FeedSummary> {
        let channel = self.render(entries);
        let bytes = channel.write_to(Vec::new())?;
        self.write_bytes(&bytes).await?;

        log::info!(
            "RSS feed with {} items generated at {}",
            entries.len(),
            self.path.display()
        );

        Ok(FeedSummary {
            item_count: entries.len(),
            location: self.path.clone(),
            timestamp: Utc::now(),
        })
    }
}

fn to_item(entry: &MatchedEntry) -> Item {
    let guid = GuidBuilder::default()
        .value(entry.id.to_string())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .guid(Some(guid))
        .title(Some(entry.title.clone()))
        .link(Some(entry.link.clone()))
        .description(Some(entry.summary.clone()))
        .pub_date(entry.published_at().map(|t| t.to_rfc2822()))
        .build()
}
