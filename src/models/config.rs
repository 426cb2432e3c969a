//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API and HTTP behavior settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Candidate selection settings
    #[serde(default)]
    pub filter: FilterConfig,

    /// Keyword sources
    #[serde(default)]
    pub keywords: KeywordsConfig,

    /// Output feed settings
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.list_timeout_secs == 0 {
            return Err(AppError::validation("api.list_timeout_secs must be > 0"));
        }
        if self.api.item_timeout_secs == 0 {
            return Err(AppError::validation("api.item_timeout_secs must be > 0"));
        }
        if self.api.max_concurrent == 0 {
            return Err(AppError::validation("api.max_concurrent must be > 0"));
        }
        if self.filter.top_limit == 0 {
            return Err(AppError::validation("filter.top_limit must be > 0"));
        }
        if self.feed.output_file.trim().is_empty() {
            return Err(AppError::validation("feed.output_file is empty"));
        }

        for (field, value) in [
            ("api.base_url", &self.api.base_url),
            ("api.discussion_url", &self.api.discussion_url),
            ("feed.link", &self.feed.link),
        ] {
            Url::parse(value)
                .map_err(|e| AppError::validation(format!("{field} is not a valid URL: {e}")))?;
        }
        Ok(())
    }
}

/// Remote API and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the item API (no trailing slash)
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Discussion page URL; the story id is appended as `?id=`
    #[serde(default = "defaults::discussion_url")]
    pub discussion_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Timeout for the top-stories listing, which is the largest payload
    #[serde(default = "defaults::list_timeout")]
    pub list_timeout_secs: u64,

    /// Timeout for individual story and comment lookups
    #[serde(default = "defaults::item_timeout")]
    pub item_timeout_secs: u64,

    /// Maximum concurrent item requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            discussion_url: defaults::discussion_url(),
            user_agent: defaults::user_agent(),
            list_timeout_secs: defaults::list_timeout(),
            item_timeout_secs: defaults::item_timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Candidate selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// How many top stories to consider
    #[serde(default = "defaults::top_limit")]
    pub top_limit: usize,

    /// Refuse to run when no keywords could be resolved
    #[serde(default)]
    pub require_keywords: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            top_limit: defaults::top_limit(),
            require_keywords: false,
        }
    }
}

/// Keyword sources. At most one is used; see `KeywordSource::from_options`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Inline keyword list
    #[serde(default)]
    pub list: Option<Vec<String>>,

    /// File with one keyword per line
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Environment variable holding comma-separated keywords
    #[serde(default)]
    pub env: Option<String>,
}

/// Output feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "defaults::output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "defaults::output_file")]
    pub output_file: String,

    /// Channel title
    #[serde(default = "defaults::feed_title")]
    pub title: String,

    /// Channel link
    #[serde(default = "defaults::feed_link")]
    pub link: String,

    /// Channel description
    #[serde(default = "defaults::feed_description")]
    pub description: String,

    #[serde(default = "defaults::feed_language")]
    pub language: String,

    /// Channel author, written as `managingEditor`; omitted when unset
    #[serde(default = "defaults::feed_author")]
    pub author: Option<String>,

    /// Replace link summaries with the story's top comment when available
    #[serde(default)]
    pub enrich_with_top_comment: bool,
}

impl FeedConfig {
    /// Full path of the feed document.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            output_file: defaults::output_file(),
            title: defaults::feed_title(),
            link: defaults::feed_link(),
            description: defaults::feed_description(),
            language: defaults::feed_language(),
            author: defaults::feed_author(),
            enrich_with_top_comment: false,
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // API defaults
    pub fn base_url() -> String {
        "https://hacker-news.firebaseio.com/v0".into()
    }
    pub fn discussion_url() -> String {
        "https://news.ycombinator.com/item".into()
    }
    pub fn user_agent() -> String {
        concat!("hnfeed/", env!("CARGO_PKG_VERSION")).into()
    }
    pub fn list_timeout() -> u64 {
        10
    }
    pub fn item_timeout() -> u64 {
        5
    }
    pub fn max_concurrent() -> usize {
        5
    }

    // Filter defaults
    pub fn top_limit() -> usize {
        100
    }

    // Feed defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from("public")
    }
    pub fn output_file() -> String {
        "feed.xml".into()
    }
    pub fn feed_title() -> String {
        "Hacker News AI Topics".into()
    }
    pub fn feed_link() -> String {
        "https://news.ycombinator.com/".into()
    }
    pub fn feed_description() -> String {
        "Top AI/ML stories from Hacker News".into()
    }
    pub fn feed_language() -> String {
        "en".into()
    }
    pub fn feed_author() -> Option<String> {
        Some("Hacker News RSS Bot".into())
    }
}
