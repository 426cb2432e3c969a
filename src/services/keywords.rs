// src/services/keywords.rs

//! Keyword source resolution.
//!
//! Exactly one source is used, chosen by precedence:
//! explicit list > file > environment variable > none.
//! Resolution never fails; problems are logged and yield an empty set,
//! which downstream means "match everything".

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::KeywordsConfig;

/// The keyword source selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    /// Keywords given directly
    List(Vec<String>),
    /// File with one keyword per line
    File(PathBuf),
    /// Environment variable holding comma-separated keywords
    Env(String),
    /// No source configured
    None,
}

impl KeywordSource {
    /// Pick a single source from the configured options.
    pub fn from_options(
        list: Option<Vec<String>>,
        file: Option<PathBuf>,
        env: Option<String>,
    ) -> Self {
        if let Some(list) = list {
            Self::List(list)
        } else if let Some(path) = file {
            Self::File(path)
        } else if let Some(name) = env {
            Self::Env(name)
        } else {
            Self::None
        }
    }

    /// Pick a source from the `[keywords]` config section.
    pub fn from_config(config: &KeywordsConfig) -> Self {
        Self::from_options(
            config.list.clone(),
            config.file.clone(),
            config.env.clone(),
        )
    }

    /// Short human-readable description of the source.
    pub fn describe(&self) -> String {
        match self {
            Self::List(_) => "explicit list".to_string(),
            Self::File(path) => format!("file {}", path.display()),
            Self::Env(name) => format!("environment variable {name}"),
            Self::None => "none".to_string(),
        }
    }

    /// Resolve keywords, reading environment variables from the process.
    pub fn resolve(&self) -> Vec<String> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve keywords with a custom environment lookup.
    pub fn resolve_with<F>(&self, lookup: F) -> Vec<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match self {
            Self::List(list) => normalize(list.iter().map(String::as_str)),
            Self::File(path) => load_from_file(path),
            Self::Env(name) => load_from_env(name, lookup),
            Self::None => {
                log::info!("No keyword source configured; all stories pass");
                Vec::new()
            }
        }
    }
}

/// Load keywords from a file, one per line. Blank lines are skipped.
pub fn load_from_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let keywords = normalize(content.lines());
            log::info!("Loaded {} keywords from {}", keywords.len(), path.display());
            keywords
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::error!("Keywords file not found: {}", path.display());
            Vec::new()
        }
        Err(e) => {
            log::error!("Error loading keywords from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Load comma-separated keywords from an environment variable.
fn load_from_env<F>(name: &str, lookup: F) -> Vec<String>
where
    F: FnOnce(&str) -> Option<String>,
{
    let keywords = lookup(name)
        .map(|value| normalize(value.split(',')))
        .unwrap_or_default();

    if keywords.is_empty() {
        log::warn!("Environment variable {} is missing or empty", name);
    } else {
        log::info!("Loaded {} keywords from ${}", keywords.len(), name);
    }
    keywords
}

/// Trim tokens and drop empty ones, keeping order and duplicates.
fn normalize<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
    tokens
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn keyword_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_list_wins_over_file_and_env() {
        let source = KeywordSource::from_options(
            Some(strings(&["AI"])),
            Some(PathBuf::from("keywords.txt")),
            Some("KEYWORDS".to_string()),
        );
        assert_eq!(source, KeywordSource::List(strings(&["AI"])));
    }

    #[test]
    fn test_file_wins_over_env() {
        let source = KeywordSource::from_options(
            None,
            Some(PathBuf::from("keywords.txt")),
            Some("KEYWORDS".to_string()),
        );
        assert_eq!(source, KeywordSource::File(PathBuf::from("keywords.txt")));
    }

    #[test]
    fn test_no_source_yields_empty() {
        let source = KeywordSource::from_options(None, None, None);
        assert_eq!(source, KeywordSource::None);
        assert!(source.resolve_with(|_| panic!("env must not be read")).is_empty());
    }

    #[test]
    fn test_list_does_not_read_file() {
        let source = KeywordSource::from_options(
            Some(strings(&[" Rust ", "", "AI", "AI"])),
            Some(PathBuf::from("/nonexistent/keywords.txt")),
            None,
        );
        assert_eq!(
            source.resolve_with(|_| panic!("env must not be read")),
            strings(&["Rust", "AI", "AI"])
        );
    }

    #[test]
    fn test_file_skips_blank_lines() {
        let file = keyword_file("AI\n\n  Machine Learning  \n   \nLLM\nAI\n");
        let source = KeywordSource::File(file.path().to_path_buf());
        assert_eq!(
            source.resolve_with(|_| panic!("env must not be read")),
            strings(&["AI", "Machine Learning", "LLM", "AI"])
        );
    }

    #[test]
    fn test_file_wins_and_env_is_never_read() {
        let file = keyword_file("GPT\n");
        let source = KeywordSource::from_options(
            None,
            Some(file.path().to_path_buf()),
            Some("KEYWORDS".to_string()),
        );
        assert_eq!(
            source.resolve_with(|_| panic!("env must not be read")),
            strings(&["GPT"])
        );
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let source = KeywordSource::File(PathBuf::from("/nonexistent/keywords.txt"));
        assert!(source.resolve().is_empty());
    }

    #[test]
    fn test_env_splits_on_commas() {
        let source = KeywordSource::Env("HN_KEYWORDS".to_string());
        let keywords = source.resolve_with(|name| {
            assert_eq!(name, "HN_KEYWORDS");
            Some(" AI, ,LLM ,Rust,".to_string())
        });
        assert_eq!(keywords, strings(&["AI", "LLM", "Rust"]));
    }

    #[test]
    fn test_env_missing_or_empty_yields_empty() {
        let source = KeywordSource::Env("HN_KEYWORDS".to_string());
        assert!(source.resolve_with(|_| None).is_empty());
        assert!(source.resolve_with(|_| Some(" , ,".to_string())).is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = KeywordsConfig {
            list: None,
            file: None,
            env: Some("HN_KEYWORDS".to_string()),
        };
        assert_eq!(
            KeywordSource::from_config(&config),
            KeywordSource::Env("HN_KEYWORDS".to_string())
        );
        assert_eq!(
            KeywordSource::from_config(&config).describe(),
            "environment variable HN_KEYWORDS"
        );
    }
}
