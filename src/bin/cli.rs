//! hnfeed CLI
//!
//! Fetches Hacker News top stories, keeps keyword matches, and writes an
//! RSS feed. Meant to be run periodically (cron, CI schedule).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hnfeed::{
    error::Result,
    feed::RssFileWriter,
    models::Config,
    pipeline,
    services::{HackerNewsClient, KeywordSource},
};

/// hnfeed - keyword-filtered Hacker News feed
#[derive(Parser, Debug)]
#[command(name = "hnfeed", version, about = "Keyword-filtered Hacker News RSS feed")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "hnfeed.toml")]
    config: PathBuf,

    #[command(flatten)]
    keywords: KeywordArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Keyword sources, highest precedence first.
#[derive(Args, Debug, Default)]
struct KeywordArgs {
    /// Comma-separated keywords
    #[arg(long, value_delimiter = ',', global = true)]
    keywords: Option<Vec<String>>,

    /// File with one keyword per line
    #[arg(long, global = true)]
    keywords_file: Option<PathBuf>,

    /// Environment variable holding comma-separated keywords
    #[arg(long, global = true)]
    keywords_env: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, filter, and write the feed (default)
    Run(RunArgs),

    /// Validate the configuration file
    Validate,

    /// Print the resolved keyword set
    Keywords,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Number of top stories to consider
    #[arg(short, long)]
    limit: Option<usize>,

    /// Directory to write the feed into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Use each story's top comment as its summary
    #[arg(long)]
    with_comments: bool,

    /// Exit with an error when no keywords are configured
    #[arg(long)]
    require_keywords: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Pick a keyword source. Any keyword flag replaces the config section.
fn keyword_source(args: KeywordArgs, config: &Config) -> KeywordSource {
    let from_flags =
        args.keywords.is_some() || args.keywords_file.is_some() || args.keywords_env.is_some();

    if from_flags {
        KeywordSource::from_options(args.keywords, args.keywords_file, args.keywords_env)
    } else {
        KeywordSource::from_config(&config.keywords)
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Starting HN RSS fetcher...");

    let mut config = Config::load_or_default(&cli.config);
    let source = keyword_source(cli.keywords, &config);

    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => {
            if let Some(limit) = args.limit {
                config.filter.top_limit = limit;
            }
            if let Some(dir) = args.output_dir {
                config.feed.output_dir = dir;
            }
            if args.with_comments {
                config.feed.enrich_with_top_comment = true;
            }
            if args.require_keywords {
                config.filter.require_keywords = true;
            }
            config.validate()?;

            log::info!("Keyword source: {}", source.describe());
            let keywords = source.resolve();

            let client = HackerNewsClient::new(&config.api)?;
            let writer = RssFileWriter::new(&config.feed);
            let outcome = pipeline::run_feed(&config, &keywords, &client, &writer).await?;

            log::info!(
                "Wrote {} of {} candidate stories to {}",
                outcome.matched,
                outcome.candidates,
                outcome.feed.location.display()
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Keywords => {
            log::info!("Keyword source: {}", source.describe());
            let keywords = source.resolve();
            if keywords.is_empty() {
                log::info!("No keywords; every story passes");
            }
            for keyword in &keywords {
                println!("{keyword}");
            }
        }
    }

    log::info!("Done.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config_section() {
        let mut config = Config::default();
        config.keywords.list = Some(vec!["Rust".to_string()]);

        let cli = Cli::parse_from(["hnfeed", "--keywords-file", "kw.txt"]);
        assert_eq!(
            keyword_source(cli.keywords, &config),
            KeywordSource::File(PathBuf::from("kw.txt"))
        );
    }

    #[test]
    fn config_section_used_without_flags() {
        let mut config = Config::default();
        config.keywords.env = Some("HN_KEYWORDS".to_string());

        let cli = Cli::parse_from(["hnfeed"]);
        assert!(cli.command.is_none());
        assert_eq!(
            keyword_source(cli.keywords, &config),
            KeywordSource::Env("HN_KEYWORDS".to_string())
        );
    }

    #[test]
    fn keywords_flag_is_comma_delimited() {
        let cli = Cli::parse_from([
            "hnfeed",
            "run",
            "--keywords",
            "AI,Machine Learning",
            "-l",
            "30",
        ]);
        assert_eq!(
            cli.keywords.keywords,
            Some(vec!["AI".to_string(), "Machine Learning".to_string()])
        );
        match cli.command {
            Some(Command::Run(args)) => assert_eq!(args.limit, Some(30)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
