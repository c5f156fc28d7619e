//! sitewatch CLI
//!
//! Local execution entry point. A scheduler (cron, systemd timer) runs
//! `sitewatch check` periodically; the other subcommands manage the feed
//! list and query stored snapshots.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sitewatch::{
    config,
    error::Result,
    pipeline::SiteChecker,
    services::{self, FeedRegistry, HttpFetcher, TelegramNotifier},
    storage::{LocalStorage, SnapshotStore},
};

/// sitewatch - sitemap change monitor
#[derive(Parser, Debug)]
#[command(name = "sitewatch", version, about = "Watches sitemaps for new URLs")]
struct Cli {
    /// Path to storage directory containing config and snapshots
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one site, or every monitored site when no URL is given
    Check {
        /// Sitemap URL to check (default: all monitored sites)
        url: Option<String>,
    },

    /// Summarize stored snapshots for all sites without fetching
    News,

    /// Start monitoring a sitemap URL
    Add { url: String },

    /// Stop monitoring a sitemap URL
    Remove { url: String },

    /// List monitored sitemap URLs
    List,

    /// Validate configuration files
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(&cli.storage_dir);
    log::debug!("Loaded configuration from {}", cli.storage_dir.display());

    let store = Arc::new(LocalStorage::new(&cli.storage_dir));
    let registry = FeedRegistry::new(store.clone());
    let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
    let checker = SiteChecker::new(SnapshotStore::new(store), fetcher);

    let notifier = match (&config.telegram.bot_token, &config.telegram.chat_id) {
        (Some(token), Some(chat)) => Some(TelegramNotifier::new(token, chat)),
        _ => {
            log::info!("No Telegram credentials configured, running in log-only mode");
            None
        }
    };

    match cli.command {
        Command::Check { url: Some(url) } => {
            let outcome = checker.check(&url).await?;
            log::info!("{}", outcome.summary());
            for new_url in &outcome.new_urls {
                log::info!("  new: {new_url}");
            }
            if let Some(bot) = &notifier {
                bot.notify_site_update(&url, &outcome.new_urls).await?;
            }
        }

        Command::Check { url: None } => {
            let report = services::check_all(&checker, &registry, notifier.as_ref()).await?;
            if report.failed > 0 {
                log::warn!("{} site(s) failed this run", report.failed);
            }
        }

        Command::News => {
            let report = services::summarize_all(&checker, &registry, notifier.as_ref()).await?;
            log::info!(
                "{} new URL(s) across {} site(s) from stored snapshots",
                report.new_urls.len(),
                report.checked
            );
            for url in &report.new_urls {
                log::info!("  new: {url}");
            }
        }

        Command::Add { url } => {
            let outcome = services::add_feed(&checker, &registry, &url).await?;
            log::info!("{}", outcome.summary());
        }

        Command::Remove { url } => {
            registry.remove(&url).await?;
            log::info!("Stopped monitoring {url}");
        }

        Command::List => {
            let feeds = registry.list().await?;
            log::info!("Monitored sitemaps ({}):", feeds.len());
            for feed in feeds {
                log::info!("  {feed}");
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Config OK");
        }
    }

    Ok(())
}
