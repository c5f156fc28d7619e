// src/services/run.rs

//! Scheduled and on-demand passes over the monitored feed list.
//!
//! Sites are processed strictly sequentially, one fetch at a time. A
//! failing site is logged and skipped; the run continues with the next.

use crate::error::Result;
use crate::models::CheckOutcome;
use crate::pipeline::SiteChecker;
use crate::services::feeds::FeedRegistry;
use crate::services::telegram::TelegramNotifier;

/// Outcome of one pass over the feed list.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Sites checked successfully
    pub checked: usize,
    /// Sites whose check failed
    pub failed: usize,
    /// Every new URL found across all sites, in check order
    pub new_urls: Vec<String>,
}

/// Check every monitored site, notify per site, and finish with one
/// cross-site summary when anything new appeared.
pub async fn check_all(
    checker: &SiteChecker,
    registry: &FeedRegistry,
    notifier: Option<&TelegramNotifier>,
) -> Result<RunReport> {
    let feeds = registry.list().await?;
    log::info!("Checking {} monitored site(s)", feeds.len());

    let mut report = RunReport::default();

    for url in &feeds {
        match checker.check(url).await {
            Ok(outcome) => {
                report.checked += 1;
                log::info!("{}", outcome.summary());
                notify_site(notifier, url, &outcome).await;
                report.new_urls.extend(outcome.new_urls);
            }
            Err(e) => {
                report.failed += 1;
                log::warn!("Check failed for {url}: {e}");
            }
        }
    }

    send_summary(notifier, &report.new_urls).await;
    log::info!(
        "Run complete: {} checked, {} failed, {} new URL(s)",
        report.checked,
        report.failed,
        report.new_urls.len()
    );
    Ok(report)
}

/// Summarize stored snapshots for every monitored site without fetching.
pub async fn summarize_all(
    checker: &SiteChecker,
    registry: &FeedRegistry,
    notifier: Option<&TelegramNotifier>,
) -> Result<RunReport> {
    let feeds = registry.list().await?;
    let mut report = RunReport::default();

    for url in &feeds {
        match checker.compare_stored(url).await {
            Ok(new_urls) => {
                report.checked += 1;
                report.new_urls.extend(new_urls);
            }
            Err(e) => {
                report.failed += 1;
                log::warn!("Snapshot comparison failed for {url}: {e}");
            }
        }
    }

    send_summary(notifier, &report.new_urls).await;
    Ok(report)
}

/// Register a new feed, performing an initial check first so only
/// reachable sitemaps enter the list.
pub async fn add_feed(
    checker: &SiteChecker,
    registry: &FeedRegistry,
    url: &str,
) -> Result<CheckOutcome> {
    let outcome = checker.check(url).await?;

    if registry.add(url).await? {
        log::info!("Now monitoring {url}");
    } else {
        log::info!("Already monitoring {url}, snapshot refreshed");
    }
    Ok(outcome)
}

async fn notify_site(notifier: Option<&TelegramNotifier>, url: &str, outcome: &CheckOutcome) {
    if let Some(bot) = notifier {
        if let Err(e) = bot.notify_site_update(url, &outcome.new_urls).await {
            log::warn!("Notification failed for {url}: {e}");
        }
    }
}

async fn send_summary(notifier: Option<&TelegramNotifier>, new_urls: &[String]) {
    if let Some(bot) = notifier {
        if let Err(e) = bot.notify_summary(new_urls).await {
            log::warn!("Summary notification failed: {e}");
        }
    }
}
