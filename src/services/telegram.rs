// src/services/telegram.rs

//! Telegram notification channel.
//!
//! Sends HTML-formatted messages through the Bot API. Message bodies are
//! built by pure functions so formatting is testable without a network.

use std::collections::HashMap;

use serde_json::json;

use crate::error::{AppError, Result};
use crate::utils::try_host;

/// Maximum URLs listed in a per-site update message.
const UPDATE_URL_CAP: usize = 10;

/// Maximum URLs listed in the cross-site summary.
const SUMMARY_URL_CAP: usize = 20;

/// Bot API client bound to one target chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: format!("https://api.telegram.org/bot{token}"),
            chat_id: chat_id.to_string(),
        }
    }

    /// Send an HTML message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/sendMessage", self.api_base);
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notify(format!(
                "Telegram API error: {status}"
            )));
        }
        Ok(())
    }

    /// Notify the chat about one site's check result.
    pub async fn notify_site_update(&self, site_url: &str, new_urls: &[String]) -> Result<()> {
        self.send_message(&format_update_message(site_url, new_urls))
            .await
    }

    /// Send the cross-site domain summary. Nothing is sent when there are
    /// no new URLs at all.
    pub async fn notify_summary(&self, new_urls: &[String]) -> Result<()> {
        match format_summary_message(new_urls) {
            Some(message) => self.send_message(&message).await,
            None => Ok(()),
        }
    }
}

/// Per-site update message: site, count, and up to ten of the new URLs.
pub fn format_update_message(site_url: &str, new_urls: &[String]) -> String {
    let mut message = format!("<b>Site update</b>\n\n<b>Site:</b> {site_url}\n");

    if new_urls.is_empty() {
        message.push_str("<b>No new URLs</b>");
        return message;
    }

    message.push_str(&format!("<b>New URLs:</b> {}\n\n", new_urls.len()));
    for url in new_urls.iter().take(UPDATE_URL_CAP) {
        message.push_str(&format!("- {url}\n"));
    }
    if new_urls.len() > UPDATE_URL_CAP {
        message.push_str(&format!(
            "\n... and {} more",
            new_urls.len() - UPDATE_URL_CAP
        ));
    }
    message
}

/// Cross-site summary: total count, per-domain histogram (descending),
/// and up to twenty sample URLs. `None` when there is nothing to report.
pub fn format_summary_message(new_urls: &[String]) -> Option<String> {
    if new_urls.is_empty() {
        return None;
    }

    let mut message = format!(
        "<b>New content summary</b>\n\n<b>Total new URLs:</b> {}\n\n",
        new_urls.len()
    );

    let mut domains: HashMap<String, usize> = HashMap::new();
    for url in new_urls {
        if let Some(host) = try_host(url) {
            *domains.entry(host).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = domains.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    message.push_str("<b>By domain:</b>\n");
    for (domain, count) in counts {
        message.push_str(&format!("- {domain}: {count} URL(s)\n"));
    }

    message.push_str("\n<b>Sample URLs:</b>\n");
    for url in new_urls.iter().take(SUMMARY_URL_CAP) {
        message.push_str(&format!("- {url}\n"));
    }
    if new_urls.len() > SUMMARY_URL_CAP {
        message.push_str(&format!(
            "\n... and {} more",
            new_urls.len() - SUMMARY_URL_CAP
        ));
    }

    Some(message)
}

/// Help text listing the available commands.
pub fn help_text() -> &'static str {
    "<b>Sitemap watcher</b>\n\n\
     <b>Commands:</b>\n\
     check [URL] - check one site, or all monitored sites\n\
     news - summarize stored snapshots without fetching\n\
     add URL - monitor a new sitemap\n\
     remove URL - stop monitoring a sitemap\n\
     list - show monitored sitemaps"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize, host: &str) -> Vec<String> {
        (0..n).map(|i| format!("https://{host}/page-{i}")).collect()
    }

    #[test]
    fn test_update_message_no_new_urls() {
        let message = format_update_message("https://x.com/sitemap.xml", &[]);
        assert!(message.contains("No new URLs"));
        assert!(message.contains("https://x.com/sitemap.xml"));
    }

    #[test]
    fn test_update_message_caps_at_ten() {
        let message = format_update_message("https://x.com/sitemap.xml", &urls(13, "x.com"));
        assert!(message.contains("<b>New URLs:</b> 13"));
        assert!(message.contains("page-9"));
        assert!(!message.contains("page-10\n"));
        assert!(message.contains("... and 3 more"));
    }

    #[test]
    fn test_summary_empty_is_none() {
        assert!(format_summary_message(&[]).is_none());
    }

    #[test]
    fn test_summary_domain_histogram_sorted_by_count() {
        let mut all = urls(3, "big.com");
        all.extend(urls(1, "small.com"));

        let message = format_summary_message(&all).unwrap();
        let big = message.find("big.com: 3").unwrap();
        let small = message.find("small.com: 1").unwrap();
        assert!(big < small);
    }

    #[test]
    fn test_summary_caps_at_twenty() {
        let message = format_summary_message(&urls(25, "x.com")).unwrap();
        assert!(message.contains("<b>Total new URLs:</b> 25"));
        assert!(message.contains("... and 5 more"));
    }

    #[test]
    fn test_summary_skips_unparseable_urls() {
        let all = vec!["garbage".to_string(), "https://x.com/a".to_string()];
        let message = format_summary_message(&all).unwrap();
        assert!(message.contains("x.com: 1"));
    }
}
