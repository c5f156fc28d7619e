// src/models/check.rs

use serde::Serialize;

/// How a site check was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckStatus {
    /// Sitemap was downloaded and the snapshot slots rotated.
    Fetched,
    /// First fetch for this hostname; nothing to diff against yet.
    FirstFetch,
    /// Already fetched today; diff computed from stored snapshots only.
    SkippedToday,
}

/// Result of checking one monitored site.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// The sitemap URL that was checked
    pub url: String,
    /// Hostname key the snapshots are stored under
    pub host: String,
    /// URLs present in the newest snapshot but not the previous one
    pub new_urls: Vec<String>,
    /// How the check was satisfied
    pub status: CheckStatus,
}

impl CheckOutcome {
    /// One-line human summary for logs and command replies.
    pub fn summary(&self) -> String {
        match self.status {
            CheckStatus::Fetched => {
                format!("{}: {} new URL(s)", self.host, self.new_urls.len())
            }
            CheckStatus::FirstFetch => {
                format!("{}: first snapshot stored, nothing to compare yet", self.host)
            }
            CheckStatus::SkippedToday => format!(
                "{}: already fetched today, {} new URL(s) from stored snapshots",
                self.host,
                self.new_urls.len()
            ),
        }
    }
}
