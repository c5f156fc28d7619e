// src/pipeline/diff.rs

//! Diff calculation between two sitemap payloads.
//!
//! New URLs are those present in the subject payload but absent from the
//! baseline. Output order follows the subject's first-seen order so
//! notifications read in document order.

use std::collections::HashSet;

use crate::pipeline::extract::extract_urls;

/// Compute the URLs that appear in `subject` but not in `baseline`.
///
/// Either side may be empty or malformed; a missing baseline means every
/// subject URL is new.
pub fn diff_sitemaps(subject: &str, baseline: &str) -> Vec<String> {
    let baseline_urls: HashSet<String> = extract_urls(baseline).into_iter().collect();

    extract_urls(subject)
        .into_iter()
        .filter(|url| !baseline_urls.contains(url))
        .collect()
}
