// src/utils/mod.rs

//! Utility functions and helpers.

use url::Url;

use crate::error::{AppError, Result};

/// Hostname of a sitemap URL, used as the per-site storage key prefix.
pub fn host_key(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)?;
    url.host_str()
        .map(|h| h.to_string())
        .ok_or_else(|| AppError::validation(format!("URL has no host: {url_str}")))
}

/// Hostname of a URL, `None` when unparseable. Used for summary grouping
/// where a bad entry should be skipped rather than fail the message.
pub fn try_host(url_str: &str) -> Option<String> {
    Url::parse(url_str)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_key() {
        assert_eq!(
            host_key("https://example.com/sitemap.xml").unwrap(),
            "example.com"
        );
        assert_eq!(
            host_key("https://sub.example.com:8080/sitemap.xml").unwrap(),
            "sub.example.com"
        );
    }

    #[test]
    fn test_host_key_rejects_invalid() {
        assert!(host_key("not a url").is_err());
        assert!(host_key("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_try_host() {
        assert_eq!(try_host("https://example.com/x"), Some("example.com".into()));
        assert_eq!(try_host("garbage"), None);
    }
}
