// src/pipeline/extract.rs

//! `<loc>` extraction from raw sitemap text.
//!
//! Deliberately not an XML parser: sitemaps in the wild are frequently
//! truncated, mis-encoded, or wrapped in index files, and the only thing
//! needed downstream is the set of location strings. A non-greedy scan
//! finds every `<loc>...</loc>` pair; anything unparseable simply yields
//! no matches.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

fn loc_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<loc>(.*?)</loc>").expect("valid loc regex"))
}

/// Extract location URLs from sitemap text.
///
/// Duplicates collapse to one entry; first-seen order is preserved. No
/// normalization is applied, so entries differing only by whitespace or
/// case stay distinct. Never fails: malformed input returns an empty vec.
pub fn extract_urls(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for caps in loc_pattern().captures_iter(content) {
        if let Some(loc) = caps.get(1) {
            let loc = loc.as_str();
            if !loc.is_empty() && seen.insert(loc.to_string()) {
                urls.push(loc.to_string());
            }
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_standard_sitemap() {
        let content = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/a</loc><lastmod>2026-08-01</lastmod></url>
  <url><loc>https://example.com/b</loc></url>
</urlset>"#;

        assert_eq!(
            extract_urls(content),
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = "<loc>https://x/1</loc><loc>https://x/2</loc><loc>https://x/1</loc>";
        assert_eq!(extract_urls(content), vec!["https://x/1", "https://x/2"]);
    }

    #[test]
    fn test_malformed_input_yields_empty() {
        assert!(extract_urls("not xml at all").is_empty());
        assert!(extract_urls("<loc>unterminated").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn test_no_normalization() {
        let content = "<loc>https://x/page</loc><loc>https://x/page </loc><loc>https://X/page</loc>";
        assert_eq!(extract_urls(content).len(), 3);
    }

    #[test]
    fn test_sitemap_index_entries_extracted_as_plain_urls() {
        // Index files are not traversed; their entries count as locations.
        let content = r#"<sitemapindex>
  <sitemap><loc>https://example.com/sitemap-1.xml</loc></sitemap>
  <sitemap><loc>https://example.com/sitemap-2.xml</loc></sitemap>
</sitemapindex>"#;

        assert_eq!(
            extract_urls(content),
            vec![
                "https://example.com/sitemap-1.xml",
                "https://example.com/sitemap-2.xml"
            ]
        );
    }
}
