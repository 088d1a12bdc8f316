use std::time::Duration;

use feed_rs::model::{Entry, Link};
use feed_rs::parser;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::RawEntry;
use crate::errors::{DigestError, DigestResult};
use crate::sources::traits::FeedRetriever;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RssAtomRetriever {
    client: Client,
}

impl RssAtomRetriever {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> DigestResult<feed_rs::model::Feed> {
        Url::parse(url).map_err(|e| DigestError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> DigestResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| DigestError::FeedParse(e.to_string()))
    }

    /// Parse raw entries from feed bytes, failing on malformed input
    pub fn entries_from_bytes(bytes: &[u8]) -> DigestResult<Vec<RawEntry>> {
        let parsed = Self::parse_bytes(bytes)?;
        Ok(parsed.entries.into_iter().map(Self::raw_entry).collect())
    }

    fn raw_entry(entry: Entry) -> RawEntry {
        let title = entry.title.map(|t| t.content);
        let link = Self::primary_link(&entry.links);

        let summary = entry
            .summary
            .map(|s| s.content)
            .or_else(|| entry.content.and_then(|c| c.body));

        // Atom entries often carry only <updated>; use it rather than
        // letting the story fall back to "now"
        let published = entry
            .published
            .or(entry.updated)
            .map(|dt| dt.to_rfc3339());

        RawEntry {
            title,
            link,
            summary,
            published,
        }
    }

    /// Prefer the alternate link (the article page) over enclosures and self links
    fn primary_link(links: &[Link]) -> Option<String> {
        links
            .iter()
            .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
            .or_else(|| links.first())
            .map(|l| l.href.clone())
    }
}

impl Default for RssAtomRetriever {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedRetriever for RssAtomRetriever {
    fn retrieve(&self, url: &str) -> Vec<RawEntry> {
        match self.fetch_and_parse(url) {
            Ok(feed) => {
                let entries: Vec<RawEntry> =
                    feed.entries.into_iter().map(Self::raw_entry).collect();
                tracing::debug!(url = %url, entries = entries.len(), "Feed retrieved");
                entries
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Feed retrieval failed, skipping source");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sample RSS feed (based on Rust Blog format)
    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Rust Blog</title>
    <link>https://blog.rust-lang.org/</link>
    <description>Empowering everyone to build reliable and efficient software.</description>
    <item>
      <title>Announcing Rust 1.75.0</title>
      <link>https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html</link>
      <description><![CDATA[<p>The Rust team is happy to announce a new version of Rust, 1.75.0.</p>]]></description>
      <pubDate>Thu, 28 Dec 2023 00:00:00 +0000</pubDate>
      <guid>https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html</guid>
    </item>
    <item>
      <description>An item with neither title nor link</description>
    </item>
  </channel>
</rss>"#;

    // Sample Atom feed
    const SAMPLE_ATOM: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Tech Blog</title>
  <link href="https://example.com/"/>
  <id>https://example.com/feed.atom</id>
  <updated>2024-01-15T12:00:00Z</updated>
  <entry>
    <title>Understanding WebAssembly</title>
    <link rel="enclosure" href="https://example.com/media/wasm.mp3"/>
    <link rel="alternate" href="https://example.com/posts/wasm-intro"/>
    <id>https://example.com/posts/wasm-intro</id>
    <updated>2024-01-15T12:00:00Z</updated>
    <content type="html"><![CDATA[<p>WebAssembly (Wasm) is a binary instruction format...</p>]]></content>
  </entry>
</feed>"#;

    #[test]
    fn test_rss_entries_extracted() {
        let entries = RssAtomRetriever::entries_from_bytes(SAMPLE_RSS).unwrap();

        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.title.as_deref(), Some("Announcing Rust 1.75.0"));
        assert_eq!(
            first.link.as_deref(),
            Some("https://blog.rust-lang.org/2023/12/28/Rust-1.75.0.html")
        );
        assert!(first.summary.as_deref().unwrap().contains("1.75.0"));
        assert!(first.published.as_deref().unwrap().starts_with("2023-12-28T00:00:00"));
    }

    #[test]
    fn test_rss_entry_without_fields() {
        let entries = RssAtomRetriever::entries_from_bytes(SAMPLE_RSS).unwrap();

        let bare = &entries[1];
        assert!(bare.title.is_none());
        assert!(bare.link.is_none());
        assert!(bare.published.is_none());
    }

    #[test]
    fn test_atom_prefers_alternate_link_and_content_fallback() {
        let entries = RssAtomRetriever::entries_from_bytes(SAMPLE_ATOM).unwrap();

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.link.as_deref(), Some("https://example.com/posts/wasm-intro"));
        assert!(entry.summary.as_deref().unwrap().contains("WebAssembly"));
        // No <published>, so the updated timestamp is used
        assert!(entry.published.as_deref().unwrap().starts_with("2024-01-15T12:00:00"));
    }

    #[test]
    fn test_malformed_bytes_error() {
        let result = RssAtomRetriever::entries_from_bytes(b"<html><body>not a feed</body></html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_url_yields_no_entries() {
        let retriever = RssAtomRetriever::new();
        assert!(retriever.retrieve("not a url").is_empty());
    }

    #[test]
    fn test_unreachable_host_yields_no_entries() {
        let retriever = RssAtomRetriever::with_timeout(Duration::from_secs(2));
        assert!(retriever.retrieve("http://127.0.0.1:9/feed.xml").is_empty());
    }
}
