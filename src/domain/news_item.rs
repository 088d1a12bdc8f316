use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::Topic;

/// One entry as the feed delivered it, before any cleanup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
}

impl RawEntry {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            link: Some(link.to_string()),
            ..Default::default()
        }
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub published: DateTime<FixedOffset>,
    pub topic: Topic,
}

impl NewsItem {
    /// Text that keyword relevance is matched against
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.summary).to_lowercase()
    }
}
