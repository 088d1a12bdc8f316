use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{NewsItem, Topic};

pub const EMAIL_SUBJECT: &str = "Daily News Digest: Tech + AI + Jobs + Software";
const EMPTY_SECTION: &str = "- No relevant stories found today.";

#[derive(Debug, Clone)]
pub struct Digest {
    pub generated_at: DateTime<Utc>,
    pub sections: HashMap<Topic, Vec<NewsItem>>,
}

impl Digest {
    /// Group items by topic, keeping their order within each topic
    pub fn from_items(items: &[NewsItem], generated_at: DateTime<Utc>) -> Self {
        let mut sections: HashMap<Topic, Vec<NewsItem>> = HashMap::new();
        for item in items {
            sections.entry(item.topic).or_default().push(item.clone());
        }

        Self {
            generated_at,
            sections,
        }
    }

    pub fn now(items: &[NewsItem]) -> Self {
        Self::from_items(items, Utc::now())
    }

    pub fn item_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Format:
    /// "🗞️ Daily News Digest ({date} UTC)", then one section per topic
    /// with "- {title} ({source})" and an indented link per story
    pub fn format(&self) -> String {
        let mut lines = vec![
            format!(
                "🗞️ Daily News Digest ({})",
                self.generated_at.format("%Y-%m-%d %H:%M UTC")
            ),
            String::new(),
        ];

        for topic in Topic::ALL {
            lines.push(topic.heading().to_string());

            match self.sections.get(&topic) {
                Some(stories) if !stories.is_empty() => {
                    for story in stories {
                        lines.push(format!("- {} ({})", story.title, story.source));
                        lines.push(format!("  {}", story.link));
                    }
                }
                _ => lines.push(EMPTY_SECTION.to_string()),
            }

            lines.push(String::new());
        }

        lines.join("\n")
    }
}
