use crate::domain::Topic;

/// A named feed origin contributing entries to one topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSource {
    pub label: &'static str,
    pub url: &'static str,
}

impl FeedSource {
    pub const fn new(label: &'static str, url: &'static str) -> Self {
        Self { label, url }
    }
}

/// Sources (in retrieval order) and relevance keywords of one topic
#[derive(Debug, Clone, Copy)]
pub struct TopicSources {
    pub sources: &'static [FeedSource],
    pub keywords: &'static [&'static str],
}

const TECH_SOURCES: &[FeedSource] = &[
    FeedSource::new("TechCrunch", "https://techcrunch.com/feed/"),
    FeedSource::new("The Verge", "https://www.theverge.com/rss/index.xml"),
    FeedSource::new(
        "Google News - Technology",
        "https://news.google.com/rss/headlines/section/topic/TECHNOLOGY",
    ),
];

const AI_SOURCES: &[FeedSource] = &[
    FeedSource::new(
        "Google News - Artificial Intelligence",
        "https://news.google.com/rss/search?q=artificial+intelligence+OR+machine+learning+OR+LLM+when:1d&hl=en-US&gl=US&ceid=US:en",
    ),
    FeedSource::new(
        "MIT Tech Review - AI",
        "https://www.technologyreview.com/topic/artificial-intelligence/feed",
    ),
];

const JOBS_SOURCES: &[FeedSource] = &[
    FeedSource::new(
        "Google News - Tech Jobs",
        "https://news.google.com/rss/search?q=tech+jobs+OR+hiring+OR+layoffs+when:1d&hl=en-US&gl=US&ceid=US:en",
    ),
    FeedSource::new(
        "We Work Remotely",
        "https://weworkremotely.com/categories/remote-programming-jobs.rss",
    ),
];

const SOFTWARE_SOURCES: &[FeedSource] = &[
    FeedSource::new(
        "Google News - Software Releases",
        "https://news.google.com/rss/search?q=new+software+release+OR+app+launch+OR+open+source+release+when:1d&hl=en-US&gl=US&ceid=US:en",
    ),
    FeedSource::new("GitHub Blog", "https://github.blog/feed/"),
];

const TECH_KEYWORDS: &[&str] = &["technology", "startup", "cloud", "cybersecurity", "chip"];
const AI_KEYWORDS: &[&str] = &["ai", "artificial intelligence", "llm", "agent", "model"];
const JOBS_KEYWORDS: &[&str] = &["hiring", "job", "layoff", "career", "remote"];
const SOFTWARE_KEYWORDS: &[&str] = &["release", "launch", "version", "open source", "app"];

fn curated(topic: Topic) -> TopicSources {
    match topic {
        Topic::Tech => TopicSources {
            sources: TECH_SOURCES,
            keywords: TECH_KEYWORDS,
        },
        Topic::Ai => TopicSources {
            sources: AI_SOURCES,
            keywords: AI_KEYWORDS,
        },
        Topic::Jobs => TopicSources {
            sources: JOBS_SOURCES,
            keywords: JOBS_KEYWORDS,
        },
        Topic::Software => TopicSources {
            sources: SOFTWARE_SOURCES,
            keywords: SOFTWARE_KEYWORDS,
        },
    }
}

/// Immutable topic → (sources, keywords) tables, fixed at startup
#[derive(Debug, Clone)]
pub struct TopicRegistry {
    entries: [TopicSources; 4],
}

impl TopicRegistry {
    /// The curated feed list shipped with the digest
    pub fn new() -> Self {
        Self::from_fn(curated)
    }

    /// Build a registry from a per-topic table, mostly for tests
    pub fn from_fn<F>(table: F) -> Self
    where
        F: Fn(Topic) -> TopicSources,
    {
        Self {
            entries: Topic::ALL.map(table),
        }
    }

    fn index(topic: Topic) -> usize {
        match topic {
            Topic::Tech => 0,
            Topic::Ai => 1,
            Topic::Jobs => 2,
            Topic::Software => 3,
        }
    }

    pub fn get(&self, topic: Topic) -> &TopicSources {
        &self.entries[Self::index(topic)]
    }

    pub fn sources(&self, topic: Topic) -> &'static [FeedSource] {
        self.get(topic).sources
    }

    pub fn keywords(&self, topic: Topic) -> &'static [&'static str] {
        self.get(topic).keywords
    }

    pub fn source_count(&self) -> usize {
        self.entries.iter().map(|e| e.sources.len()).sum()
    }
}

impl Default for TopicRegistry {
    fn default() -> Self {
        Self::new()
    }
}
