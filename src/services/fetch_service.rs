use std::cmp::Reverse;
use std::thread;

use crate::domain::{NewsItem, RawEntry, Topic};
use crate::services::normalizer::normalize;
use crate::services::ranking::rank;
use crate::sources::registry::FeedSource;
use crate::sources::{FeedRetriever, TopicRegistry};

pub struct NewsFetcher<R: FeedRetriever> {
    retriever: R,
    registry: TopicRegistry,
}

impl<R: FeedRetriever> NewsFetcher<R> {
    pub fn new(retriever: R) -> Self {
        Self::with_registry(retriever, TopicRegistry::new())
    }

    pub fn with_registry(retriever: R, registry: TopicRegistry) -> Self {
        Self {
            retriever,
            registry,
        }
    }

    pub fn registry(&self) -> &TopicRegistry {
        &self.registry
    }

    pub fn retriever(&self) -> &R {
        &self.retriever
    }

    /// Fetch every topic, keep its best `per_topic_limit` stories and
    /// return them newest first across all topics.
    ///
    /// Relevance only decides which stories survive the per-topic cut;
    /// the returned order is by publication time alone.
    pub fn fetch(&self, per_topic_limit: usize) -> Vec<NewsItem> {
        let mut all_items: Vec<NewsItem> = Vec::new();

        for topic in Topic::ALL {
            let ranked = self.fetch_topic(topic);
            let kept = ranked.len().min(per_topic_limit);

            tracing::debug!(topic = %topic, candidates = ranked.len(), kept, "Ranked topic");

            all_items.extend(ranked.into_iter().take(per_topic_limit));
        }

        all_items.sort_by_key(|item| Reverse(item.published));

        tracing::info!(items = all_items.len(), per_topic_limit, "Fetch complete");
        all_items
    }

    /// Full ranked list for one topic, before any truncation
    pub fn fetch_topic(&self, topic: Topic) -> Vec<NewsItem> {
        let sources = self.registry.sources(topic);

        let items: Vec<NewsItem> = self
            .retrieve_all(sources)
            .into_iter()
            .zip(sources)
            .flat_map(|(entries, source)| {
                entries
                    .into_iter()
                    .map(move |entry| normalize(entry, source.label, topic))
            })
            .collect();

        rank(items, self.registry.keywords(topic))
    }

    /// Retrieve every source concurrently. The result is indexed like
    /// `sources`, whatever order the requests finish in.
    fn retrieve_all(&self, sources: &[FeedSource]) -> Vec<Vec<RawEntry>> {
        thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|source| scope.spawn(move || self.retriever.retrieve(source.url)))
                .collect();

            handles
                .into_iter()
                .zip(sources)
                .map(|(handle, source)| {
                    handle.join().unwrap_or_else(|_| {
                        tracing::warn!(source = %source.label, "Feed retrieval panicked, skipping source");
                        Vec::new()
                    })
                })
                .collect()
        })
    }
}
