use std::cmp::Reverse;
use std::collections::HashSet;

use crate::domain::NewsItem;

/// Number of keywords contained in the item's title and summary.
/// Matching is case-insensitive substring containment, so "ai" also counts inside "main".
pub fn relevance(item: &NewsItem, keywords: &[&str]) -> usize {
    let haystack = item.haystack();
    keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count()
}

/// Drop linkless items and repeated links, keeping the first occurrence
pub fn dedupe(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen_links: HashSet<String> = HashSet::new();

    items
        .into_iter()
        .filter(|item| !item.link.is_empty() && seen_links.insert(item.link.clone()))
        .collect()
}

/// Dedupe one topic's items and order them best-first by
/// (relevance, published), both descending. Ties keep input order.
pub fn rank(items: Vec<NewsItem>, keywords: &[&str]) -> Vec<NewsItem> {
    let mut scored: Vec<(usize, NewsItem)> = dedupe(items)
        .into_iter()
        .map(|item| (relevance(&item, keywords), item))
        .collect();

    scored.sort_by_key(|(score, item)| Reverse((*score, item.published)));

    scored.into_iter().map(|(_, item)| item).collect()
}
