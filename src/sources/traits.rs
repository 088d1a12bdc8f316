use crate::domain::RawEntry;

#[cfg_attr(test, mockall::automock)]
pub trait FeedRetriever: Send + Sync {
    /// Fetch and parse one feed URL.
    /// Network and parse failures yield an empty list, never an error.
    fn retrieve(&self, url: &str) -> Vec<RawEntry>;
}
