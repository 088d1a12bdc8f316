pub mod topic;
pub mod news_item;
pub mod digest;

pub use topic::Topic;
pub use news_item::{NewsItem, RawEntry};
pub use digest::Digest;
