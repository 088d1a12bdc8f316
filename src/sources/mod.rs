pub mod traits;
pub mod rss_atom;
pub mod registry;

pub use traits::FeedRetriever;
pub use rss_atom::RssAtomRetriever;
pub use registry::{FeedSource, TopicRegistry, TopicSources};
