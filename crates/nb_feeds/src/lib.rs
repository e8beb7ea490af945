pub mod fetcher;
pub mod sources;
pub mod writer;

pub use fetcher::{fetch_all, fetch_feed, filter_recent};
pub use sources::DEFAULT_FEEDS;
pub use writer::write_knowledge_file;

pub mod prelude {
    pub use super::fetcher::{fetch_all, fetch_feed};
    pub use super::writer::write_knowledge_file;
    pub use nb_core::{Error, NewsItem, Result, TranslatedNewsItem};
}
