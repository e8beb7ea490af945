use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry pulled from an RSS feed, kept only when it was published
/// within the recency window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedNewsItem {
    pub item: NewsItem,
    pub translated_title: String,
}

/// Identifier handed back by the remote file store after an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHandle(pub String);

/// Identifier of a remote vector index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHandle(pub String);

impl std::fmt::Display for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for IndexHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
