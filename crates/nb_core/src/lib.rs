pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::Error;
pub use models::{Answer, QueryEngine, Translator};
pub use storage::{FileStore, UploadSource, VectorIndex};
pub use types::{FileHandle, IndexHandle, NewsItem, TranslatedNewsItem};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::models::{Answer, QueryEngine, Translator};
    pub use super::storage::{FileStore, UploadSource, VectorIndex};
    pub use super::types::{FileHandle, IndexHandle, NewsItem, TranslatedNewsItem};
    pub use super::{Error, Result};
}
