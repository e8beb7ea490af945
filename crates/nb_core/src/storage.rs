use std::path::PathBuf;

use async_trait::async_trait;

use crate::types::{FileHandle, IndexHandle};
use crate::Result;

/// Where the knowledge file comes from. A URL source is fetched and its
/// bytes re-uploaded; a path source reads the local file.
#[derive(Debug, Clone)]
pub enum UploadSource {
    Path(PathBuf),
    Url(String),
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Upload a knowledge file, returning the remote identifier.
    async fn upload(&self, source: &UploadSource) -> Result<FileHandle>;
}

#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create a new named vector index. Every call creates a fresh index.
    async fn create_index(&self, name: &str) -> Result<IndexHandle>;

    /// Attach an uploaded file to an index. Ingestion happens asynchronously
    /// server-side; this returns as soon as the attachment is acknowledged.
    async fn attach_file(&self, index: &IndexHandle, file: &FileHandle) -> Result<()>;
}
