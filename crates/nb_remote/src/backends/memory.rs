use async_trait::async_trait;
use nb_core::{Error, FileHandle, FileStore, IndexHandle, Result, UploadSource, VectorIndex};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    uploads: Vec<(String, Vec<u8>)>,
    indexes: Vec<(String, String)>,
    attachments: Vec<(String, String)>,
}

/// In-process stand-in for the remote backend. Hands out synthetic ids and
/// records every upload and attachment so tests can assert pipeline wiring.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    state: RwLock<MemoryState>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn uploaded_bytes(&self, file: &FileHandle) -> Option<Vec<u8>> {
        let state = self.state.read().await;
        file.0
            .strip_prefix("file-")
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| state.uploads.get(n).map(|(_, bytes)| bytes.clone()))
    }

    pub async fn attachments(&self) -> Vec<(String, String)> {
        self.state.read().await.attachments.clone()
    }
}

#[async_trait]
impl FileStore for MemoryBackend {
    async fn upload(&self, source: &UploadSource) -> Result<FileHandle> {
        let (name, bytes) = match source {
            UploadSource::Path(path) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("knowledge.txt")
                    .to_string();
                (name, std::fs::read(path)?)
            }
            UploadSource::Url(url) => {
                return Err(Error::Storage(format!(
                    "memory backend cannot fetch URLs: {}",
                    url
                )))
            }
        };
        let mut state = self.state.write().await;
        state.uploads.push((name, bytes));
        Ok(FileHandle(format!("file-{}", state.uploads.len())))
    }
}

#[async_trait]
impl VectorIndex for MemoryBackend {
    async fn create_index(&self, name: &str) -> Result<IndexHandle> {
        let mut state = self.state.write().await;
        let id = format!("vs-{}", state.indexes.len() + 1);
        state.indexes.push((id.clone(), name.to_string()));
        Ok(IndexHandle(id))
    }

    async fn attach_file(&self, index: &IndexHandle, file: &FileHandle) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.indexes.iter().any(|(id, _)| *id == index.0) {
            return Err(Error::Storage(format!("unknown vector index: {}", index)));
        }
        state.attachments.push((index.0.clone(), file.0.clone()));
        Ok(())
    }
}
