use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nb_core::{Error, FileHandle, FileStore, IndexHandle, Result, UploadSource, VectorIndex};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http::expect_success;
use crate::RemoteConfig;

const FALLBACK_FILE_NAME: &str = "knowledge.txt";

#[derive(Deserialize)]
struct UploadResponse {
    id: String,
}

#[derive(Serialize)]
struct CreateIndexRequest {
    name: String,
}

#[derive(Deserialize)]
struct CreateIndexResponse {
    id: String,
}

#[derive(Serialize)]
struct AttachFileRequest {
    file_id: String,
}

/// Remote file store and vector index backed by the OpenAI file and
/// vector-store endpoints.
pub struct OpenAiBackend {
    client: Arc<Client>,
    config: RemoteConfig,
}

impl OpenAiBackend {
    pub fn new(client: Arc<Client>, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.api_key)
    }

    /// Resolve an upload source to (file name, content bytes). URL sources
    /// are fetched and their bytes re-uploaded under the URL's last path
    /// segment; path sources read the local file.
    async fn read_source(&self, source: &UploadSource) -> Result<(String, Vec<u8>)> {
        match source {
            UploadSource::Path(path) => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(FALLBACK_FILE_NAME)
                    .to_string();
                Ok((name, tokio::fs::read(path).await?))
            }
            UploadSource::Url(raw) => {
                let parsed = url::Url::parse(raw)
                    .map_err(|e| Error::Storage(format!("invalid upload URL {}: {}", raw, e)))?;
                let name = parsed
                    .path_segments()
                    .and_then(|segments| segments.last())
                    .filter(|segment| !segment.is_empty())
                    .unwrap_or(FALLBACK_FILE_NAME)
                    .to_string();
                let response = self.client.get(parsed).send().await?;
                let bytes = expect_success(response).await?.bytes().await?;
                Ok((name, bytes.to_vec()))
            }
        }
    }
}

impl fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl FileStore for OpenAiBackend {
    async fn upload(&self, source: &UploadSource) -> Result<FileHandle> {
        let (name, bytes) = self.read_source(source).await?;
        let form = Form::new()
            .text("purpose", "assistants")
            .part("file", Part::bytes(bytes).file_name(name));

        let response = self
            .client
            .post(format!("{}/files", self.config.base_url))
            .header("Authorization", self.bearer())
            .multipart(form)
            .send()
            .await?;
        let response = expect_success(response).await?.json::<UploadResponse>().await?;
        info!("📤 Uploaded file id: {}", response.id);
        Ok(FileHandle(response.id))
    }
}

#[async_trait]
impl VectorIndex for OpenAiBackend {
    async fn create_index(&self, name: &str) -> Result<IndexHandle> {
        let response = self
            .client
            .post(format!("{}/vector_stores", self.config.base_url))
            .header("Authorization", self.bearer())
            .json(&CreateIndexRequest {
                name: name.to_string(),
            })
            .send()
            .await?;
        let response = expect_success(response)
            .await?
            .json::<CreateIndexResponse>()
            .await?;
        info!("🧠 Vector store id: {}", response.id);
        Ok(IndexHandle(response.id))
    }

    async fn attach_file(&self, index: &IndexHandle, file: &FileHandle) -> Result<()> {
        // Ingestion continues server-side after this returns; querying does
        // not wait for it.
        let response = self
            .client
            .post(format!("{}/vector_stores/{}/files", self.config.base_url, index.0))
            .header("Authorization", self.bearer())
            .json(&AttachFileRequest {
                file_id: file.0.clone(),
            })
            .send()
            .await?;
        expect_success(response).await?;
        info!("🔗 File {} attached to vector store {}", file, index);
        Ok(())
    }
}
