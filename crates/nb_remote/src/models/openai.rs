use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use nb_core::{Answer, Error, IndexHandle, QueryEngine, Result, Translator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::{extract_answer, QueryResponse};
use crate::http::expect_success;
use crate::RemoteConfig;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Translates news titles through the chat-completions endpoint.
pub struct OpenAiTranslator {
    client: Arc<Client>,
    config: RemoteConfig,
    target_language: String,
}

impl OpenAiTranslator {
    pub fn new(client: Arc<Client>, config: RemoteConfig, target_language: String) -> Self {
        Self {
            client,
            config,
            target_language,
        }
    }
}

impl fmt::Debug for OpenAiTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiTranslator")
            .field("config", &self.config)
            .field("target_language", &self.target_language)
            .finish()
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: format!(
                        "You are a professional translator. Please translate the following news title into {}.",
                        self.target_language
                    ),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_tokens: 100,
            temperature: 0.3,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;
        let response = expect_success(response).await?.json::<ChatResponse>().await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Translation("completion returned no choices".to_string()))?;
        Ok(choice.message.content.trim().to_string())
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum InputPayload {
    Text(String),
    Messages(Vec<ChatMessage>),
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "type")]
    kind: String,
    vector_store_ids: Vec<String>,
}

#[derive(Serialize)]
struct ResponsesRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_response_id: Option<String>,
    input: InputPayload,
    tools: Vec<Tool>,
}

/// Retrieval-augmented query engine scoped to one vector index. Conversation
/// memory lives server-side, addressed by the previous-response id.
pub struct ResponsesEngine {
    client: Arc<Client>,
    config: RemoteConfig,
    index: IndexHandle,
}

impl ResponsesEngine {
    pub fn new(client: Arc<Client>, config: RemoteConfig, index: IndexHandle) -> Self {
        Self {
            client,
            config,
            index,
        }
    }
}

impl fmt::Debug for ResponsesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsesEngine")
            .field("config", &self.config)
            .field("index", &self.index)
            .finish()
    }
}

#[async_trait]
impl QueryEngine for ResponsesEngine {
    async fn ask(&self, question: &str, previous_id: Option<&str>) -> Result<Answer> {
        // The first turn sends the question as a bare string; continuation
        // turns send a one-element message array alongside the previous id.
        let input = match previous_id {
            None => InputPayload::Text(question.to_string()),
            Some(_) => InputPayload::Messages(vec![ChatMessage {
                role: "user".to_string(),
                content: question.to_string(),
            }]),
        };
        let request = ResponsesRequest {
            model: self.config.model.clone(),
            previous_response_id: previous_id.map(|id| id.to_string()),
            input,
            tools: vec![Tool {
                kind: "file_search".to_string(),
                vector_store_ids: vec![self.index.0.clone()],
            }],
        };

        let response = self
            .client
            .post(format!("{}/responses", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;
        let response = expect_success(response).await?.json::<QueryResponse>().await?;
        debug!("Query response id: {}", response.id);

        Ok(Answer {
            text: extract_answer(&response),
            response_id: response.id,
        })
    }
}
