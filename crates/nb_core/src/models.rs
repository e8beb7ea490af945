use async_trait::async_trait;

use crate::Result;

/// One completed query turn. `text` is `None` when the response carried no
/// extractable answer; the conversation still advances on `response_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub response_id: String,
    pub text: Option<String>,
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single news title into the configured target language.
    async fn translate(&self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait QueryEngine: Send + Sync {
    /// Ask one question against the knowledge base. `previous_id` carries the
    /// server-assigned identifier of the prior turn, absent on the first one.
    async fn ask(&self, question: &str, previous_id: Option<&str>) -> Result<Answer>;
}
