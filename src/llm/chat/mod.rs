pub mod groq;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

use super::LlmConfig;
use self::groq::GroqChatClient;
use crate::models::chat::ChatMessage;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Error code: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("failed to decode completion response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the ordered messages and returns the first choice's content.
    /// `Ok(None)` means the service answered but produced nothing usable.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>, ChatError>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> Option<String>;
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let specific_client = GroqChatClient::from_config(config)?;
    Ok(Arc::new(specific_client))
}
