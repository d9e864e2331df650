use crate::config::prompt::PromptConfig;
use crate::error::RelayError;
use crate::llm::chat::ChatClient;
use crate::models::chat::{ AskRequest, ChatMessage, ConversationTurn };

use log::{ error, info, warn };
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Read-only after startup; shared by every request handler.
#[derive(Clone)]
pub struct ChatRelay {
    chat_client: Arc<dyn ChatClient>,
    system_prompt: String,
}

impl ChatRelay {
    pub fn new(chat_client: Arc<dyn ChatClient>, prompts: &PromptConfig) -> Self {
        Self {
            chat_client,
            system_prompt: prompts.system.clone(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub async fn ask(&self, request: AskRequest) -> Result<String, RelayError> {
        info!("Relaying message with {} history turns", request.history.len());
        let messages = build_messages(&self.system_prompt, request.history, request.message);

        let reply = self.chat_client.complete(&messages).await.map_err(|e| {
            error!("Error with Groq API: {}", e);
            RelayError::from(e)
        })?;

        reply.ok_or_else(|| {
            warn!("Groq API returned no usable choice");
            RelayError::NoResponse
        })
    }
}

/// System prompt first, then the prior turns in order, then the new user message.
pub fn build_messages(
    system_prompt: &str,
    history: Vec<ConversationTurn>,
    message: String
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.into_iter().map(ChatMessage::from));
    messages.push(ChatMessage::user(message));
    messages
}

/// Validates a raw `/api/ask` body. `history` must be present, even if empty.
pub fn parse_request(body: &[u8]) -> Result<AskRequest, RelayError> {
    let data: JsonValue = serde_json::from_slice(body).map_err(|_| RelayError::missing_input())?;

    let message = match data.get("message") {
        Some(JsonValue::String(m)) if !m.is_empty() => m.clone(),
        _ => {
            return Err(RelayError::missing_input());
        }
    };

    let items = match data.get("history") {
        Some(JsonValue::Array(items)) => items,
        _ => {
            return Err(RelayError::missing_input());
        }
    };

    let history = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json
                ::from_value::<ConversationTurn>(item.clone())
                .map_err(|e| RelayError::BadRequest(format!("Invalid history entry at index {}: {}", i, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AskRequest { message, history })
}
