pub mod chat;

use crate::cli::Args;
use std::time::Duration;

pub const DEFAULT_CHAT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Option<Duration>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            completion_model: None,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }
}

impl From<&Args> for LlmConfig {
    fn from(args: &Args) -> Self {
        Self {
            api_key: args.chat_api_key.clone().filter(|k| !k.trim().is_empty()),
            completion_model: Some(args.chat_model.clone()),
            base_url: Some(args.chat_base_url.clone()),
            temperature: args.temperature,
            max_tokens: args.max_tokens,
            timeout: args.request_timeout_secs.map(Duration::from_secs),
        }
    }
}
