use log::info;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a French-speaking web development expert assistant. Provide helpful, detailed responses in French.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt file IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Prompt JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Prompt template '{0}' is empty")]
    EmptyTemplate(String),
}

#[derive(Deserialize, Debug, Clone)]
pub struct PromptConfig {
    pub system: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { system: DEFAULT_SYSTEM_PROMPT.to_string() }
    }
}

impl PromptConfig {
    fn validate(&self) -> Result<(), PromptError> {
        if self.system.trim().is_empty() {
            return Err(PromptError::EmptyTemplate("system".to_string()));
        }
        Ok(())
    }
}

pub fn load_prompts(path: &str) -> Result<PromptConfig, PromptError> {
    let file_content = fs::read_to_string(path)?;
    let config: PromptConfig = serde_json::from_str(&file_content)?;
    config.validate()?;
    Ok(config)
}

/// Falls back to the built-in French assistant prompt when no file is configured.
pub fn resolve_prompts(path: Option<&str>) -> Result<PromptConfig, PromptError> {
    match path {
        Some(p) => {
            info!("Loading system prompt from {}", p);
            load_prompts(p)
        }
        None => Ok(PromptConfig::default()),
    }
}
