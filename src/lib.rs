pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod relay;
pub mod server;

use cli::Args;
use config::prompt::resolve_prompts;
use llm::chat::new_client as new_chat_client;
use llm::LlmConfig;
use log::info;
use relay::ChatRelay;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let prompts = resolve_prompts(args.prompts_path.as_deref()).map_err(|e|
        format!("Failed to load prompts: {}", e)
    )?;
    let chat_config = LlmConfig::from(&args);
    let chat_client = new_chat_client(&chat_config)?;

    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", chat_client.get_model());
    info!("Chat Base URL: {}", chat_client.get_base_url().as_deref().unwrap_or("adapter default"));
    info!("Temperature: {}", chat_config.temperature);
    info!("Max Tokens: {}", chat_config.max_tokens);
    match args.request_timeout_secs {
        Some(secs) => info!("Request Timeout: {}s", secs),
        None => info!("Request Timeout: client default"),
    }
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("built-in"));
    info!("-------------------------");

    let relay = Arc::new(ChatRelay::new(chat_client, &prompts));
    info!("System prompt: {}", relay.system_prompt());

    let server = Server::new(args.server_addr.clone(), relay);
    server.run().await?;

    Ok(())
}
