use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:5001")]
    pub server_addr: String,

    // --- Chat LLM Provider Args ---
    /// API Key for the Groq completion API. Required; the server refuses to start without it.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub chat_api_key: Option<String>,

    /// Model name for chat completion (e.g., mixtral-8x7b-32768, llama-3.1-8b-instant)
    #[arg(long, env = "CHAT_MODEL", default_value = crate::llm::DEFAULT_CHAT_MODEL)]
    pub chat_model: String,

    /// Base URL for the OpenAI-compatible completion API. `/chat/completions` is appended.
    #[arg(long, env = "CHAT_BASE_URL", default_value = crate::llm::DEFAULT_BASE_URL)]
    pub chat_base_url: String,

    /// Sampling temperature sent with every completion request.
    #[arg(long, env = "CHAT_TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Maximum number of tokens the model may generate per reply.
    #[arg(long, env = "CHAT_MAX_TOKENS", default_value = "2048")]
    pub max_tokens: u32,

    /// Optional timeout in seconds for the upstream call. Unset means the HTTP client default.
    #[arg(long, env = "CHAT_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    // --- Prompt Args ---
    /// Optional path to a JSON file overriding the system prompt ({"system": "..."}).
    #[arg(long, env = "PROMPTS_PATH")]
    pub prompts_path: Option<String>,
}
