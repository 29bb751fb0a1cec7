use serde::{Deserialize, Serialize};

/// Supported model providers. All speak the OpenAI chat-completions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineProvider {
    /// OpenAI's own API.
    OpenAi,
    /// OpenRouter — routes to many upstream models behind one key.
    OpenRouter,
    /// Groq cloud inference — OpenAI-compatible API, free tier with rate limits.
    Groq,
    /// A local Ollama server; no API key needed.
    Ollama,
}

/// Configuration for the model backing the crew's coding agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Which provider to talk to.
    pub provider: EngineProvider,
    /// Provider-specific model identifier.
    pub model_id: String,
    /// API key; may be empty for providers that need none.
    #[serde(default)]
    pub api_key: String,
    /// Explicit base URL, overriding the provider default.
    pub api_base_url: Option<String>,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

impl ModelConfig {
    /// The base URL for this provider, honoring any explicit override.
    pub fn base_url(&self) -> &str {
        if let Some(url) = &self.api_base_url {
            url
        } else {
            match self.provider {
                EngineProvider::OpenAi => "https://api.openai.com",
                EngineProvider::OpenRouter => "https://openrouter.ai/api",
                EngineProvider::Groq => "https://api.groq.com/openai",
                EngineProvider::Ollama => "http://localhost:11434",
            }
        }
    }
}
