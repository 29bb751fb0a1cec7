use crate::backends::http::HttpEngine;
use crate::config::ModelConfig;
use codesmith_core::CodesmithResult;
use async_trait::async_trait;

/// The opaque crew engine boundary.
///
/// One call per request: the engine takes the agent's system prompt and the
/// rendered task prompt, does whatever coordination it does internally
/// (including any retries), and eventually returns the raw textual payload.
/// Shape enforcement happens downstream, in the validator.
#[async_trait]
pub trait CrewEngine: Send + Sync {
    /// Runs the request to completion and returns the raw payload.
    async fn kickoff(&self, system_prompt: &str, prompt: &str) -> CodesmithResult<String>;
}

/// Engine client that dispatches to the configured provider backend.
///
/// All supported providers speak the OpenAI chat-completions API, so a single
/// HTTP backend covers them; the trait seam exists so tests (and future
/// providers) can substitute their own engine.
pub struct EngineClient {
    backend: Box<dyn CrewEngine>,
}

impl EngineClient {
    /// Builds the client for the configured provider.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            backend: Box::new(HttpEngine::new(config)),
        }
    }

    /// Creates a client from a pre-built backend (for tests and custom engines).
    pub fn from_backend(backend: Box<dyn CrewEngine>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CrewEngine for EngineClient {
    async fn kickoff(&self, system_prompt: &str, prompt: &str) -> CodesmithResult<String> {
        self.backend.kickoff(system_prompt, prompt).await
    }
}
