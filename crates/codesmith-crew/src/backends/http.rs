use crate::config::{EngineProvider, ModelConfig};
use crate::engine::CrewEngine;
use async_trait::async_trait;
use codesmith_core::{CodesmithError, CodesmithResult};

/// OpenAI-compatible API backend.
///
/// Works with OpenAI, OpenRouter, Groq, Ollama, and any other provider that
/// implements the OpenAI chat completions API.
pub struct HttpEngine {
    config: ModelConfig,
    http: reqwest::Client,
}

impl HttpEngine {
    /// Creates the backend with a fresh HTTP client.
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn add_provider_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");

        // OpenRouter requires extra headers
        if matches!(self.config.provider, EngineProvider::OpenRouter) {
            request
                .header("HTTP-Referer", "https://github.com/codesmith-ai/codesmith")
                .header("X-Title", "CodeSmith")
        } else {
            request
        }
    }
}

#[async_trait]
impl CrewEngine for HttpEngine {
    async fn kickoff(&self, system_prompt: &str, prompt: &str) -> CodesmithResult<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url());

        let body = serde_json::json!({
            "model": self.config.model_id,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": prompt},
            ],
        });

        let request = self.add_provider_headers(self.http.post(&url));

        let resp = request
            .json(&body)
            .send()
            .await
            .map_err(|e| CodesmithError::Http(e.to_string()))?;

        let status = resp.status();
        let resp_body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| CodesmithError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(CodesmithError::Http(format!(
                "engine API error {status}: {resp_body}"
            )));
        }

        extract_content(&resp_body)
    }
}

/// Pulls the assistant's text out of a chat-completions response body.
pub fn extract_content(body: &serde_json::Value) -> CodesmithResult<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| {
            CodesmithError::Crew(format!(
                "engine response carried no message content: {body}"
            ))
        })
}
