use serde::{Deserialize, Serialize};

use super::session::CompletionModel;
use super::ChatError;

/// General-purpose instruct models tried in order when no model is pinned.
const PREFERRED_MODELS: &[&str] = &["llama3.2", "llama3.1", "llama3", "mistral"];

/// Ollama HTTP client for local LLM inference.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Create a new OllamaClient pointing at a local Ollama instance.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default Ollama instance at localhost:11434 with 5-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434", 300)
    }

    /// Find the first preferred model actually present on the instance.
    pub fn find_best_model(&self) -> Result<String, ChatError> {
        let available = self.list_models()?;
        for preferred in PREFERRED_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(ChatError::NoModel)
    }

    pub fn is_model_available(&self, model: &str) -> Result<bool, ChatError> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m.starts_with(model)))
    }

    pub fn list_models(&self) -> Result<Vec<String>, ChatError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                ChatError::GatewayConnection(self.base_url.clone())
            } else {
                ChatError::ResponseParsing(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChatError::GatewayStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| ChatError::ResponseParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    fn generate(&self, model: &str, prompt: &str) -> Result<String, ChatError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ChatError::GatewayConnection(self.base_url.clone())
            } else if e.is_timeout() {
                ChatError::GatewayTimeout(self.timeout_secs)
            } else {
                ChatError::ResponseParsing(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChatError::GatewayStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| ChatError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

/// Completion gateway backed by a local Ollama instance.
///
/// Wraps `OllamaClient` with a fixed model name so it satisfies the
/// `CompletionModel` trait expected by `ChatSession`.
pub struct OllamaGateway {
    client: OllamaClient,
    model: String,
}

impl OllamaGateway {
    /// Create a new gateway with explicit model name.
    pub fn new(client: OllamaClient, model: String) -> Self {
        Self { client, model }
    }

    /// Create a gateway by probing the instance for a preferred model.
    pub fn with_resolved_model(client: OllamaClient) -> Result<Self, ChatError> {
        let model = client.find_best_model()?;
        tracing::info!(model = %model, "Completion gateway: model resolved");
        Ok(Self::new(client, model))
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionModel for OllamaGateway {
    fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        self.client.generate(&self.model, prompt)
    }
}

/// Mock completion model for testing — returns a configurable response.
pub struct MockModel {
    response: String,
}

impl MockModel {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl CompletionModel for MockModel {
    fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_model_returns_configured_response() {
        let model = MockModel::new("test response");
        let result = model.complete("prompt").unwrap();
        assert_eq!(result, "test response");
    }

    #[test]
    fn ollama_client_constructor() {
        let client = OllamaClient::new("http://localhost:11434", 120);
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.timeout_secs, 120);
    }

    #[test]
    fn ollama_client_trims_trailing_slash() {
        let client = OllamaClient::new("http://localhost:11434/", 60);
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn default_local_uses_standard_port() {
        let client = OllamaClient::default_local();
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn gateway_satisfies_completion_model_trait() {
        fn _accepts_completion_model<G: CompletionModel>(_g: &G) {}

        // Compile-time check — we can't connect to Ollama in tests.
        let _: fn(&OllamaGateway) = _accepts_completion_model;
    }

    #[test]
    fn model_preference_starts_with_llama() {
        assert_eq!(PREFERRED_MODELS[0], "llama3.2");
        assert!(PREFERRED_MODELS.len() >= 3);
    }
}
