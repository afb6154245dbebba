pub mod dto;

use std::env;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;

const CHAT_URL: &str = "https://api.cohere.ai/v1/chat";

/// The generation model is fixed; there is no per-request selection.
const MODEL: &str = "command";

#[derive(Clone, Debug)]
pub struct CohereConfig {
    pub api_key: String,
}

impl CohereConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let api_key = env::var("COHERE_API_KEY")
            .map_err(|_| AppError::Config("COHERE_API_KEY is not set".to_string()))?;

        Ok(Self { api_key })
    }
}

/// Opaque text-generation capability. Injected through `AppState` so the
/// request-builder and deriver can be exercised without network access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

pub struct CohereHttpClient {
    client: Client,
    config: CohereConfig,
}

impl CohereHttpClient {
    pub fn new(config: CohereConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl TextGenerator for CohereHttpClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request_body = dto::ChatRequest {
            model: MODEL,
            message: prompt,
        };

        let response = self
            .client
            .post(CHAT_URL)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Generation(format!(
                "Cohere API error {}: {}",
                status, body
            )));
        }

        let parsed: dto::ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to parse Cohere response: {}", e)))?;

        Ok(parsed.text)
    }
}

/// Test double returning a fixed plan text.
pub struct CannedGenerator(pub String);

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

/// Test double that always fails the generation call.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Generation("service unavailable".to_string()))
    }
}
