//! Gemini embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_EMBEDDING_MODEL: &str = "embedding-001";

/// Gemini embedding provider using the batchEmbedContents endpoint
#[derive(Debug)]
pub struct GeminiEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiEmbeddingProvider<C> {
    /// Create a new Gemini embedding provider
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    /// Create a new provider with custom base URL
    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Set the embedding model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn embeddings_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:batchEmbedContents",
            self.base_url, self.model
        )
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_request(&self, texts: &[String]) -> serde_json::Value {
        let requests: Vec<serde_json::Value> = texts
            .iter()
            .map(|text| {
                serde_json::json!({
                    "model": format!("models/{}", self.model),
                    "content": { "parts": [{ "text": text }] },
                })
            })
            .collect();

        serde_json::json!({ "requests": requests })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<Vec<f32>>, DomainError> {
        let response: GeminiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("gemini", format!("Failed to parse embedding response: {}", e))
        })?;

        Ok(response.embeddings.into_iter().map(|e| e.values).collect())
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for GeminiEmbeddingProvider<C> {
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let url = self.embeddings_url();
        let body = self.build_request(&texts);

        let response = self.client.post_json(&url, self.headers(), &body).await?;
        let vectors = self.parse_response(response)?;

        if vectors.len() != texts.len() {
            return Err(DomainError::provider(
                "gemini",
                format!(
                    "Expected {} embeddings, got {}",
                    texts.len(),
                    vectors.len()
                ),
            ));
        }

        Ok(vectors)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API types for embeddings

#[derive(Debug, Deserialize)]
struct GeminiEmbeddingResponse {
    embeddings: Vec<GeminiEmbedding>,
}

#[derive(Debug, Deserialize)]
struct GeminiEmbedding {
    values: Vec<f32>,
}
