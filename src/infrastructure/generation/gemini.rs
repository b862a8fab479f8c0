//! Gemini generation provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::generation::GenerationProvider;
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GENERATION_MODEL: &str = "gemini-1.5-flash";

/// Gemini generation provider using the generateContent endpoint
#[derive(Debug)]
pub struct GeminiGenerationProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiGenerationProvider<C> {
    /// Create a new Gemini generation provider
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
            model: DEFAULT_GENERATION_MODEL.to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Set the generation model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let response: GeminiGenerateResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(
                "gemini",
                format!("Failed to parse generation response: {}", e),
            )
        })?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| DomainError::provider("gemini", "Response contained no candidates"))?;

        Ok(text)
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerationProvider for GeminiGenerationProvider<C> {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let url = self.generate_url();
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self.client.post_json(&url, self.headers(), &body).await?;
        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API types for generation

#[derive(Debug, Deserialize)]
struct GeminiGenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: String,
}
