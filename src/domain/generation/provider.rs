//! Generation provider trait

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for text generation providers (Gemini, OpenAI, etc.)
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Generate an answer for a composed prompt
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
