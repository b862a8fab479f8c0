//! Embedding provider trait
//!
//! Embeddings are opaque to the core; only vector store adapters look at
//! them.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for embedding providers
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Embed a batch of texts, one vector per input in the same order
    async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let mut vectors = self.embed_batch(vec![text.to_string()]).await?;

        if vectors.is_empty() {
            return Err(DomainError::internal(
                "Embedding provider returned no vectors",
            ));
        }

        Ok(vectors.remove(0))
    }

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock embedding provider producing deterministic vectors from text
    /// bytes, so equal texts get equal vectors
    #[derive(Debug, Default)]
    pub struct MockEmbeddingProvider {
        error: Option<String>,
    }

    impl MockEmbeddingProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        fn embed_text(text: &str) -> Vec<f32> {
            let mut vector = vec![0.0f32; 8];

            for (i, byte) in text.bytes().enumerate() {
                vector[i % 8] += byte as f32 / 255.0;
            }

            vector
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            Ok(texts.iter().map(|t| Self::embed_text(t)).collect())
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
