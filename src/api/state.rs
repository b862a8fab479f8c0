//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::generation::GenerationProvider;
use crate::domain::ingestion::{IngestionPipeline, IngestionResult};
use crate::domain::rag::RagPipeline;
use crate::domain::retrieval::{Retriever, VectorStore};
use crate::domain::DomainError;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub ingestion_service: Arc<dyn IngestionServiceTrait>,
    pub query_service: Arc<dyn QueryServiceTrait>,
    pub vector_store: Arc<dyn VectorStore>,
}

/// Trait for the document ingestion service
#[async_trait]
pub trait IngestionServiceTrait: Send + Sync {
    async fn ingest(
        &self,
        content: &str,
        filename: Option<&str>,
    ) -> Result<IngestionResult, DomainError>;
}

/// Trait for the question answering service
#[async_trait]
pub trait QueryServiceTrait: Send + Sync {
    async fn answer(&self, question: &str) -> Result<String, DomainError>;
}

#[async_trait]
impl<S: VectorStore> IngestionServiceTrait for IngestionPipeline<S> {
    async fn ingest(
        &self,
        content: &str,
        filename: Option<&str>,
    ) -> Result<IngestionResult, DomainError> {
        IngestionPipeline::ingest(self, content, filename, None).await
    }
}

#[async_trait]
impl<R, G> QueryServiceTrait for RagPipeline<R, G>
where
    R: Retriever,
    G: GenerationProvider,
{
    async fn answer(&self, question: &str) -> Result<String, DomainError> {
        RagPipeline::answer(self, question).await
    }
}
