//! Vector store and retriever capability traits

use std::fmt::Debug;

use async_trait::async_trait;

use super::types::{AddDocumentsResult, DeleteDocumentsResult, Document, RetrievedChunk};
use crate::domain::DomainError;

/// Trait for the embedding + storage collaborator, used at ingestion time
#[async_trait]
pub trait VectorStore: Send + Sync + Debug {
    /// Add documents to the store
    async fn add_documents(
        &self,
        documents: Vec<Document>,
    ) -> Result<AddDocumentsResult, DomainError>;

    /// Delete all chunks belonging to a source document
    async fn delete_by_source(&self, source: &str) -> Result<DeleteDocumentsResult, DomainError>;

    /// Check the store is reachable
    async fn health_check(&self) -> Result<bool, DomainError>;

    /// Get the store type name
    fn store_type(&self) -> &'static str;
}

/// Trait for the retriever collaborator, used at query time
///
/// Results are ordered most relevant first; the core does not re-rank,
/// retry, or cache.
#[async_trait]
pub trait Retriever: Send + Sync + Debug {
    /// Retrieve the top-k chunks relevant to a question
    async fn retrieve(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>, DomainError>;
}
