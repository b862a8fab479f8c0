//! In-memory vector store for development and testing
//!
//! Scores by term overlap instead of embeddings, so it runs without any
//! external service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::retrieval::{
    AddDocumentsResult, DeleteDocumentsResult, Document, RetrievedChunk, Retriever, VectorStore,
};
use crate::domain::DomainError;

/// In-memory store for development without Milvus
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    documents: Arc<RwLock<Vec<StoredDoc>>>,
}

#[derive(Debug, Clone)]
struct StoredDoc {
    id: String,
    content: String,
    source: Option<String>,
}

impl InMemoryVectorStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn score(query_terms: &[String], content: &str) -> f32 {
        if query_terms.is_empty() {
            return 0.0;
        }

        let content_lower = content.to_lowercase();
        let matched = query_terms
            .iter()
            .filter(|term| content_lower.contains(term.as_str()))
            .count();

        matched as f32 / query_terms.len() as f32
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add_documents(
        &self,
        documents: Vec<Document>,
    ) -> Result<AddDocumentsResult, DomainError> {
        let mut docs = self.documents.write().await;
        let count = documents.len();

        for doc in documents {
            docs.push(StoredDoc {
                id: doc.id,
                content: doc.content,
                source: doc.source,
            });
        }

        Ok(AddDocumentsResult::success(count))
    }

    async fn delete_by_source(&self, source: &str) -> Result<DeleteDocumentsResult, DomainError> {
        let mut docs = self.documents.write().await;
        let before = docs.len();

        docs.retain(|doc| doc.source.as_deref() != Some(source));

        Ok(DeleteDocumentsResult {
            deleted: before - docs.len(),
        })
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        Ok(true)
    }

    fn store_type(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl Retriever for InMemoryVectorStore {
    async fn retrieve(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>, DomainError> {
        let docs = self.documents.read().await;
        let query_terms: Vec<String> = question
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut scored: Vec<(f32, &StoredDoc)> = docs
            .iter()
            .map(|doc| (Self::score(&query_terms, &doc.content), doc))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(score, doc)| {
                let mut chunk = RetrievedChunk::new(&doc.id, &doc.content, score);

                if let Some(source) = &doc.source {
                    chunk = chunk.with_source(source);
                }

                chunk
            })
            .collect())
    }
}
