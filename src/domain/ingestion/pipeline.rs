//! Ingestion pipeline - chunk a document and hand it to the vector store

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::chunking::{Chunk, RecursiveSplitter};
use crate::domain::retrieval::{Document, VectorStore};
use crate::domain::DomainError;

/// Outcome of ingesting one document
#[derive(Debug, Clone, Serialize)]
pub struct IngestionResult {
    /// Identifier the document was stored under
    pub document_id: String,
    /// Number of chunks stored
    pub chunks_created: usize,
    /// Number of chunks that failed to store
    pub chunks_failed: usize,
}

impl IngestionResult {
    pub fn is_success(&self) -> bool {
        self.chunks_failed == 0
    }
}

/// Ingestion pipeline for processing documents into the vector store
#[derive(Debug)]
pub struct IngestionPipeline<S>
where
    S: VectorStore,
{
    store: Arc<S>,
    splitter: RecursiveSplitter,
}

impl<S: VectorStore> IngestionPipeline<S> {
    /// Create a new ingestion pipeline
    pub fn new(store: Arc<S>, splitter: RecursiveSplitter) -> Self {
        Self { store, splitter }
    }

    /// Chunk a document and store every chunk
    ///
    /// The document id comes from the explicit `source_id`, else the
    /// filename, else a fresh UUID.
    pub async fn ingest(
        &self,
        content: &str,
        filename: Option<&str>,
        source_id: Option<&str>,
    ) -> Result<IngestionResult, DomainError> {
        let document_id = source_id
            .or(filename)
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let chunks = self.splitter.split_text(content);

        if chunks.is_empty() {
            return Ok(IngestionResult {
                document_id,
                chunks_created: 0,
                chunks_failed: 0,
            });
        }

        let documents = self.create_documents(&document_id, &chunks);
        let add_result = self.store.add_documents(documents).await?;

        info!(
            document_id = %document_id,
            chunks = add_result.added,
            failed = add_result.failed,
            "Ingested document"
        );

        Ok(IngestionResult {
            document_id,
            chunks_created: add_result.added,
            chunks_failed: add_result.failed,
        })
    }

    /// Replace an existing document by deleting its chunks and re-ingesting
    pub async fn update_document(
        &self,
        document_id: &str,
        content: &str,
    ) -> Result<IngestionResult, DomainError> {
        self.store.delete_by_source(document_id).await?;
        self.ingest(content, None, Some(document_id)).await
    }

    fn create_documents(&self, document_id: &str, chunks: &[Chunk]) -> Vec<Document> {
        chunks
            .iter()
            .map(|chunk| {
                let chunk_id = format!("{}_chunk_{}", document_id, chunk.metadata.chunk_index);

                Document::new(chunk_id, chunk.content.clone())
                    .with_all_metadata(chunk.metadata.to_json_map())
                    .with_metadata(
                        "document_id",
                        serde_json::Value::String(document_id.to_string()),
                    )
                    .with_source(document_id)
            })
            .collect()
    }
}
