//! Milvus vector store adapter using the REST v2 API
//!
//! Chunks are embedded through an [`EmbeddingProvider`] before insert and
//! questions are embedded before search.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::embedding::EmbeddingProvider;
use crate::domain::retrieval::{
    AddDocumentsResult, DeleteDocumentsResult, Document, RetrievedChunk, Retriever, VectorStore,
};
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_COLLECTION: &str = "documents_collection";

/// Milvus vector store adapter
#[derive(Debug)]
pub struct MilvusVectorStore<C, E>
where
    C: HttpClientTrait,
    E: EmbeddingProvider,
{
    client: C,
    embedder: Arc<E>,
    base_url: String,
    collection: String,
}

impl<C, E> MilvusVectorStore<C, E>
where
    C: HttpClientTrait,
    E: EmbeddingProvider,
{
    /// Create a new Milvus adapter
    pub fn new(client: C, embedder: Arc<E>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            embedder,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Set the collection name
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/v2/vectordb/{}", self.base_url, endpoint)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .post_json(&self.url(endpoint), self.headers(), &body)
            .await?;

        let code = response.get("code").and_then(|c| c.as_i64()).unwrap_or(-1);

        if code != 0 {
            let message = response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(DomainError::provider(
                "milvus",
                format!("Milvus error {}: {}", code, message),
            ));
        }

        Ok(response)
    }
}

#[async_trait]
impl<C, E> VectorStore for MilvusVectorStore<C, E>
where
    C: HttpClientTrait,
    E: EmbeddingProvider,
{
    async fn add_documents(
        &self,
        documents: Vec<Document>,
    ) -> Result<AddDocumentsResult, DomainError> {
        if documents.is_empty() {
            return Ok(AddDocumentsResult::success(0));
        }

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let vectors = self.embedder.embed_batch(texts).await?;

        let data: Vec<serde_json::Value> = documents
            .iter()
            .zip(vectors)
            .map(|(doc, vector)| {
                serde_json::json!({
                    "chunk_id": doc.id,
                    "vector": vector,
                    "text": doc.content,
                    "source": doc.source.clone().unwrap_or_default(),
                    "metadata": serde_json::Value::Object(
                        doc.metadata.clone().into_iter().collect()
                    ),
                })
            })
            .collect();

        let body = serde_json::json!({
            "collectionName": self.collection,
            "data": data,
        });

        let response = self.post("entities/insert", body).await?;
        let inserted = response["data"]["insertCount"]
            .as_u64()
            .unwrap_or(documents.len() as u64) as usize;

        Ok(AddDocumentsResult {
            added: inserted,
            failed: documents.len().saturating_sub(inserted),
        })
    }

    async fn delete_by_source(&self, source: &str) -> Result<DeleteDocumentsResult, DomainError> {
        let filter = format!("source == \"{}\"", source.replace('"', "\\\""));
        let body = serde_json::json!({
            "collectionName": self.collection,
            "filter": filter,
        });

        let response = self.post("entities/delete", body).await?;
        let deleted = response["data"]["deleteCount"].as_u64().unwrap_or(0) as usize;

        Ok(DeleteDocumentsResult { deleted })
    }

    async fn health_check(&self) -> Result<bool, DomainError> {
        let body = serde_json::json!({ "collectionName": self.collection });

        match self.post("collections/describe", body).await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    fn store_type(&self) -> &'static str {
        "milvus"
    }
}

#[async_trait]
impl<C, E> Retriever for MilvusVectorStore<C, E>
where
    C: HttpClientTrait,
    E: EmbeddingProvider,
{
    async fn retrieve(
        &self,
        question: &str,
        top_k: usize,
    ) -> Result<Vec<RetrievedChunk>, DomainError> {
        let vector = self.embedder.embed(question).await?;

        let body = serde_json::json!({
            "collectionName": self.collection,
            "data": [vector],
            "annsField": "vector",
            "limit": top_k,
            "outputFields": ["chunk_id", "text", "source"],
        });

        let response = self.post("entities/search", body).await?;

        let hits: Vec<MilvusHit> =
            serde_json::from_value(response["data"].clone()).map_err(|e| {
                DomainError::provider("milvus", format!("Failed to parse search response: {}", e))
            })?;

        Ok(hits
            .into_iter()
            .map(|hit| {
                let mut chunk = RetrievedChunk::new(hit.chunk_id, hit.text, hit.distance);

                if !hit.source.is_empty() {
                    chunk = chunk.with_source(hit.source);
                }

                chunk
            })
            .collect())
    }
}

// Milvus REST v2 response types

#[derive(Debug, Deserialize)]
struct MilvusHit {
    #[serde(default)]
    chunk_id: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    distance: f32,
}
