//! Document Q&A API
//!
//! Retrieval-augmented question answering over uploaded documents:
//! - Text uploads are split into overlapping chunks and stored in a vector store
//! - Questions retrieve the closest chunks and are answered by an LLM
//! - Pluggable vector store backends (in-memory, Milvus) and Gemini providers

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use anyhow::Context;

use api::state::AppState;
use config::VectorStoreBackend;
use domain::chunking::RecursiveSplitter;
use domain::ingestion::IngestionPipeline;
use domain::rag::RagPipeline;
use infrastructure::embedding::GeminiEmbeddingProvider;
use infrastructure::generation::GeminiGenerationProvider;
use infrastructure::vector_store::{InMemoryVectorStore, MilvusVectorStore};
use infrastructure::HttpClient;
use tracing::info;

/// Wire up the application state from configuration.
///
/// Fails fast on invalid chunking or prompt settings and on a missing
/// Gemini API key, so misconfiguration surfaces at startup rather than
/// on the first request.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let chunking = config
        .chunking_config()
        .context("invalid chunking configuration")?;
    let rag_config = config
        .rag_config()
        .context("invalid retrieval configuration")?;
    let splitter = RecursiveSplitter::new(chunking)?;

    if config.gemini.api_key.is_empty() {
        anyhow::bail!("gemini.api_key is required (set APP__GEMINI__API_KEY)");
    }

    let generator = Arc::new(
        GeminiGenerationProvider::with_base_url(
            HttpClient::new(),
            config.gemini.api_key.clone(),
            config.gemini.base_url.clone(),
        )
        .with_model(config.gemini.model.clone()),
    );

    match config.retrieval.backend {
        VectorStoreBackend::Memory => {
            info!("Using in-memory vector store");
            let store = Arc::new(InMemoryVectorStore::new());

            Ok(AppState {
                ingestion_service: Arc::new(IngestionPipeline::new(store.clone(), splitter)),
                query_service: Arc::new(RagPipeline::new(store.clone(), generator, rag_config)),
                vector_store: store,
            })
        }
        VectorStoreBackend::Milvus => {
            info!(
                collection = %config.milvus.collection,
                "Using Milvus vector store"
            );
            let embedder = Arc::new(
                GeminiEmbeddingProvider::with_base_url(
                    HttpClient::new(),
                    config.gemini.api_key.clone(),
                    config.gemini.base_url.clone(),
                )
                .with_model(config.gemini.embedding_model.clone()),
            );
            let store = Arc::new(
                MilvusVectorStore::new(HttpClient::new(), embedder, config.milvus.base_url.clone())
                    .with_collection(config.milvus.collection.clone()),
            );

            Ok(AppState {
                ingestion_service: Arc::new(IngestionPipeline::new(store.clone(), splitter)),
                query_service: Arc::new(RagPipeline::new(store.clone(), generator, rag_config)),
                vector_store: store,
            })
        }
    }
}
