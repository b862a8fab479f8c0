//! Domain layer - Core business logic and entities

pub mod chunking;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod rag;
pub mod retrieval;

pub use chunking::{Chunk, ChunkMetadata, ChunkingConfig, Chunks, RecursiveSplitter};
pub use embedding::EmbeddingProvider;
pub use error::{DomainError, PipelineStage};
pub use generation::GenerationProvider;
pub use ingestion::{IngestionPipeline, IngestionResult};
pub use rag::{
    assemble_context, PromptTemplate, RagConfig, RagPipeline, CHUNK_SEPARATOR,
    DEFAULT_PROMPT_TEMPLATE,
};
pub use retrieval::{
    AddDocumentsResult, DeleteDocumentsResult, Document, RetrievedChunk, Retriever, VectorStore,
};
