//! Retrieval - vector store and retriever collaborator interfaces

pub mod store;
pub mod types;

pub use store::{Retriever, VectorStore};
pub use types::{AddDocumentsResult, DeleteDocumentsResult, Document, RetrievedChunk};

#[cfg(test)]
pub use store::mock::{MockRetriever, MockVectorStore};
