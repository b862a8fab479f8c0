//! Documents going into the vector store and chunks coming back out

use std::collections::HashMap;

/// Document to be added to the vector store
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique identifier for the document
    pub id: String,
    /// Document content text
    pub content: String,
    /// Optional metadata key-value pairs
    pub metadata: HashMap<String, serde_json::Value>,
    /// Optional source reference
    pub source: Option<String>,
}

impl Document {
    /// Create a new document
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: HashMap::new(),
            source: None,
        }
    }

    /// Add metadata to the document
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Set all metadata
    pub fn with_all_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A chunk returned from the retriever with its relevance score
#[derive(Debug, Clone)]
pub struct RetrievedChunk {
    /// Identifier of the stored chunk
    pub id: String,
    /// Chunk text
    pub content: String,
    /// Relevance score, higher is more relevant
    pub score: f32,
    /// Source document reference, if known
    pub source: Option<String>,
}

impl RetrievedChunk {
    /// Create a new retrieved chunk
    pub fn new(id: impl Into<String>, content: impl Into<String>, score: f32) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            score,
            source: None,
        }
    }

    /// Set source reference
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Result of adding documents to the vector store
#[derive(Debug, Clone)]
pub struct AddDocumentsResult {
    /// Number of documents successfully added
    pub added: usize,
    /// Number of documents that failed
    pub failed: usize,
}

impl AddDocumentsResult {
    /// All documents added successfully
    pub fn success(added: usize) -> Self {
        Self { added, failed: 0 }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Result of deleting documents from the vector store
#[derive(Debug, Clone)]
pub struct DeleteDocumentsResult {
    /// Number of documents deleted
    pub deleted: usize,
}
