//! Chunking configuration and chunk types

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Configuration for chunking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum chunk size in characters
    pub chunk_size: usize,
    /// Overlap between consecutive chunks in characters
    pub chunk_overlap: usize,
}

impl ChunkingConfig {
    /// Create a new chunking configuration
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::configuration(
                "chunk_size must be greater than 0",
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::configuration(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
        }
    }
}

/// Metadata for a chunk, offsets are in characters within the source document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Index of this chunk (0-based)
    pub chunk_index: usize,
    /// Character offset where this chunk starts
    pub char_start: usize,
    /// Character offset where this chunk ends
    pub char_end: usize,
}

impl ChunkMetadata {
    /// Create new chunk metadata
    pub fn new(chunk_index: usize, char_start: usize, char_end: usize) -> Self {
        Self {
            chunk_index,
            char_start,
            char_end,
        }
    }

    /// Convert to JSON value map for vector store metadata
    pub fn to_json_map(&self) -> std::collections::HashMap<String, serde_json::Value> {
        let mut map = std::collections::HashMap::new();
        map.insert(
            "chunk_index".to_string(),
            serde_json::Value::Number(self.chunk_index.into()),
        );
        map.insert(
            "char_start".to_string(),
            serde_json::Value::Number(self.char_start.into()),
        );
        map.insert(
            "char_end".to_string(),
            serde_json::Value::Number(self.char_end.into()),
        );
        map
    }
}

/// A chunk of text extracted from a document
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Chunk content
    pub content: String,
    /// Chunk metadata
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Get the chunk index
    pub fn index(&self) -> usize {
        self.metadata.chunk_index
    }

    /// Get the content length in characters
    pub fn char_len(&self) -> usize {
        self.metadata.char_end - self.metadata.char_start
    }

    /// Check if the chunk is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
