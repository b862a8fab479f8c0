//! Document chunking - splitting text into overlapping, embeddable pieces

pub mod chunker;
pub mod splitter;

pub use chunker::{Chunk, ChunkMetadata, ChunkingConfig};
pub use splitter::{Chunks, RecursiveSplitter};
