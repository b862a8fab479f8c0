//! Context assembly - formatting retrieved chunks for prompting

use crate::domain::retrieval::RetrievedChunk;

/// Separator between chunks in the assembled context
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Join retrieved chunk texts into one context string
///
/// Chunks are kept in the order supplied by the retriever (most relevant
/// first); this function does not re-rank. An empty input yields an empty
/// string, and there is never a trailing separator.
pub fn assemble_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}
