//! Embedding provider implementations

pub mod gemini;

pub use gemini::GeminiEmbeddingProvider;
