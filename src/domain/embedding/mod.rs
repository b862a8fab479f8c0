//! Embedding - external embedding provider interface

pub mod provider;

pub use provider::EmbeddingProvider;
