//! Vector store implementations

pub mod in_memory;
pub mod milvus;

pub use in_memory::InMemoryVectorStore;
pub use milvus::MilvusVectorStore;
