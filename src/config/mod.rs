//! Application configuration loaded once at startup

pub mod app_config;

pub use app_config::{
    AppConfig, ChunkingSettings, GeminiConfig, LogFormat, LoggingConfig, MilvusConfig,
    RetrievalConfig, ServerConfig, VectorStoreBackend,
};
