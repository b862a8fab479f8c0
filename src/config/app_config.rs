use serde::Deserialize;

use crate::domain::chunking::ChunkingConfig;
use crate::domain::rag::{PromptTemplate, RagConfig};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub chunking: ChunkingSettings,
    pub retrieval: RetrievalConfig,
    pub gemini: GeminiConfig,
    pub milvus: MilvusConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per question
    pub top_k: usize,
    /// Which vector store backs retrieval
    pub backend: VectorStoreBackend,
    /// Prompt template with {context} and {question} placeholders;
    /// empty means the bundled default
    pub prompt_template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VectorStoreBackend {
    #[default]
    Memory,
    Milvus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MilvusConfig {
    pub base_url: String,
    pub collection: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            backend: VectorStoreBackend::default(),
            prompt_template: String::new(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            embedding_model: "embedding-001".to_string(),
        }
    }
}

impl Default for MilvusConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:19530".to_string(),
            collection: "documents_collection".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Build and validate the chunking configuration
    pub fn chunking_config(&self) -> Result<ChunkingConfig, DomainError> {
        let config = ChunkingConfig::new(self.chunking.chunk_size, self.chunking.chunk_overlap);
        config.validate()?;
        Ok(config)
    }

    /// Build and validate the query pipeline configuration
    pub fn rag_config(&self) -> Result<RagConfig, DomainError> {
        let prompt = if self.retrieval.prompt_template.is_empty() {
            PromptTemplate::default()
        } else {
            PromptTemplate::new(self.retrieval.prompt_template.clone())?
        };

        Ok(RagConfig {
            top_k: self.retrieval.top_k,
            prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 100);
        assert_eq!(config.retrieval.top_k, 4);
        assert_eq!(config.retrieval.backend, VectorStoreBackend::Memory);
    }

    #[test]
    fn test_default_chunking_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.chunking_config().is_ok());
    }

    #[test]
    fn test_invalid_chunking_fails_fast() {
        let mut config = AppConfig::default();
        config.chunking.chunk_overlap = config.chunking.chunk_size;

        assert!(matches!(
            config.chunking_config(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_empty_prompt_template_uses_default() {
        let config = AppConfig::default();
        let rag = config.rag_config().unwrap();

        assert!(rag.prompt.as_str().contains("{context}"));
        assert!(rag.prompt.as_str().contains("{question}"));
    }

    #[test]
    fn test_custom_prompt_template_is_validated() {
        let mut config = AppConfig::default();
        config.retrieval.prompt_template = "no placeholders here".to_string();

        assert!(matches!(
            config.rag_config(),
            Err(DomainError::Configuration { .. })
        ));
    }
}
