use thiserror::Error;

/// Stage of the query pipeline where a collaborator failure originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Retrieval,
    Generation,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retrieval => write!(f, "retrieval"),
            Self::Generation => write!(f, "generation"),
        }
    }
}

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Pipeline failure at {stage} stage: {message}")]
    Service {
        stage: PipelineStage,
        message: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn service(stage: PipelineStage, message: impl Into<String>) -> Self {
        Self::Service {
            stage,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Wrap a collaborator failure with the pipeline stage it originated from
    pub fn at_stage(self, stage: PipelineStage) -> Self {
        match self {
            Self::Service { .. } => self,
            other => Self::Service {
                stage,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let error = DomainError::invalid_input("Question cannot be empty");
        assert_eq!(
            error.to_string(),
            "Invalid input: Question cannot be empty"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("chunk_overlap must be less than chunk_size");
        assert_eq!(
            error.to_string(),
            "Configuration error: chunk_overlap must be less than chunk_size"
        );
    }

    #[test]
    fn test_at_stage_wraps_provider_error() {
        let error = DomainError::provider("gemini", "timeout").at_stage(PipelineStage::Generation);

        match error {
            DomainError::Service { stage, message } => {
                assert_eq!(stage, PipelineStage::Generation);
                assert!(message.contains("gemini"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[test]
    fn test_at_stage_keeps_existing_stage() {
        let error = DomainError::service(PipelineStage::Retrieval, "store unreachable")
            .at_stage(PipelineStage::Generation);

        match error {
            DomainError::Service { stage, .. } => assert_eq!(stage, PipelineStage::Retrieval),
            other => panic!("expected Service error, got {:?}", other),
        }
    }
}
