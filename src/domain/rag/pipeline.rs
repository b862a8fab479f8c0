//! Retrieval-augmented query pipeline
//!
//! For one question: retrieve top-k chunks, assemble a context string,
//! render the prompt, call the generation provider, return the answer
//! verbatim. No retries, no caching, no shared mutable state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::context::assemble_context;
use super::prompt::PromptTemplate;
use crate::domain::generation::GenerationProvider;
use crate::domain::retrieval::Retriever;
use crate::domain::{DomainError, PipelineStage};

/// Configuration for the query pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Number of chunks to retrieve per question
    pub top_k: usize,
    /// Prompt template with {context} and {question} placeholders
    pub prompt: PromptTemplate,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            prompt: PromptTemplate::default(),
        }
    }
}

/// Query pipeline composing retrieval, assembly, prompting and generation
#[derive(Debug)]
pub struct RagPipeline<R, G>
where
    R: Retriever,
    G: GenerationProvider,
{
    retriever: Arc<R>,
    generator: Arc<G>,
    config: RagConfig,
}

impl<R, G> RagPipeline<R, G>
where
    R: Retriever,
    G: GenerationProvider,
{
    /// Create a new query pipeline
    pub fn new(retriever: Arc<R>, generator: Arc<G>, config: RagConfig) -> Self {
        Self {
            retriever,
            generator,
            config,
        }
    }

    /// Answer one question
    pub async fn answer(&self, question: &str) -> Result<String, DomainError> {
        let question = question.trim();

        if question.is_empty() {
            return Err(DomainError::invalid_input("Question cannot be empty"));
        }

        info!(top_k = self.config.top_k, "Answering question");

        let chunks = self
            .retriever
            .retrieve(question, self.config.top_k)
            .await
            .map_err(|e| e.at_stage(PipelineStage::Retrieval))?;

        // Zero retrieved chunks is a degraded mode, not a failure: the model
        // may still answer from general knowledge or say it cannot
        debug!(retrieved = chunks.len(), "Retrieved chunks");

        let context = assemble_context(&chunks);
        let prompt = self.config.prompt.render(&context, question);

        let answer = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|e| e.at_stage(PipelineStage::Generation))?;

        debug!(answer_len = answer.len(), "Generated answer");

        Ok(answer)
    }

    /// Get the configuration
    pub fn config(&self) -> &RagConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::provider::mock::MockGenerationProvider;
    use crate::domain::retrieval::store::mock::MockRetriever;
    use crate::domain::retrieval::RetrievedChunk;

    fn pipeline(
        retriever: MockRetriever,
        generator: MockGenerationProvider,
    ) -> (
        Arc<MockRetriever>,
        Arc<MockGenerationProvider>,
        RagPipeline<MockRetriever, MockGenerationProvider>,
    ) {
        let retriever = Arc::new(retriever);
        let generator = Arc::new(generator);
        let pipeline = RagPipeline::new(
            retriever.clone(),
            generator.clone(),
            RagConfig::default(),
        );
        (retriever, generator, pipeline)
    }

    #[tokio::test]
    async fn test_empty_question_fails_before_retrieval() {
        let (retriever, _, pipeline) =
            pipeline(MockRetriever::new(), MockGenerationProvider::new("answer"));

        let result = pipeline.answer("").await;
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
        assert_eq!(retriever.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_question_fails_before_retrieval() {
        let (retriever, _, pipeline) =
            pipeline(MockRetriever::new(), MockGenerationProvider::new("answer"));

        let result = pipeline.answer("   ").await;
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
        assert_eq!(retriever.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_returned_verbatim() {
        let retriever = MockRetriever::new().with_chunks(vec![RetrievedChunk::new(
            "c0",
            "Paris is the capital of France.",
            0.95,
        )]);
        let (_, _, pipeline) = pipeline(retriever, MockGenerationProvider::new("  Paris.  "));

        let answer = pipeline
            .answer("What is the capital of France?")
            .await
            .unwrap();
        assert_eq!(answer, "  Paris.  ");
    }

    #[tokio::test]
    async fn test_prompt_contains_assembled_context_and_question() {
        let retriever = MockRetriever::new().with_chunks(vec![
            RetrievedChunk::new("c0", "Paris is the capital of France.", 0.95),
            RetrievedChunk::new("c1", "It is located on the Seine.", 0.80),
        ]);
        let (_, generator, pipeline) = pipeline(retriever, MockGenerationProvider::new("Paris."));

        pipeline
            .answer("What is the capital of France?")
            .await
            .unwrap();

        let prompts = generator.received_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0]
            .contains("Paris is the capital of France.\n\nIt is located on the Seine."));
        assert!(prompts[0].contains("What is the capital of France?"));
    }

    #[tokio::test]
    async fn test_zero_chunks_still_calls_generator() {
        let (_, generator, pipeline) =
            pipeline(MockRetriever::new(), MockGenerationProvider::new("No idea."));

        let answer = pipeline.answer("Anything relevant?").await.unwrap();
        assert_eq!(answer, "No idea.");

        let prompts = generator.received_prompts();
        assert_eq!(prompts.len(), 1);
        // Empty context section renders, it does not fail
        assert!(prompts[0].contains("Context: \n"));
    }

    #[tokio::test]
    async fn test_retriever_failure_carries_retrieval_stage() {
        let retriever = MockRetriever::new().with_error("store unreachable");
        let (_, generator, pipeline) = pipeline(retriever, MockGenerationProvider::new("unused"));

        let result = pipeline.answer("question").await;

        match result {
            Err(DomainError::Service { stage, message }) => {
                assert_eq!(stage, PipelineStage::Retrieval);
                assert!(message.contains("store unreachable"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
        assert!(generator.received_prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generator_failure_carries_generation_stage() {
        let retriever = MockRetriever::new()
            .with_chunks(vec![RetrievedChunk::new("c0", "some context", 0.9)]);
        let generator = MockGenerationProvider::new("unused").with_error("quota exceeded");
        let (_, _, pipeline) = pipeline(retriever, generator);

        let result = pipeline.answer("question").await;

        match result {
            Err(DomainError::Service { stage, message }) => {
                assert_eq!(stage, PipelineStage::Generation);
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_top_k_is_passed_to_retriever() {
        let retriever = Arc::new(MockRetriever::new().with_chunks(vec![
            RetrievedChunk::new("a", "one", 0.9),
            RetrievedChunk::new("b", "two", 0.8),
            RetrievedChunk::new("c", "three", 0.7),
        ]));
        let generator = Arc::new(MockGenerationProvider::new("ok"));
        let config = RagConfig {
            top_k: 2,
            prompt: PromptTemplate::new("{context}|{question}").unwrap(),
        };
        let pipeline = RagPipeline::new(retriever, generator.clone(), config);

        pipeline.answer("q").await.unwrap();

        let prompts = generator.received_prompts();
        assert_eq!(prompts[0], "one\n\ntwo|q");
    }
}
