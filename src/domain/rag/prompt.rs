//! Prompt template with named placeholders for context and question

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Bundled default prompt for retrieval-augmented answering
pub const DEFAULT_PROMPT_TEMPLATE: &str = "You are an assistant for question-answering tasks. \
Use the following pieces of retrieved context to answer the question. \
If you don't know the answer, just say that you don't know. \
Use three sentences maximum and keep the answer concise.\n\
Question: {question}\n\
Context: {context}\n\
Answer:";

const CONTEXT_PLACEHOLDER: &str = "{context}";
const QUESTION_PLACEHOLDER: &str = "{question}";

/// A prompt template supplied at construction time
///
/// The template must contain both a `{context}` and a `{question}`
/// placeholder; anything else is a configuration error caught at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template, validating the placeholders
    pub fn new(template: impl Into<String>) -> Result<Self, DomainError> {
        let template = template.into();

        if !template.contains(CONTEXT_PLACEHOLDER) {
            return Err(DomainError::configuration(
                "Prompt template is missing the {context} placeholder",
            ));
        }

        if !template.contains(QUESTION_PLACEHOLDER) {
            return Err(DomainError::configuration(
                "Prompt template is missing the {question} placeholder",
            ));
        }

        Ok(Self { template })
    }

    /// Render the final prompt for one question
    ///
    /// An empty context is rendered as-is; the template wording already
    /// covers the no-relevant-documents case.
    pub fn render(&self, context: &str, question: &str) -> String {
        self.template
            .replace(CONTEXT_PLACEHOLDER, context)
            .replace(QUESTION_PLACEHOLDER, question)
    }

    /// Get the raw template string
    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl TryFrom<String> for PromptTemplate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PromptTemplate> for String {
    fn from(value: PromptTemplate) -> Self {
        value.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_valid() {
        let template = PromptTemplate::default();
        assert!(PromptTemplate::new(template.as_str()).is_ok());
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = PromptTemplate::new("C: {context} Q: {question}").unwrap();
        let prompt = template.render("some facts", "why?");

        assert_eq!(prompt, "C: some facts Q: why?");
    }

    #[test]
    fn test_render_with_empty_context() {
        let template = PromptTemplate::new("C: {context} Q: {question}").unwrap();
        let prompt = template.render("", "why?");

        assert_eq!(prompt, "C:  Q: why?");
    }

    #[test]
    fn test_missing_context_placeholder_fails() {
        let result = PromptTemplate::new("Q: {question}");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_missing_question_placeholder_fails() {
        let result = PromptTemplate::new("C: {context}");
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_default_template_mentions_both_sections() {
        let prompt = PromptTemplate::default().render("the context", "the question");

        assert!(prompt.contains("the context"));
        assert!(prompt.contains("the question"));
    }
}
