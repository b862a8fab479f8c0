//! Retrieval-augmented generation - context assembly, prompting and the
//! query pipeline

pub mod context;
pub mod pipeline;
pub mod prompt;

pub use context::{assemble_context, CHUNK_SEPARATOR};
pub use pipeline::{RagConfig, RagPipeline};
pub use prompt::{PromptTemplate, DEFAULT_PROMPT_TEMPLATE};
