//! Generation provider implementations

pub mod gemini;

pub use gemini::GeminiGenerationProvider;
