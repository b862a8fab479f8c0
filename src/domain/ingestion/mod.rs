//! Ingestion - turning uploaded documents into stored chunks

pub mod pipeline;

pub use pipeline::{IngestionPipeline, IngestionResult};
