//! Generation - external language model interface

pub mod provider;

pub use provider::GenerationProvider;
