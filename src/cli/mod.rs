//! CLI module
//!
//! Provides the `serve` subcommand that runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Document Q&A API - retrieval-augmented question answering over uploaded documents
#[derive(Parser)]
#[command(name = "ragdoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
