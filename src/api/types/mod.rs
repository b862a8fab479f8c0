//! API request, response and error types

pub mod error;

use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};

/// POST /query request body
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// POST /query response body
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub answer: String,
}

/// POST /documents response body
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub document_id: String,
    pub chunks_created: usize,
}
