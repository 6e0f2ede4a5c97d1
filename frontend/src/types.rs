//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Column Types** - header names with a selection flag
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Column Types
// =============================================================================

/// A column header paired with the user's inclusion flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Header name as returned by the backend
    pub name: String,
    /// Whether the user ticked this column
    pub selected: bool,
}

impl ColumnDescriptor {
    /// A fresh, unselected column.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `GET /headers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadersResponse {
    /// Column names of the generated table, in table order
    pub headers: Vec<String>,
}

/// Response from `GET /groups`.
///
/// The structure is owned by the backend; the client only keeps it
/// and prints it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupResult(pub Value);

impl GroupResult {
    /// Two-space indented JSON, stable for a given value.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// The raw JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for the backend exchange.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// The multipart payload could not be built.
    #[error("Payload error: {0}")]
    Payload(String),

    /// Request never got a response (connection refused, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The owning component was torn down mid-flight.
    #[error("Request cancelled")]
    Cancelled,
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
