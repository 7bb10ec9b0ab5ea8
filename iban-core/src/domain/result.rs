//! Result and error types for the core library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    /// The IBAN field was missing or empty
    #[error("Invalid IBAN '{}'", .0.as_deref().unwrap_or("undefined"))]
    InvalidIban(Option<String>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid IBAN error for the rejected raw value
    pub fn invalid_iban(value: Option<impl Into<String>>) -> Self {
        Self::InvalidIban(value.map(Into::into))
    }

    /// True if this is a construction failure of an IBAN value
    pub fn is_invalid_iban(&self) -> bool {
        matches!(self, Self::InvalidIban(_))
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation result envelope (for `--json` output and FFI serialization)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.to_string()),
        }
    }
}
