//! Error codes carried in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable error identifiers.
///
/// Integer ranges:
/// - 1000-1999: request and service errors
/// - 2000-2999: document store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No resource matches the request
    NotFound,

    /// Request could not be completed; includes rejected input
    InternalError,

    /// Store query or write failed
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code used as the `error_code` field in logs.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_identifiers() {
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InternalError.as_str(), "INTERNAL_ERROR");
        assert_eq!(ErrorCode::DatabaseError.to_string(), "DATABASE_ERROR");
    }

    #[test]
    fn test_error_code_integer_ranges() {
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::InternalError.code(), 1005);
        assert_eq!(ErrorCode::DatabaseError.code(), 2003);
    }

    #[test]
    fn test_error_code_serde_matches_as_str() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            let back: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, code);
        }
    }
}
