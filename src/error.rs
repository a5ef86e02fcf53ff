//! Error types for the Coinspaid client library.

use std::collections::HashMap;

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all Coinspaid client operations.
#[derive(Error, Debug)]
pub enum CoinspaidError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Coinspaid API returned an error
    #[error("Coinspaid API error: {0}")]
    Api(ApiError),

    /// Coinspaid rejected the request parameters
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret are required")]
    MissingCredentials,
}

/// An error returned by the Coinspaid API itself.
///
/// Produced for any non-2xx response that is not a structured validation
/// failure. Coinspaid sends these as `{"error": message, "code": code}`;
/// when the body does not parse as that shape the raw body text becomes
/// the message and the code is left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// The operation path the request was sent to.
    pub endpoint: String,
    /// Human-readable error message.
    pub message: String,
    /// Machine-readable error code (e.g. "bad_header_key"), possibly empty.
    pub code: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.code.is_empty() {
            write!(f, "POST {} - {} {}", self.endpoint, self.status, self.message)
        } else {
            write!(
                f,
                "POST {} - {} {} ({})",
                self.endpoint, self.status, self.message, self.code
            )
        }
    }
}

impl ApiError {
    /// Create a new API error.
    pub fn new(
        status: StatusCode,
        endpoint: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            status,
            endpoint: endpoint.into(),
            message: message.into(),
            code: code.into(),
        }
    }

    /// Check if this error was caused by a missing or invalid `X-Processing-Key` header.
    pub fn is_bad_key_header(&self) -> bool {
        self.code == "bad_header_key"
    }

    /// Check if this error was caused by an invalid request signature.
    pub fn is_bad_signature(&self) -> bool {
        self.code == "bad_signature"
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED || self.status == StatusCode::FORBIDDEN
    }
}

/// A field validation error returned by the Coinspaid API with HTTP 400.
///
/// Coinspaid sends these as `{"errors": {field: message, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// The operation path the request was sent to.
    pub endpoint: String,
    /// Field name to human-readable message.
    pub errors: HashMap<String, String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        fields.sort();
        write!(f, "POST {} - {} {}", self.endpoint, self.status, fields.join(", "))
    }
}

impl ValidationError {
    /// Get the validation message for a specific field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(
            StatusCode::FORBIDDEN,
            "addresses/take",
            "Bad key header",
            "bad_header_key",
        );
        assert_eq!(
            error.to_string(),
            "POST addresses/take - 403 Forbidden Bad key header (bad_header_key)"
        );
        assert!(error.is_bad_key_header());
        assert!(error.is_unauthorized());
    }

    #[test]
    fn test_api_error_display_without_code() {
        let error = ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "withdrawal/crypto",
            "Internal Server Error",
            "",
        );
        assert_eq!(
            error.to_string(),
            "POST withdrawal/crypto - 500 Internal Server Error Internal Server Error"
        );
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_validation_error_field_lookup() {
        let error = ValidationError {
            status: StatusCode::BAD_REQUEST,
            endpoint: "addresses/take".to_string(),
            errors: HashMap::from([(
                "foreign_id".to_string(),
                "The foreign id field is required.".to_string(),
            )]),
        };
        assert_eq!(
            error.field("foreign_id"),
            Some("The foreign id field is required.")
        );
        assert_eq!(error.field("currency"), None);
        assert!(error.to_string().contains("foreign_id"));
    }
}
