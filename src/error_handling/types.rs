//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of the payment-gated HTTP exchange.
///
/// Payment failures and ordinary network failures are kept apart here so they
/// can be logged; the controller collapses all of them into one message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or body read failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The server asked for payment but its challenge could not be used.
    #[error("Payment required but challenge is unusable: {0}")]
    PaymentRequired(String),

    /// The wallet could not settle the invoice.
    #[error("Invoice payment failed: {0}")]
    Payment(String),

    /// Final response status was not a success.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// A header value could not be built from the token.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The lookup URL could not be built.
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Everything that can go wrong between `submit` and a parsed record.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The fetch itself failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The body did not have the geolocation record shape.
    #[error("Malformed geolocation response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Categories of lookup failures, used for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Request exceeded the client timeout
    HttpRequestTimeoutError,
    /// Could not connect to the endpoint
    HttpRequestConnectError,
    /// Failed to read or decode the body
    HttpRequestBodyError,
    /// Any other transport failure
    HttpRequestOtherError,
    /// 402 without a usable challenge, or a second 402 after paying
    PaymentChallengeError,
    /// Wallet refused or failed to pay
    PaymentSettlementError,
    /// Final status was not 2xx
    HttpStatusError,
    /// URL or header could not be built
    RequestBuildError,
    /// Body did not match the record shape
    ResponseParseError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::PaymentChallengeError => "Payment challenge error",
            ErrorType::PaymentSettlementError => "Payment settlement error",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::RequestBuildError => "Request build error",
            ErrorType::ResponseParseError => "Response parse error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_display_matches_as_str() {
        let all = [
            ErrorType::HttpRequestTimeoutError,
            ErrorType::HttpRequestConnectError,
            ErrorType::HttpRequestBodyError,
            ErrorType::HttpRequestOtherError,
            ErrorType::PaymentChallengeError,
            ErrorType::PaymentSettlementError,
            ErrorType::HttpStatusError,
            ErrorType::RequestBuildError,
            ErrorType::ResponseParseError,
        ];
        for error_type in all {
            assert_eq!(error_type.to_string(), error_type.as_str());
            assert!(!error_type.as_str().is_empty());
        }
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "Unexpected HTTP status 503"
        );
        assert!(FetchError::Payment("no route".into())
            .to_string()
            .contains("no route"));
    }

    #[test]
    fn test_lookup_error_is_transparent_over_fetch() {
        let err = LookupError::from(FetchError::Status(404));
        assert_eq!(err.to_string(), "Unexpected HTTP status 404");
    }

    #[test]
    fn test_lookup_error_from_parse() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LookupError::from(parse_err);
        assert!(err.to_string().starts_with("Malformed geolocation response"));
    }
}
