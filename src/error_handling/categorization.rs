//! Error categorization.
//!
//! Maps typed lookup failures onto `ErrorType` so log lines carry a stable
//! category regardless of the underlying library error text.

use super::types::{ErrorType, FetchError, LookupError};

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::HttpRequestBodyError
    } else if error.is_builder() {
        ErrorType::RequestBuildError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes any lookup failure into an `ErrorType`.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::Fetch(fetch) => match fetch {
            FetchError::Transport(e) => categorize_reqwest_error(e),
            FetchError::PaymentRequired(_) => ErrorType::PaymentChallengeError,
            FetchError::Payment(_) => ErrorType::PaymentSettlementError,
            FetchError::Status(_) => ErrorType::HttpStatusError,
            FetchError::InvalidHeader(_) | FetchError::InvalidUrl(_) => {
                ErrorType::RequestBuildError
            }
        },
        LookupError::Parse(_) => ErrorType::ResponseParseError,
    }
}
