//! Payment-gated HTTP fetching.
//!
//! The controller only sees the [`PaidFetch`] trait: one GET that may involve a
//! payment round-trip, resolving to the final response. [`L402Client`] is the
//! reqwest-backed implementation; wallets plug in through [`InvoicePayer`].

mod l402;
mod response;
mod wallet;


use async_trait::async_trait;
use url::Url;

use crate::error_handling::FetchError;

// Re-export public API
pub use l402::{parse_challenge, L402Challenge, L402Client};
pub use response::HttpResponse;
pub use wallet::{InvoicePayer, NoWallet};

/// Performs a GET that may require paying for access before the server answers.
///
/// Implementations negotiate any payment-required challenge on their own and
/// return only the final response. Callers do no retrying of their own.
#[async_trait]
pub trait PaidFetch: Send + Sync {
    /// Fetches `url`, paying for it if the server demands payment.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the request, the payment, or the paid retry fails.
    async fn fetch(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}
