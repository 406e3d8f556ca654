//! L402 client: pay-on-402 and retry.
//!
//! A server that wants payment answers `402 Payment Required` with a challenge
//! such as:
//!
//! ```text
//! WWW-Authenticate: L402 macaroon="AGIAJEemVQUTEyNCR0exk7ek90Cg==", invoice="lnbc1500n1..."
//! ```
//!
//! The client pays the invoice, then repeats the request with
//! `Authorization: L402 <macaroon>:<preimage>`. Tokens are remembered per
//! endpoint (origin and path, query ignored) for the lifetime of the client, so
//! lookups of different addresses share one payment and the cache holds one
//! entry per endpoint. A cached token the server rejects is dropped and paid
//! for again.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex};

use async_trait::async_trait;
use log::{debug, info, warn};
use regex::Regex;
use reqwest::header::{HeaderValue, AUTHORIZATION, WWW_AUTHENTICATE};
use url::Url;

use super::response::HttpResponse;
use super::wallet::InvoicePayer;
use super::PaidFetch;
use crate::config::{DEFAULT_L402_HEADER_KEY, HTTP_STATUS_PAYMENT_REQUIRED, LEGACY_L402_SCHEME};
use crate::error_handling::FetchError;

/// `key=value` pairs; values may be double-quoted, single-quoted or bare.
static CHALLENGE_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\w+)=(?:"([^"]*)"|'([^']*)'|([^,\s]*))"#)
        .unwrap_or_else(|e| panic!("invalid L402 challenge pattern: {e}"))
});

/// Token and invoice extracted from a `WWW-Authenticate` challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L402Challenge {
    /// Macaroon (or legacy `token`) to present with the preimage
    pub token: String,
    /// BOLT11 invoice to pay
    pub invoice: String,
}

/// Parses an L402 (or legacy LSAT) `WWW-Authenticate` header value.
///
/// Returns `None` if the header uses another scheme or lacks either the
/// macaroon/token or the invoice.
pub fn parse_challenge(header: &str) -> Option<L402Challenge> {
    let header = header.trim();
    let (scheme, params) = header.split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case(DEFAULT_L402_HEADER_KEY)
        && !scheme.eq_ignore_ascii_case(LEGACY_L402_SCHEME)
    {
        return None;
    }

    let mut token = None;
    let mut invoice = None;
    for caps in CHALLENGE_PARAM_RE.captures_iter(params) {
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        match &caps[1] {
            "macaroon" | "token" => token = Some(value),
            "invoice" => invoice = Some(value),
            _ => {}
        }
    }

    match (token, invoice) {
        (Some(token), Some(invoice)) if !token.is_empty() && !invoice.is_empty() => {
            Some(L402Challenge { token, invoice })
        }
        _ => None,
    }
}

/// Key under which the token for `url` is cached: origin plus path.
pub(crate) fn token_cache_key(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}

/// reqwest-backed [`PaidFetch`] that settles L402 challenges through an [`InvoicePayer`].
pub struct L402Client {
    client: Arc<reqwest::Client>,
    payer: Arc<dyn InvoicePayer>,
    header_key: String,
    tokens: Mutex<HashMap<String, String>>,
}

impl L402Client {
    /// Creates a client that sends proofs of payment under the `L402` scheme.
    pub fn new(client: Arc<reqwest::Client>, payer: Arc<dyn InvoicePayer>) -> Self {
        Self {
            client,
            payer,
            header_key: DEFAULT_L402_HEADER_KEY.to_string(),
            tokens: Mutex::new(HashMap::new()),
        }
    }

    /// Overrides the scheme name used in the `Authorization` header.
    pub fn with_header_key(mut self, header_key: impl Into<String>) -> Self {
        self.header_key = header_key.into();
        self
    }

    fn cached_token(&self, url: &Url) -> Option<String> {
        self.tokens
            .lock()
            .ok()
            .and_then(|tokens| tokens.get(&token_cache_key(url)).cloned())
    }

    fn store_token(&self, url: &Url, token: String) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.insert(token_cache_key(url), token);
        }
    }

    fn forget_token(&self, url: &Url) {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.remove(&token_cache_key(url));
        }
    }

    async fn send(&self, url: &Url, token: Option<&str>) -> Result<reqwest::Response, FetchError> {
        let mut request = self.client.get(url.clone());
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("{} {}", self.header_key, token))?;
            request = request.header(AUTHORIZATION, value);
        }
        Ok(request.send().await?)
    }

    async fn into_http_response(response: reqwest::Response) -> Result<HttpResponse, FetchError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl PaidFetch for L402Client {
    async fn fetch(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let cached = self.cached_token(url);
        let response = self.send(url, cached.as_deref()).await?;
        if response.status().as_u16() != HTTP_STATUS_PAYMENT_REQUIRED {
            return Self::into_http_response(response).await;
        }

        if cached.is_some() {
            debug!("Cached L402 token rejected for {}, paying again", url.path());
            self.forget_token(url);
        }

        let header = response
            .headers()
            .get(WWW_AUTHENTICATE)
            .ok_or_else(|| FetchError::PaymentRequired("missing WWW-Authenticate header".into()))?
            .to_str()
            .map_err(|_| FetchError::PaymentRequired("non-ASCII WWW-Authenticate header".into()))?;
        let challenge = parse_challenge(header)
            .ok_or_else(|| FetchError::PaymentRequired(format!("unrecognized challenge: {header}")))?;

        info!("Paying L402 invoice for {}", url.path());
        let preimage = self
            .payer
            .pay_invoice(&challenge.invoice)
            .await
            .map_err(|e| FetchError::Payment(format!("{e:#}")))?;

        let token = format!("{}:{}", challenge.token, preimage);
        let retried = self.send(url, Some(&token)).await?;
        if retried.status().as_u16() == HTTP_STATUS_PAYMENT_REQUIRED {
            warn!("Server still requires payment for {} after settlement", url.path());
            return Err(FetchError::PaymentRequired(
                "payment was not accepted by the server".into(),
            ));
        }

        self.store_token(url, token);
        Self::into_http_response(retried).await
    }
}
