//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the lookup endpoint, user-facing messages, header names and timeouts.

/// Default geolocation lookup endpoint.
///
/// The API key and target IP are appended as the `apiKey` and `ip` query parameters.
pub const DEFAULT_ENDPOINT: &str = "https://api.ipgeolocation.io/ipgeo";

/// Environment variable holding the lookup API key.
pub const API_KEY_ENV: &str = "IPGEOLOCATION_API_KEY";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "apiKey";
/// Query parameter carrying the target IP address.
pub const IP_PARAM: &str = "ip";

/// Per-request timeout in seconds for the HTTP client.
///
/// The controller itself never times out a request; this bounds each HTTP
/// exchange (including the paid retry) made by the L402 client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_geolocation/", env!("CARGO_PKG_VERSION"));

/// The only failure message the controller ever exposes.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch geolocation data";

/// Message shown by the presentation layer when input fails validation.
pub const INVALID_IP_MESSAGE: &str = "Valid IP address is required.";

// L402 payment negotiation
/// Default scheme name used in the `Authorization` header after payment.
pub const DEFAULT_L402_HEADER_KEY: &str = "L402";
/// Legacy scheme name still sent by some servers in their challenge.
pub const LEGACY_L402_SCHEME: &str = "LSAT";
/// HTTP 402 Payment Required.
pub const HTTP_STATUS_PAYMENT_REQUIRED: u16 = 402;
