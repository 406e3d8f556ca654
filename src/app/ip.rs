//! IPv4 input validation.

use std::sync::LazyLock;

use regex::Regex;

/// Four dot-separated groups of one to three ASCII digits.
const IPV4_PATTERN: &str = r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$";

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile-time constant and known to be valid
    Regex::new(IPV4_PATTERN).unwrap_or_else(|e| panic!("invalid IPv4 pattern: {e}"))
});

/// Checks that `input` is a dotted-quad IPv4 address.
///
/// This is a syntactic check only: each group may be any 1–3 digit number, so
/// `999.1.1.1` passes. Input is not trimmed.
///
/// # Examples
///
/// ```
/// use ip_geolocation::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("8.8.8.8"));
/// assert!(!is_valid_ipv4("8.8.8"));
/// ```
pub fn is_valid_ipv4(input: &str) -> bool {
    IPV4_RE.is_match(input)
}
