//! Geolocation records and the lookup endpoint contract.
//!
//! The endpoint answers `GET {endpoint}?apiKey=..&ip=..` with a flat JSON
//! object whose fields map one to one onto [`GeolocationRecord`].

mod endpoint;
mod parse;
mod types;

// Re-export public API
pub use endpoint::build_lookup_url;
pub use parse::parse_record;
pub use types::GeolocationRecord;
