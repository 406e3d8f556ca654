//! Response body parsing.

use log::trace;

use super::types::GeolocationRecord;

/// Parses a lookup response body into a [`GeolocationRecord`].
///
/// The body must be a flat JSON object carrying all nine record fields as
/// strings. Unknown fields are ignored.
///
/// # Errors
///
/// Returns the `serde_json` error if the body is not JSON or does not have the
/// record shape.
pub fn parse_record(body: &[u8]) -> Result<GeolocationRecord, serde_json::Error> {
    let record: GeolocationRecord = serde_json::from_slice(body)?;
    trace!("Parsed geolocation record for {}", record.ip);
    Ok(record)
}
