//! Geolocation data structures.

use serde::Deserialize;

/// One successful lookup, exactly as the API returned it.
///
/// Every field is required on the wire: a missing field, `null`, or a
/// non-string value fails deserialization, so a partially populated record is
/// never built. Coordinates stay as strings to keep the source precision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeolocationRecord {
    /// Dotted-quad IPv4 address that was looked up
    pub ip: String,
    /// Continent name (may be empty)
    pub continent_name: String,
    /// Country name (may be empty)
    pub country_name: String,
    /// State or province (may be empty)
    #[serde(rename = "state_prov")]
    pub state_province: String,
    /// City (may be empty)
    pub city: String,
    /// Latitude as a decimal string
    pub latitude: String,
    /// Longitude as a decimal string
    pub longitude: String,
    /// Internet service provider (may be empty)
    pub isp: String,
    /// URL of the country flag image; empty means no flag
    #[serde(rename = "country_flag")]
    pub country_flag_url: String,
}

impl GeolocationRecord {
    /// Record with every field empty, shown before the first lookup.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether this is the all-empty placeholder.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// Whether the API supplied a flag image.
    pub fn has_flag(&self) -> bool {
        !self.country_flag_url.is_empty()
    }
}
