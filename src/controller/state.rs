//! Request lifecycle state.

use crate::geolocation::GeolocationRecord;

/// The one active phase of the lookup lifecycle.
///
/// ```text
/// Idle --submit--> Loading --ok--> Success
///                          --err or abandoned--> Error
/// Success | Error --submit--> Loading
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    /// Nothing submitted yet; holds the placeholder record.
    Idle {
        /// Record shown before the first lookup
        record: GeolocationRecord,
    },
    /// A lookup for `ip` is in flight.
    Loading {
        /// Address being looked up
        ip: String,
    },
    /// The last lookup succeeded.
    Success(GeolocationRecord),
    /// The last lookup failed; holds the user-facing message.
    Error(String),
}

impl RequestState {
    /// Initial state: `Idle` with an all-empty record.
    pub fn initial() -> Self {
        RequestState::Idle {
            record: GeolocationRecord::placeholder(),
        }
    }

    /// Whether a lookup is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    /// Record to display, if this state carries one.
    pub fn record(&self) -> Option<&GeolocationRecord> {
        match self {
            RequestState::Idle { record } | RequestState::Success(record) => Some(record),
            RequestState::Loading { .. } | RequestState::Error(_) => None,
        }
    }

    /// Failure message, if the last lookup failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short variant name for log output.
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle { .. } => "idle",
            RequestState::Loading { .. } => "loading",
            RequestState::Success(_) => "success",
            RequestState::Error(_) => "error",
        }
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self::initial()
    }
}
