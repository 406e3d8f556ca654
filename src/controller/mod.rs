//! Geolocation request controller.
//!
//! Owns the [`RequestState`] cell and is its only writer. Observers read it
//! with [`GeolocationController::state`] or follow changes through
//! [`GeolocationController::subscribe`].
//!
//! At most one lookup is in flight: a submit that arrives while the state is
//! `Loading` is dropped, not queued, and the in-flight request is never
//! cancelled. Because of that, resolutions cannot interleave and need no
//! request ids. The controller applies no timeout of its own; bounding a hung
//! exchange is the fetch client's job. A caller may still abandon `submit`
//! (for example under `tokio::time::timeout`); the state then moves to `Error`
//! so a later submit is accepted.

mod state;


use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::config::{LookupConfig, FETCH_ERROR_MESSAGE};
use crate::error_handling::{categorize_lookup_error, FetchError, LookupError};
use crate::fetch::PaidFetch;
use crate::geolocation::{build_lookup_url, parse_record, GeolocationRecord};

pub use state::RequestState;

/// What happened to a call to [`GeolocationController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The lookup ran and the state now holds its outcome.
    Completed,
    /// A lookup was already in flight; this call did nothing.
    Ignored,
}

/// Drives lookups through the payment-gated client and tracks their lifecycle.
pub struct GeolocationController {
    client: Arc<dyn PaidFetch>,
    lookup: LookupConfig,
    state: watch::Sender<RequestState>,
}

impl GeolocationController {
    /// Creates a controller in the `Idle` state.
    pub fn new(client: Arc<dyn PaidFetch>, lookup: LookupConfig) -> Self {
        let (state, _) = watch::channel(RequestState::initial());
        Self {
            client,
            lookup,
            state,
        }
    }

    /// Looks up `ip` and records the outcome.
    ///
    /// `ip` is expected to have passed [`is_valid_ipv4`](crate::is_valid_ipv4)
    /// already; it is not checked again. The state becomes `Loading` before the
    /// fetch starts and `Success` or `Error` once it resolves. Failures never
    /// escape: every one of them ends in `Error` with the same generic message.
    pub async fn submit(&self, ip: &str) -> Submission {
        let mut entered_from = None;
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            entered_from = Some(state.name());
            *state = RequestState::Loading { ip: ip.to_string() };
            true
        });
        let Some(from) = entered_from else {
            debug!("Ignoring submit for {ip}: a lookup is already in flight");
            return Submission::Ignored;
        };
        debug!("Lookup state {from} -> loading");
        let guard = LoadingGuard {
            state: &self.state,
            armed: true,
        };

        info!("Looking up geolocation for {ip}");
        let next = match self.lookup(ip).await {
            Ok(record) => {
                info!(
                    "Geolocation for {}: {} / {}",
                    ip, record.country_name, record.isp
                );
                RequestState::Success(record)
            }
            Err(e) => {
                warn!(
                    "Geolocation lookup for {} failed ({}): {}",
                    ip,
                    categorize_lookup_error(&e),
                    e
                );
                RequestState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        guard.resolve(next);
        Submission::Completed
    }

    /// Current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    async fn lookup(&self, ip: &str) -> Result<GeolocationRecord, LookupError> {
        let url = build_lookup_url(&self.lookup, ip).map_err(FetchError::from)?;
        let response = self.client.fetch(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status()).into());
        }
        Ok(parse_record(response.body())?)
    }
}

/// Leaves `Loading` on every exit path of a started lookup.
///
/// Dropped while still armed, the `submit` future was abandoned mid-fetch and
/// the state falls back to the generic `Error`.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<RequestState>,
    armed: bool,
}

impl LoadingGuard<'_> {
    fn resolve(mut self, next: RequestState) {
        self.armed = false;
        let to = next.name();
        let from = self.state.send_replace(next);
        debug!("Lookup state {} -> {}", from.name(), to);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Geolocation lookup abandoned before it resolved");
        let from = self
            .state
            .send_replace(RequestState::Error(FETCH_ERROR_MESSAGE.to_string()));
        debug!("Lookup state {} -> error", from.name());
    }
}
