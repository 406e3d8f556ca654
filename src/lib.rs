//! ip_geolocation library: payment-gated IPv4 geolocation lookups
//!
//! Validates an IPv4 address, fetches its geolocation record from a metered API
//! that may demand an L402 (Lightning) payment first, and tracks the request
//! lifecycle (`Idle → Loading → Success | Error`) so that exactly one lookup is
//! in flight at a time.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ip_geolocation::initialization::init_client;
//! use ip_geolocation::{
//!     is_valid_ipv4, Config, GeolocationController, L402Client, NoWallet, RequestState,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config).await?;
//! let fetcher = Arc::new(L402Client::new(client, Arc::new(NoWallet)));
//! let controller = GeolocationController::new(fetcher, config.lookup);
//!
//! if is_valid_ipv4("8.8.8.8") {
//!     controller.submit("8.8.8.8").await;
//! }
//! if let RequestState::Success(record) = controller.state() {
//!     println!("{} is in {}", record.ip, record.country_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod controller;
mod error_handling;
pub mod fetch;
mod geolocation;
pub mod initialization;

// Re-export public API
pub use app::{is_valid_ipv4, render_state};
pub use config::{Config, LogFormat, LogLevel, LookupConfig};
pub use controller::{GeolocationController, RequestState, Submission};
pub use error_handling::{ErrorType, FetchError, InitializationError, LookupError};
pub use fetch::{HttpResponse, InvoicePayer, L402Client, NoWallet, PaidFetch};
pub use geolocation::{build_lookup_url, parse_record, GeolocationRecord};
