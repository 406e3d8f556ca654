//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and parsing
//! - Categorization of lookup failures for logging
//!
//! Every lookup failure is collapsed into a single user-facing message by the
//! controller; the categories here only feed log output.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_lookup_error;
pub use types::{ErrorType, FetchError, InitializationError, LookupError};
