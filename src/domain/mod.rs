//! Domain layer for the marsgrid crate.
//!
//! This module contains the core domain types shared by the fetch controller
//! and the grid adapter, independent of any transport or presentation
//! concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`listing`]: The listing record returned by the Mars API
//! - [`fetch`]: Request lifecycle status and server-side filter modes

pub mod error;
pub mod fetch;
pub mod listing;

pub use error::{MarsGridError, Result};
pub use fetch::{FetchStatus, FilterMode};
pub use listing::Listing;
