//! Marsgrid: the fetch-and-publish core of a Mars real-estate listing browser.
//!
//! Marsgrid fetches property listings from a remote JSON API and presents
//! them as a diffed, tappable grid. It provides:
//! - A fetch controller with a cancellable task scope and observable state
//! - Explicit single-value publish/subscribe state channels
//! - A grid adapter computing minimal row diffs and recycling rows
//! - A blocking HTTP client for the listing endpoint
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Demo binary (main.rs)                              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Overview Layer (overview/)                         │  ← Fetch controller
//! │  - Cancellable task scope                           │
//! │  - Background fetch threads                         │
//! │  - Status / listings / selection publication        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Observe Layer │   │ API Layer     │   │ Grid Layer    │
//! │ (observe/)    │   │ (api/)        │   │ (grid/)       │
//! │ - StateCell   │   │ - Trait seam  │   │ - Row diffing │
//! │ - Pub/sub     │   │ - HTTP client │   │ - Row binding │
//! │ - Replay      │   │               │   │ - Tap routing │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Listing model, filter modes, fetch status        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Data flow
//!
//! Data flows one direction: the API produces listings, the controller
//! publishes them, the adapter renders them, and taps flow back through the
//! caller's callback:
//!
//! ```text
//! ListingSource ──▶ OverviewController ──▶ StateCell channels ──▶ GridAdapter ──▶ rows
//!                                                                     │
//!                                                               tap ──▶ on_row_tapped
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core types (Listing, `FilterMode`, `FetchStatus`, errors)
//! - [`observe`]: Observable single-value state channels
//! - [`api`]: The listing-fetch collaborator (trait seam + HTTP client)
//! - [`overview`]: The fetch controller and its cancellation scope
//! - [`grid`]: The diffing list presentation adapter
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use marsgrid::{initialize, Config};
//! use marsgrid::domain::FilterMode;
//!
//! let config = Config::default();
//! let controller = initialize(&config)?;
//! controller.status().subscribe(|status| println!("status: {status:?}"));
//! controller.listings().subscribe(|listings| println!("{} listings", listings.len()));
//!
//! // Later, e.g. when the user picks a filter:
//! controller.refresh(FilterMode::ShowRent);
//! # Ok::<(), marsgrid::domain::MarsGridError>(())
//! ```

pub mod api;
pub mod domain;
pub mod grid;
pub mod observability;
pub mod observe;
pub mod overview;

pub use api::{ListingSource, MarsApiClient};
pub use domain::{FetchStatus, FilterMode, Listing, MarsGridError, Result};
pub use grid::{GridAdapter, RowBinder};
pub use observe::StateCell;
pub use overview::{OverviewController, TaskScope};

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

/// Crate configuration.
///
/// Values can come from [`Default`], a string map ([`Config::from_map`]) or a
/// TOML file ([`Config::from_file`]):
///
/// ```toml
/// # marsgrid.toml
/// base_url = "https://android-kotlin-fun-mars-server.appspot.com"
/// default_filter = "show_all"
/// trace_level = "info"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the listing server, without the `/realestate` path.
    pub base_url: String,

    /// Filter mode used for the initial fetch.
    pub default_filter: FilterMode,

    /// Tracing filter directive for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `tracing`
    /// filter directive. Default: unset (treated as `"info"`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://android-kotlin-fun-mars-server.appspot.com".to_string(),
            default_filter: FilterMode::ShowAll,
            trace_level: None,
        }
    }
}

/// On-disk TOML shape of [`Config`]; every field optional.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    default_filter: Option<FilterMode>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Recognized keys: `base_url`, `default_filter` (either filter
    /// spelling: `all` / `rent` / `buy` or `show_all` / `show_rent` /
    /// `show_buy`) and `trace_level`. Missing or unparsable values fall
    /// back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marsgrid::{Config, FilterMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_filter".to_string(), "rent".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_filter, FilterMode::ShowRent);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let default_filter = map
            .get("default_filter")
            .and_then(|s| FilterMode::parse(s))
            .unwrap_or(defaults.default_filter);

        Self {
            base_url: map.get("base_url").cloned().unwrap_or(defaults.base_url),
            default_filter,
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to defaults; an unreadable or unparsable file
    /// is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile =
            toml::from_str(&raw).map_err(|e| MarsGridError::Config(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            base_url: file.base_url.unwrap_or(defaults.base_url),
            default_filter: file.default_filter.unwrap_or(defaults.default_filter),
            trace_level: file.trace_level,
        })
    }
}

/// Builds a fetch controller wired to the configured listing server.
///
/// Creates a [`MarsApiClient`] for `config.base_url` and an
/// [`OverviewController`] that immediately fetches with
/// `config.default_filter`. Tracing is not initialized here; call
/// [`observability::init_tracing`] first if this process has no subscriber.
///
/// # Errors
///
/// Returns [`MarsGridError::Network`] if the HTTP client cannot be built.
pub fn initialize(config: &Config) -> Result<OverviewController> {
    tracing::debug!(base_url = %config.base_url, "initializing marsgrid");
    let client = MarsApiClient::new(config.base_url.clone())?;
    Ok(OverviewController::new(
        Arc::new(client),
        config.default_filter,
    ))
}
