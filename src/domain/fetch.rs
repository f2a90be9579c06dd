//! Request lifecycle and filtering types for the listing fetch.
//!
//! This module defines the two small state machine enums that the fetch
//! controller publishes and consumes: [`FetchStatus`], the lifecycle of the
//! most recent request, and [`FilterMode`], the server-side query mode sent
//! with each fetch.

use serde::{Deserialize, Serialize};

/// Lifecycle status of the most recent listing fetch.
///
/// Published by the fetch controller through its status cell. Each fetch
/// attempt transitions `Loading -> Done` or `Loading -> Error`; a failed
/// fetch never discards the last successful listing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A fetch is in flight.
    Loading,

    /// The most recent fetch completed successfully.
    Done,

    /// The most recent fetch failed.
    ///
    /// The previously published listing collection, if any, remains valid
    /// (stale-but-valid display).
    Error,
}

/// Server-side query mode selecting a listing subset.
///
/// Transmitted as the `filter` query parameter of the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Only listings offered for rent.
    #[serde(alias = "rent")]
    ShowRent,

    /// Only listings offered for purchase.
    #[serde(alias = "buy")]
    ShowBuy,

    /// All listings regardless of transaction kind.
    #[serde(alias = "all")]
    ShowAll,
}

impl FilterMode {
    /// Returns the query-parameter value the server recognizes.
    #[must_use]
    pub fn query_value(self) -> &'static str {
        match self {
            Self::ShowRent => "rent",
            Self::ShowBuy => "buy",
            Self::ShowAll => "all",
        }
    }

    /// Parses a filter mode from either configuration spelling.
    ///
    /// Accepts the server query values produced by
    /// [`query_value`](Self::query_value) (`rent` / `buy` / `all`) as well
    /// as the snake_case variant names used in TOML configuration
    /// (`show_rent` / `show_buy` / `show_all`). Returns `None` for anything
    /// else.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rent" | "show_rent" => Some(Self::ShowRent),
            "buy" | "show_buy" => Some(Self::ShowBuy),
            "all" | "show_all" => Some(Self::ShowAll),
            _ => None,
        }
    }
}

impl Default for FilterMode {
    fn default() -> Self {
        Self::ShowAll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_round_trip() {
        for mode in [FilterMode::ShowRent, FilterMode::ShowBuy, FilterMode::ShowAll] {
            assert_eq!(FilterMode::parse(mode.query_value()), Some(mode));
        }
        assert_eq!(FilterMode::parse("lease"), None);
    }

    #[test]
    fn both_config_spellings_parse() {
        assert_eq!(FilterMode::parse("show_rent"), Some(FilterMode::ShowRent));
        assert_eq!(FilterMode::parse("show_buy"), Some(FilterMode::ShowBuy));
        assert_eq!(FilterMode::parse("show_all"), Some(FilterMode::ShowAll));

        // The short query values also deserialize in configuration files.
        #[derive(serde::Deserialize)]
        struct Wrapper {
            filter: FilterMode,
        }
        let wrapper: Wrapper = toml::from_str("filter = \"rent\"").unwrap();
        assert_eq!(wrapper.filter, FilterMode::ShowRent);
        let wrapper: Wrapper = toml::from_str("filter = \"show_buy\"").unwrap();
        assert_eq!(wrapper.filter, FilterMode::ShowBuy);
    }

    #[test]
    fn default_shows_everything() {
        assert_eq!(FilterMode::default(), FilterMode::ShowAll);
    }
}
