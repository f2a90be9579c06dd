//! HTTP client for the Mars real-estate listing endpoint.
//!
//! [`MarsApiClient`] wraps a blocking `reqwest` client around the single
//! operation this crate needs: `GET {base_url}/realestate?filter={mode}`,
//! decoding the JSON array of listing records. No timeout is configured; a
//! hung request hangs its fetch thread until the owning controller scope is
//! disposed.

use reqwest::blocking::Client;

use crate::api::ListingSource;
use crate::domain::{FilterMode, Listing, MarsGridError, Result};

const USER_AGENT: &str = concat!("marsgrid/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP implementation of [`ListingSource`].
///
/// # Example
///
/// ```no_run
/// use marsgrid::api::{ListingSource, MarsApiClient};
/// use marsgrid::domain::FilterMode;
///
/// let client = MarsApiClient::new("https://android-kotlin-fun-mars-server.appspot.com")?;
/// let listings = client.fetch(FilterMode::ShowRent)?;
/// println!("{} rentals on Mars", listings.len());
/// # Ok::<(), marsgrid::domain::MarsGridError>(())
/// ```
pub struct MarsApiClient {
    client: Client,
    base_url: String,
}

impl MarsApiClient {
    /// Creates a client for the listing server at `base_url`.
    ///
    /// Trailing slashes on the base URL are tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MarsGridError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn listings_url(&self, filter: FilterMode) -> String {
        format!("{}/realestate?filter={}", self.base_url, filter.query_value())
    }
}

impl ListingSource for MarsApiClient {
    fn fetch(&self, filter: FilterMode) -> Result<Vec<Listing>> {
        let url = self.listings_url(filter);
        tracing::debug!(url = %url, "fetching listings");

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| MarsGridError::Network(e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| MarsGridError::Network(e.to_string()))?;

        let listings: Vec<Listing> =
            serde_json::from_str(&body).map_err(|e| MarsGridError::Decode(e.to_string()))?;

        tracing::debug!(count = listings.len(), filter = filter.query_value(), "listings fetched");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_filtered_listing_urls() {
        let client = MarsApiClient::new("http://mars.test/").unwrap();
        assert_eq!(
            client.listings_url(FilterMode::ShowRent),
            "http://mars.test/realestate?filter=rent"
        );
        assert_eq!(
            client.listings_url(FilterMode::ShowAll),
            "http://mars.test/realestate?filter=all"
        );
    }
}
