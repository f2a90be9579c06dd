//! Listing-fetch collaborator.
//!
//! This module defines [`ListingSource`], the seam between the fetch
//! controller and whatever actually produces listings, plus
//! [`MarsApiClient`], the HTTP implementation that talks to the Mars
//! real-estate listing endpoint.
//!
//! The controller only ever calls [`ListingSource::fetch`]; tests substitute
//! scripted sources through the same trait.

pub mod client;

pub use client::MarsApiClient;

use crate::domain::{FilterMode, Listing, Result};

/// Produces listings for a given server-side filter mode.
///
/// Implementations are blocking; the fetch controller always invokes
/// [`fetch`](Self::fetch) on a background thread so the calling thread never
/// blocks on network I/O.
pub trait ListingSource: Send + Sync {
    /// Fetches the listings matching `filter`.
    ///
    /// Returns every matching listing in server order, or an error if the
    /// fetch failed for any reason. An empty result is a successful fetch
    /// that matched nothing.
    fn fetch(&self, filter: FilterMode) -> Result<Vec<Listing>>;
}
