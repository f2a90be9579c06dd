//! Listing domain model.
//!
//! This module defines the core [`Listing`] type representing a single Mars
//! real-estate property record as returned by the remote API. Listings are
//! immutable once decoded; the fetch controller only ever replaces whole
//! collections of them.

use serde::{Deserialize, Serialize};

/// A single Mars real-estate property record.
///
/// Decoded from the listing API's JSON, where each element looks like:
///
/// ```json
/// {
///     "price": 450000,
///     "id": "424906",
///     "type": "rent",
///     "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/msss/01000/mcam/1000ML0044631300305227E03_DXXX.jpg"
/// }
/// ```
///
/// Equality is full structural equality over every field. The grid adapter's
/// diff policy relies on this (see [`ListingDiff`](crate::grid::ListingDiff)
/// for the exact, deliberately unconventional pairing of predicates).
///
/// # Example
///
/// ```rust
/// use marsgrid::domain::Listing;
///
/// let listing: Listing = serde_json::from_str(
///     r#"{"price": 2500.0, "id": "424906", "type": "rent", "img_src": "http://example.test/a.jpg"}"#,
/// ).unwrap();
/// assert!(listing.is_rental());
/// assert_eq!(listing.display_price(), "$2500/month");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier assigned by the listing server.
    pub id: String,

    /// URL of the property photograph.
    ///
    /// Image loading itself is out of scope for this crate; the URL is only
    /// carried through to row binding.
    pub img_src: String,

    /// Transaction kind: `"rent"` or `"buy"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Asking price in dollars; monthly for rentals.
    pub price: f64,
}

impl Listing {
    /// Returns true if this listing is offered for rent rather than purchase.
    #[must_use]
    pub fn is_rental(&self) -> bool {
        self.kind == "rent"
    }

    /// Formats the price for display: `$N/month` for rentals, `$N` otherwise.
    #[must_use]
    pub fn display_price(&self) -> String {
        if self.is_rental() {
            format!("${}/month", self.price)
        } else {
            format!("${}", self.price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental() -> Listing {
        Listing {
            id: "424906".to_string(),
            img_src: "http://example.test/a.jpg".to_string(),
            kind: "rent".to_string(),
            price: 1500.0,
        }
    }

    #[test]
    fn decodes_api_payload() {
        let json = r#"[
            {"price": 450000, "id": "424906", "type": "buy",
             "img_src": "http://mars.jpl.nasa.gov/img1.jpg"},
            {"price": 8000, "id": "424907", "type": "rent",
             "img_src": "http://mars.jpl.nasa.gov/img2.jpg"}
        ]"#;
        let listings: Vec<Listing> = serde_json::from_str(json).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].id, "424906");
        assert_eq!(listings[0].kind, "buy");
        assert!(!listings[0].is_rental());
        assert!(listings[1].is_rental());
    }

    #[test]
    fn display_price_distinguishes_rentals() {
        let mut listing = rental();
        assert_eq!(listing.display_price(), "$1500/month");
        listing.kind = "buy".to_string();
        assert_eq!(listing.display_price(), "$1500");
    }

    #[test]
    fn equality_is_structural() {
        let a = rental();
        let mut b = rental();
        assert_eq!(a, b);
        b.price = 1501.0;
        assert_ne!(a, b);
    }
}
