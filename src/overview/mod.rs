//! Fetch controller for the listing overview.
//!
//! This module implements the asynchronous data-fetch-and-publish flow: a
//! controller that owns a cancellable [`TaskScope`], runs the listing fetch
//! on a background thread, and publishes results through
//! [`StateCell`](crate::observe::StateCell) channels.
//!
//! # Data flow
//!
//! ```text
//! ListingSource ──fetch──▶ OverviewController ──▶ status / listings / selected
//!                                                        │
//!                                                  subscribers (UI)
//! ```
//!
//! - `status`: lifecycle of the most recent fetch
//! - `listings`: the last successfully fetched, non-empty collection
//! - `selected`: one-shot navigation target set by a row tap

pub mod controller;
pub mod scope;

pub use controller::OverviewController;
pub use scope::TaskScope;
