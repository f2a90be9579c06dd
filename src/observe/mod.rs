//! Observable single-value state channels.
//!
//! This module provides [`StateCell`], the explicit publish/subscribe
//! primitive the fetch controller publishes through. Each cell holds the
//! latest value of one piece of state, notifies subscribers synchronously on
//! update, and replays the latest value to new subscribers.

pub mod cell;

pub use cell::{StateCell, SubscriberId};
