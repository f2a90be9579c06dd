//! List presentation adapter for the listing grid.
//!
//! This module renders an ordered collection of listings as a list of visual
//! rows: [`diff`] computes the minimal row operations between the previous
//! and the new collection, [`GridAdapter`] applies them (creating, recycling
//! and rebinding rows through a [`RowBinder`]) and routes row taps to a
//! caller-supplied handler.
//!
//! # Modules
//!
//! - [`diff`]: Edit-script computation and the item diff policies
//! - [`adapter`]: Row lifecycle management and tap routing
//! - [`row`]: Plain-text row binding used by the demo binary and tests

pub mod adapter;
pub mod diff;
pub mod row;

pub use adapter::{GridAdapter, RowBinder};
pub use diff::{diff, ItemDiff, ListingDiff, RowOp};
pub use row::{TextRow, TextRowBinder};
