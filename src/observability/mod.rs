//! Tracing setup.
//!
//! Structured logging uses the `tracing` macros throughout the crate; this
//! module installs the subscriber. Library consumers that already run their
//! own subscriber can skip it entirely.

pub mod init;

pub use init::init_tracing;
