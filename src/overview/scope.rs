//! Explicit cancellation context for controller-owned background work.
//!
//! [`TaskScope`] replaces the ambient lifecycle scope a UI framework would
//! provide with an explicit context object. The controller hands a clone of
//! its scope to every fetch thread; the thread checks the scope before
//! publishing so that cancellation stops the continuation from firing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation context shared between a controller and its fetch threads.
///
/// Cloning a scope shares the underlying flag. Cancellation is sticky: once
/// cancelled, a scope never becomes live again.
///
/// # Example
///
/// ```rust
/// use marsgrid::overview::TaskScope;
///
/// let scope = TaskScope::new();
/// let worker_view = scope.clone();
/// assert!(!worker_view.is_cancelled());
///
/// scope.cancel();
/// scope.cancel(); // idempotent
/// assert!(worker_view.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    cancelled: Arc<AtomicBool>,
}

impl TaskScope {
    /// Creates a live (not cancelled) scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the scope. Safe to call any number of times.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once the scope has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_sticky_and_idempotent() {
        let scope = TaskScope::new();
        assert!(!scope.is_cancelled());
        scope.cancel();
        scope.cancel();
        assert!(scope.is_cancelled());
    }

    #[test]
    fn clones_share_cancellation() {
        let scope = TaskScope::new();
        let clone = scope.clone();
        clone.cancel();
        assert!(scope.is_cancelled());
    }
}
