//! The overview fetch controller.
//!
//! [`OverviewController`] coordinates one screen's worth of listing state:
//! it triggers fetches against a [`ListingSource`], publishes the outcome
//! through observable state cells, and carries the one-shot navigation
//! target for row taps.
//!
//! # Concurrency
//!
//! Each fetch runs on its own named background thread; the calling thread
//! never blocks on network I/O. Concurrent fetches (rapid filter changes)
//! are not serialized — the last one to complete wins. Disposing the
//! controller cancels its [`TaskScope`]; in-flight fetches finish their I/O
//! but publish nothing afterwards.

use std::sync::Arc;
use std::thread;

use crate::api::ListingSource;
use crate::domain::{FetchStatus, FilterMode, Listing};
use crate::observe::StateCell;
use crate::overview::TaskScope;

/// Fetch controller publishing listing state to observers.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use marsgrid::api::MarsApiClient;
/// use marsgrid::domain::FilterMode;
/// use marsgrid::overview::OverviewController;
///
/// let source = Arc::new(MarsApiClient::new("https://android-kotlin-fun-mars-server.appspot.com")?);
/// let controller = OverviewController::new(source, FilterMode::ShowAll);
/// controller.status().subscribe(|status| println!("status: {status:?}"));
/// # Ok::<(), marsgrid::domain::MarsGridError>(())
/// ```
pub struct OverviewController {
    status: StateCell<FetchStatus>,
    listings: StateCell<Vec<Listing>>,
    selected: StateCell<Option<Listing>>,
    source: Arc<dyn ListingSource>,
    scope: TaskScope,
}

impl OverviewController {
    /// Creates a controller and immediately triggers a fetch with `filter`.
    ///
    /// The status cell starts at [`FetchStatus::Loading`] so observers can
    /// display progress from the first frame, matching the eager initial
    /// fetch.
    #[must_use]
    pub fn new(source: Arc<dyn ListingSource>, filter: FilterMode) -> Self {
        let controller = Self {
            status: StateCell::new(FetchStatus::Loading),
            listings: StateCell::new(Vec::new()),
            selected: StateCell::new(None),
            source,
            scope: TaskScope::new(),
        };
        controller.spawn_fetch(filter);
        controller
    }

    /// The request lifecycle channel.
    #[must_use]
    pub fn status(&self) -> &StateCell<FetchStatus> {
        &self.status
    }

    /// The listing collection channel.
    ///
    /// Only ever replaced wholesale by a successful, non-empty fetch.
    #[must_use]
    pub fn listings(&self) -> &StateCell<Vec<Listing>> {
        &self.listings
    }

    /// The one-shot navigation target channel.
    ///
    /// `Some(listing)` while a detail navigation is pending, `None` once
    /// consumed.
    #[must_use]
    pub fn selected(&self) -> &StateCell<Option<Listing>> {
        &self.selected
    }

    /// The controller's cancellation scope.
    #[must_use]
    pub fn scope(&self) -> &TaskScope {
        &self.scope
    }

    /// Re-fetches with a new filter value.
    ///
    /// Does not cancel a fetch already in flight; whichever completes last
    /// determines the published state. Does nothing on a disposed controller.
    pub fn refresh(&self, filter: FilterMode) {
        self.spawn_fetch(filter);
    }

    /// Publishes `listing` as the pending navigation target.
    pub fn on_select(&self, listing: Listing) {
        self.selected.set(Some(listing));
    }

    /// Clears the navigation target after the navigation has been consumed.
    ///
    /// Idempotent: calling this with no pending target publishes nothing, so
    /// observers never see a duplicate clear (which would re-trigger
    /// navigation handling on reconfiguration).
    pub fn on_navigation_consumed(&self) {
        if self.selected.get().is_some() {
            self.selected.set(None);
        }
    }

    /// Cancels outstanding fetches and stops all further publication.
    ///
    /// Idempotent and safe to call from any thread. In-flight fetch threads
    /// run their I/O to completion but publish nothing once the scope is
    /// cancelled.
    pub fn dispose(&self) {
        self.scope.cancel();
    }

    fn spawn_fetch(&self, filter: FilterMode) {
        if self.scope.is_cancelled() {
            tracing::debug!("ignoring fetch on disposed controller");
            return;
        }

        self.status.set(FetchStatus::Loading);

        let source = Arc::clone(&self.source);
        let scope = self.scope.clone();
        let status = self.status.clone();
        let listings = self.listings.clone();

        let spawned = thread::Builder::new()
            .name("marsgrid-fetch".to_string())
            .spawn(move || {
                let result = source.fetch(filter);
                if scope.is_cancelled() {
                    tracing::debug!("scope cancelled, dropping fetch result");
                    return;
                }
                match result {
                    Ok(items) => {
                        if items.is_empty() {
                            // Empty success: keep the previous collection.
                            tracing::debug!(filter = filter.query_value(), "fetch returned no listings");
                        } else {
                            listings.set(items);
                        }
                        status.set(FetchStatus::Done);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, filter = filter.query_value(), "listing fetch failed");
                        status.set(FetchStatus::Error);
                    }
                }
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "failed to spawn fetch thread");
            self.status.set(FetchStatus::Error);
        }
    }
}

impl Drop for OverviewController {
    fn drop(&mut self) {
        self.dispose();
    }
}
