//! Single-value broadcast state container.
//!
//! [`StateCell`] reimplements the observable-state holder the controller
//! needs as an explicit primitive: a container holding the latest value, a
//! set of subscribers notified synchronously on every update, and
//! replay-latest-on-subscribe semantics. It is not a queue; intermediate
//! values published between an observer's reads are not retained.
//!
//! # Threading
//!
//! Cells are single-writer / multi-reader. Cloning a cell is cheap and
//! shares the underlying state, which is how the controller hands a cell to
//! its background fetch thread. Subscriber callbacks run on whichever thread
//! called [`StateCell::set`] (or, for the replayed value, the thread calling
//! [`StateCell::subscribe`]), outside the cell's value lock, so a callback
//! may safely call [`StateCell::get`] or [`StateCell::unsubscribe`] on the
//! same cell.
//!
//! Deliveries are totally ordered: registration-plus-replay and
//! store-plus-notify are serialized against each other, so a new subscriber
//! always receives the replayed value before any value published after its
//! registration. The cost is that a callback must not call `set` or
//! `subscribe` on its own cell; doing so deadlocks on the delivery order
//! lock.

use std::sync::{Arc, Mutex};

/// Handle identifying one subscriber of a [`StateCell`].
///
/// Returned by [`StateCell::subscribe`] and consumed by
/// [`StateCell::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct CellInner<T> {
    latest: T,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
    next_id: u64,
}

struct CellShared<T> {
    state: Mutex<CellInner<T>>,

    /// Serializes {store + notify} against {register + replay} so a new
    /// subscriber never observes a value older than one it was already
    /// notified with. Held across callback invocation; never acquired while
    /// `state` is held in a way visible to callbacks.
    order: Mutex<()>,
}

/// Observable single-value state channel with replay-latest semantics.
///
/// # Example
///
/// ```rust
/// use marsgrid::observe::StateCell;
/// use std::sync::mpsc;
///
/// let cell = StateCell::new(0);
/// let (tx, rx) = mpsc::channel();
/// cell.subscribe(move |value| {
///     let _ = tx.send(*value);
/// });
/// assert_eq!(rx.recv().unwrap(), 0); // replayed on subscribe
///
/// cell.set(7);
/// assert_eq!(rx.recv().unwrap(), 7);
/// assert_eq!(cell.get(), 7);
/// ```
pub struct StateCell<T> {
    shared: Arc<CellShared<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.shared.state.lock().expect("state cell lock poisoned");
        f.debug_struct("StateCell")
            .field("latest", &inner.latest)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone> StateCell<T> {
    /// Creates a cell holding `initial` as its latest value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(CellShared {
                state: Mutex::new(CellInner {
                    latest: initial,
                    subscribers: Vec::new(),
                    next_id: 0,
                }),
                order: Mutex::new(()),
            }),
        }
    }

    /// Returns a clone of the latest value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared
            .state
            .lock()
            .expect("state cell lock poisoned")
            .latest
            .clone()
    }

    /// Stores `value` as the latest value and notifies every subscriber.
    ///
    /// Subscribers are invoked synchronously, in subscription order, on the
    /// calling thread. Concurrent `set` and [`subscribe`](Self::subscribe)
    /// calls are serialized, so every subscriber sees values in store order
    /// starting from its replayed value.
    pub fn set(&self, value: T) {
        let _order = self
            .shared
            .order
            .lock()
            .expect("state cell order lock poisoned");
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.shared.state.lock().expect("state cell lock poisoned");
            inner.latest = value.clone();
            inner
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect()
        };
        for callback in callbacks {
            callback(&value);
        }
    }

    /// Registers a subscriber and replays the latest value to it.
    ///
    /// The callback is invoked once with the current value before this
    /// method returns, then again on every subsequent [`set`](Self::set)
    /// until unsubscribed. Registration and replay happen atomically with
    /// respect to `set`: a value stored after registration is always
    /// delivered after the replay, never before it.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriberId {
        let callback: Callback<T> = Arc::new(callback);
        let _order = self
            .shared
            .order
            .lock()
            .expect("state cell order lock poisoned");
        let (id, latest) = {
            let mut inner = self.shared.state.lock().expect("state cell lock poisoned");
            let id = SubscriberId(inner.next_id);
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&callback)));
            (id, inner.latest.clone())
        };
        callback(&latest);
        id
    }

    /// Removes a subscriber.
    ///
    /// Returns true if the subscriber was still registered. Unsubscribing an
    /// already-removed id is a no-op. Safe to call from within a callback.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut inner = self.shared.state.lock().expect("state cell lock poisoned");
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        inner.subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::thread;

    #[test]
    fn replays_latest_on_subscribe() {
        let cell = StateCell::new("initial");
        cell.set("updated");

        let (tx, rx) = mpsc::channel();
        cell.subscribe(move |value: &&str| {
            let _ = tx.send(*value);
        });
        assert_eq!(rx.recv().unwrap(), "updated");
    }

    #[test]
    fn notifies_all_subscribers_in_order() {
        let cell = StateCell::new(0);
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();
        cell.subscribe(move |v| {
            let _ = tx_a.send(*v);
        });
        cell.subscribe(move |v| {
            let _ = tx_b.send(*v);
        });
        // Drain the replayed initial values.
        assert_eq!(rx_a.recv().unwrap(), 0);
        assert_eq!(rx_b.recv().unwrap(), 0);

        cell.set(1);
        cell.set(2);
        assert_eq!(rx_a.recv().unwrap(), 1);
        assert_eq!(rx_a.recv().unwrap(), 2);
        assert_eq!(rx_b.recv().unwrap(), 1);
        assert_eq!(rx_b.recv().unwrap(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let cell = StateCell::new(0);
        let (tx, rx) = mpsc::channel();
        let id = cell.subscribe(move |v| {
            let _ = tx.send(*v);
        });
        assert_eq!(rx.recv().unwrap(), 0);

        assert!(cell.unsubscribe(id));
        assert!(!cell.unsubscribe(id));

        cell.set(9);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn callback_may_read_the_cell() {
        let cell = StateCell::new(5);
        let reader = cell.clone();
        let (tx, rx) = mpsc::channel();
        cell.subscribe(move |_| {
            let _ = tx.send(reader.get());
        });
        assert_eq!(rx.recv().unwrap(), 5);

        cell.set(6);
        assert_eq!(rx.recv().unwrap(), 6);
    }

    #[test]
    fn clones_share_state() {
        let cell = StateCell::new(1);
        let alias = cell.clone();
        alias.set(2);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn subscribing_during_writes_never_regresses() {
        // A subscriber registered while another thread is publishing must
        // see its replayed value first and store order afterwards; it must
        // never receive a value older than one it has already seen.
        let cell = StateCell::new(0u64);
        let writer_cell = cell.clone();
        let writer = thread::spawn(move || {
            for value in 1..=1000u64 {
                writer_cell.set(value);
            }
        });

        for _ in 0..50 {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&seen);
            let id = cell.subscribe(move |value: &u64| {
                sink.lock().unwrap().push(*value);
            });
            thread::yield_now();
            cell.unsubscribe(id);

            let seen = seen.lock().unwrap();
            assert!(!seen.is_empty());
            assert!(
                seen.windows(2).all(|pair| pair[0] <= pair[1]),
                "subscriber observed values out of order: {seen:?}"
            );
        }

        writer.join().unwrap();
    }
}
