//! # Unistate Runtime
//!
//! Runtime implementation for unidirectional state containers.
//!
//! This crate provides the [`Store`]: the single owner of a state tree and the
//! only entry point for changing it.
//!
//! ## Core Components
//!
//! - **Store**: Holds the current immutable snapshot and runs the reducer
//! - **Subscriptions**: Callbacks invoked after every dispatch
//! - **Snapshot channel**: A `watch` channel carrying the latest snapshot
//! - **Action log**: A `broadcast` channel carrying every dispatched action
//!
//! ## Example
//!
//! ```ignore
//! use unistate_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! let subscription = store.subscribe(|| println!("state changed"));
//! store.dispatch(Action::DoSomething);
//!
//! let value = store.state(|s| s.some_field);
//! subscription.unsubscribe();
//! ```

use unistate_core::reducer::Reducer;

/// Prometheus metrics for observability
pub mod metrics;

/// Store configuration
///
/// # Example
///
/// ```
/// use unistate_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(256);
/// assert_eq!(config.broadcast_capacity, 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of dispatched actions buffered for slow action observers
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    ///
    /// A capacity of zero is raised to one, the smallest buffer the
    /// broadcast channel accepts.
    #[must_use]
    pub const fn new(broadcast_capacity: usize) -> Self {
        Self {
            broadcast_capacity: clamp_capacity(broadcast_capacity),
        }
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = clamp_capacity(capacity);
        self
    }
}

const fn clamp_capacity(capacity: usize) -> usize {
    if capacity == 0 { 1 } else { capacity }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Reducer, StoreConfig, clamp_capacity};
    use crate::metrics::StoreMetrics;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};
    use std::time::Instant;
    use tokio::sync::{broadcast, watch};

    type Callback = Arc<dyn Fn() + Send + Sync>;

    /// Registered subscriber callbacks, in registration order
    type SubscriberList = Mutex<Vec<(u64, Callback)>>;

    /// The Store - single owner of a state tree
    ///
    /// The Store manages:
    /// 1. The current snapshot (an `Arc<S>` that is never mutated in place)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Subscribers notified after every dispatch
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Concurrency
    ///
    /// `dispatch` runs to completion before returning: reducer, snapshot
    /// swap, then notification. Concurrent callers are serialized on the
    /// state lock, so exactly one reducer runs at a time. Snapshots returned
    /// by [`Store::get_state`] can be read from any thread for as long as the
    /// caller keeps them.
    ///
    /// Dispatching from inside a subscriber callback is not supported. The
    /// store does not guard against it, but notification order for the outer
    /// dispatch is unspecified once a callback re-enters.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(RootState::default(), RootReducer::new(), env);
    ///
    /// store.dispatch(Action::Increment);
    /// assert_eq!(store.get_state().counter.value, 1);
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: RwLock<Arc<S>>,
        reducer: R,
        environment: E,
        subscribers: Arc<SubscriberList>,
        next_subscriber_id: AtomicU64,
        /// Latest snapshot for async observers.
        snapshots: watch::Sender<Arc<S>>,
        /// Every dispatched action, for observers such as action logs.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone + PartialEq,
        A: Clone + std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            let initial = Arc::new(initial_state);
            let (snapshots, _) = watch::channel(Arc::clone(&initial));
            let (action_broadcast, _) = broadcast::channel(clamp_capacity(config.broadcast_capacity));

            Self {
                state: RwLock::new(initial),
                reducer,
                environment,
                subscribers: Arc::new(Mutex::new(Vec::new())),
                next_subscriber_id: AtomicU64::new(0),
                snapshots,
                action_broadcast,
            }
        }

        /// Dispatch an action to the store
        ///
        /// 1. Clones the current snapshot and runs the reducer on the copy
        /// 2. Publishes the copy as the new snapshot if it differs; otherwise
        ///    the previous snapshot (same `Arc`) stays current
        /// 3. Pushes the snapshot to watchers and the action to action
        ///    observers, then invokes every subscriber
        ///
        /// Dispatch never fails: reducers are total, and "not found" style
        /// conditions are no-ops inside them.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates to the caller and the
        /// current snapshot is left as it was before the dispatch.
        #[tracing::instrument(skip_all, name = "store_dispatch")]
        pub fn dispatch(&self, action: A) {
            tracing::debug!(?action, "Processing action");

            let observed = action.clone();

            let changed = {
                let mut current = self.state.write().unwrap_or_else(PoisonError::into_inner);
                tracing::trace!("Acquired write lock on state");

                let start = Instant::now();
                let mut next = S::clone(&current);
                self.reducer.reduce(&mut next, action, &self.environment);
                let duration = start.elapsed();

                let changed = next != **current;
                if changed {
                    *current = Arc::new(next);
                    // Published under the lock so watchers never see snapshots out of order.
                    self.snapshots.send_replace(Arc::clone(&current));
                }

                // No receivers is not an error: nobody is observing actions.
                let _ = self.action_broadcast.send(observed);

                StoreMetrics::record_dispatch(duration, changed);
                changed
            };

            tracing::trace!(changed, "Reducer completed");

            self.notify_subscribers();

            tracing::debug!(changed, "Action processing completed");
        }

        /// Current snapshot of the state tree
        ///
        /// The returned snapshot is immutable and remains a valid
        /// point-in-time view after later dispatches.
        #[must_use]
        pub fn get_state(&self) -> Arc<S> {
            Arc::clone(&self.state.read().unwrap_or_else(PoisonError::into_inner))
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.counter.value);
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&state)
        }

        /// Register a callback invoked after every dispatch
        ///
        /// The callback receives no payload; it is expected to re-pull state
        /// with [`Store::get_state`]. Callbacks run in registration order on
        /// the dispatching thread.
        pub fn subscribe<F>(&self, callback: F) -> Subscription
        where
            F: Fn() + Send + Sync + 'static,
        {
            let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
            let count = {
                let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
                subscribers.push((id, Arc::new(callback)));
                subscribers.len()
            };

            StoreMetrics::record_subscribers(count);
            tracing::debug!(subscriber_id = id, subscribers = count, "Subscriber registered");

            Subscription {
                id,
                subscribers: Arc::downgrade(&self.subscribers),
            }
        }

        /// Number of currently registered subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Watch the latest snapshot
        ///
        /// The receiver starts at the current snapshot and is marked changed
        /// whenever a dispatch produces a different state. Actions that leave
        /// state unchanged do not wake watchers.
        #[must_use]
        pub fn watch(&self) -> watch::Receiver<Arc<S>> {
            self.snapshots.subscribe()
        }

        /// Subscribe to all actions dispatched to this store
        ///
        /// If the receiver lags behind by more than the configured broadcast
        /// capacity, it skips old actions and receives `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Access the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        fn notify_subscribers(&self) {
            // Copy the list so callbacks run without the lock held and may
            // subscribe or unsubscribe freely.
            let callbacks: Vec<Callback> = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect();

            tracing::trace!(subscribers = callbacks.len(), "Notifying subscribers");
            for callback in callbacks {
                callback();
            }
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .finish_non_exhaustive()
        }
    }

    /// Handle returned by [`Store::subscribe`]
    ///
    /// Dropping the handle keeps the callback registered; call
    /// [`Subscription::unsubscribe`] to remove it.
    #[derive(Debug)]
    pub struct Subscription {
        id: u64,
        subscribers: Weak<SubscriberList>,
    }

    impl Subscription {
        /// Identifier of this subscription, unique within its store
        #[must_use]
        pub const fn id(&self) -> u64 {
            self.id
        }

        /// Remove the callback from the store
        ///
        /// Returns `false` if the store has already been dropped or the
        /// callback was no longer registered.
        pub fn unsubscribe(self) -> bool {
            let Some(subscribers) = self.subscribers.upgrade() else {
                return false;
            };

            let mut subscribers = subscribers.lock().unwrap_or_else(PoisonError::into_inner);
            let before = subscribers.len();
            subscribers.retain(|(id, _)| *id != self.id);
            let removed = subscribers.len() != before;

            StoreMetrics::record_subscribers(subscribers.len());
            tracing::debug!(subscriber_id = self.id, removed, "Subscriber removed");

            removed
        }
    }
}

pub use store::{Store, Subscription};
