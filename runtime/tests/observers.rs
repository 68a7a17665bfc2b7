//! Integration tests for Store observers
//!
//! Covers the three ways a view layer can follow a store: subscriber
//! callbacks, the snapshot `watch` channel, and the action broadcast.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use unistate_core::reducer::Reducer;
use unistate_runtime::{Store, StoreConfig};
use unistate_testing::SubscriberProbe;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    Push(u32),
    Clear,
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct TestState {
    items: Vec<u32>,
}

struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            TestAction::Push(n) => state.items.push(n),
            TestAction::Clear => state.items.clear(),
            TestAction::Ignored => {},
        }
    }
}

type TestStore = Store<TestState, TestAction, (), TestReducer>;

fn test_store() -> TestStore {
    Store::new(TestState::default(), TestReducer, ())
}

// ============================================================================
// Subscriber callbacks
// ============================================================================

#[test]
fn callbacks_run_in_registration_order() {
    let store = test_store();
    let order = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        let _ = store.subscribe(move || order.lock().unwrap().push(name));
    }

    store.dispatch(TestAction::Push(1));

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn callbacks_can_repull_state() {
    let store = Arc::new(test_store());
    let seen = Arc::new(Mutex::new(Vec::new()));

    {
        let weak = Arc::downgrade(&store);
        let seen = Arc::clone(&seen);
        let _ = store.subscribe(move || {
            if let Some(store) = weak.upgrade() {
                seen.lock().unwrap().push(store.get_state().items.len());
            }
        });
    }

    store.dispatch(TestAction::Push(1));
    store.dispatch(TestAction::Push(2));
    store.dispatch(TestAction::Clear);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
}

#[test]
fn probe_counts_every_dispatch_including_noops() {
    let store = test_store();
    let probe = SubscriberProbe::new();
    let subscription = store.subscribe(probe.callback());

    store.dispatch(TestAction::Push(1));
    store.dispatch(TestAction::Ignored);
    assert_eq!(probe.calls(), 2);

    subscription.unsubscribe();
    store.dispatch(TestAction::Push(2));
    assert_eq!(probe.calls(), 2);
}

#[test]
fn unsubscribing_one_leaves_others() {
    let store = test_store();
    let kept = SubscriberProbe::new();
    let removed = SubscriberProbe::new();

    let _kept = store.subscribe(kept.callback());
    let gone = store.subscribe(removed.callback());
    assert_eq!(store.subscriber_count(), 2);

    assert!(gone.unsubscribe());
    store.dispatch(TestAction::Push(7));

    assert_eq!(kept.calls(), 1);
    assert_eq!(removed.calls(), 0);
    assert_eq!(store.subscriber_count(), 1);
}

// ============================================================================
// Snapshot channel
// ============================================================================

#[tokio::test]
async fn watch_receives_latest_snapshot() {
    let store = test_store();
    let mut rx = store.watch();

    assert!(rx.borrow().items.is_empty());

    store.dispatch(TestAction::Push(3));

    tokio::time::timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("watch should be notified")
        .expect("sender alive");
    assert_eq!(rx.borrow_and_update().items, vec![3]);
}

#[tokio::test]
async fn watch_is_not_woken_by_noops() {
    let store = test_store();
    let mut rx = store.watch();

    store.dispatch(TestAction::Ignored);

    assert!(!rx.has_changed().expect("sender alive"));
}

#[tokio::test]
async fn watch_snapshot_matches_get_state() {
    let store = test_store();
    let rx = store.watch();

    store.dispatch(TestAction::Push(1));
    store.dispatch(TestAction::Push(2));

    let watched = Arc::clone(&rx.borrow());
    assert!(Arc::ptr_eq(&watched, &store.get_state()));
}

// ============================================================================
// Action broadcast
// ============================================================================

#[tokio::test]
async fn actions_are_broadcast_in_dispatch_order() {
    let store = test_store();
    let mut rx = store.subscribe_actions();

    store.dispatch(TestAction::Push(1));
    store.dispatch(TestAction::Ignored);
    store.dispatch(TestAction::Clear);

    assert_eq!(rx.recv().await.unwrap(), TestAction::Push(1));
    assert_eq!(rx.recv().await.unwrap(), TestAction::Ignored);
    assert_eq!(rx.recv().await.unwrap(), TestAction::Clear);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn slow_action_observer_lags() {
    let store = Store::with_config(
        TestState::default(),
        TestReducer,
        (),
        StoreConfig::default().with_broadcast_capacity(2),
    );
    let mut rx = store.subscribe_actions();

    for n in 0..5 {
        store.dispatch(TestAction::Push(n));
    }

    assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(_))));
    // State is unaffected by observer lag
    assert_eq!(store.get_state().items, vec![0, 1, 2, 3, 4]);
}
