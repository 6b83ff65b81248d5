//! Swapping the process-wide backing store factory.
//!
//! Kept in its own test binary: the factory is global state.

use graph_models::models::Subscription;
use graph_models::prelude::*;
use graph_models::store::reset_backing_store_factory;
use graph_models::{InMemoryBackingStore, set_backing_store_factory};

fn changed_only_store() -> Box<dyn BackingStore> {
    let mut store = InMemoryBackingStore::new();
    store.set_return_only_changed_values(true);
    Box::new(store)
}

#[test]
fn test_factory_applies_to_new_models_until_reset() {
    set_backing_store_factory(changed_only_store);
    let mut sub = Subscription::new();
    assert!(sub.backing_store().return_only_changed_values());

    // clean entries read as absent in changed-only mode
    sub.set_resource(Some("me/events".into()));
    sub.backing_store_mut().set_initialization_completed(true);
    assert_eq!(sub.resource(), None);

    reset_backing_store_factory();
    let plain = Subscription::new();
    assert!(!plain.backing_store().return_only_changed_values());
}
