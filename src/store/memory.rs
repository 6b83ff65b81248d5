//! In-memory backing store.
//!
//! This is the reference implementation of `BackingStore` and the one every
//! model gets unless the process-wide factory is replaced.
//!
//! ## Limitations
//!
//! - **Not shared**: each model owns its store outright. There is no
//!   interior locking; concurrent edits go through `&mut` like any struct.
//! - **Callbacks run inline**: subscribers are invoked synchronously inside
//!   `set()`, after the new value is stored.
//! - **Nested tracking is structural**: a nested model counts as changed
//!   only while it sits in this store as `Value::Object` (directly or inside
//!   a collection). Models in untyped maps are not inspected.

use std::fmt;

use hashbrown::HashMap;
use uuid::Uuid;

use crate::model::Value;
use crate::{Error, Result};
use super::{BackingStore, StoreCallback, StoreKey};

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    dirty: bool,
}

impl Entry {
    fn changed(&self) -> bool {
        self.dirty || value_is_dirty(&self.value)
    }
}

fn value_is_dirty(value: &Value) -> bool {
    match value {
        Value::Object(obj) => obj.get().backing_store().is_dirty(),
        Value::Collection(items) => items.iter().any(value_is_dirty),
        _ => false,
    }
}

fn for_each_nested_store(value: &mut Value, apply: &mut dyn FnMut(&mut dyn BackingStore)) {
    match value {
        Value::Object(obj) => apply(obj.get_mut().backing_store_mut()),
        Value::Collection(items) => {
            for item in items {
                for_each_nested_store(item, apply);
            }
        }
        _ => {}
    }
}

// ============================================================================
// InMemoryBackingStore
// ============================================================================

/// Hash map of entries with per-entry dirty flags.
pub struct InMemoryBackingStore {
    entries: HashMap<StoreKey, Entry>,
    subscribers: Vec<(String, StoreCallback)>,
    initialization_completed: bool,
    return_only_changed_values: bool,
}

impl InMemoryBackingStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            subscribers: Vec::new(),
            initialization_completed: true,
            return_only_changed_values: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&self, key: &StoreKey, previous: Option<&Value>, current: &Value) {
        for (_, callback) in &self.subscribers {
            callback(key, previous, current);
        }
    }
}

impl Default for InMemoryBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBackingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackingStore")
            .field("entries", &self.entries)
            .field("subscribers", &self.subscribers.len())
            .field("initialization_completed", &self.initialization_completed)
            .field("return_only_changed_values", &self.return_only_changed_values)
            .finish()
    }
}

impl BackingStore for InMemoryBackingStore {
    fn get(&self, key: &StoreKey) -> Option<&Value> {
        let entry = self.entries.get(key)?;
        if self.return_only_changed_values && !entry.changed() {
            return None;
        }
        Some(&entry.value)
    }

    fn peek(&self, key: &StoreKey) -> Option<&Value> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    fn get_mut(&mut self, key: &StoreKey) -> Option<&mut Value> {
        let completed = self.initialization_completed;
        let entry = self.entries.get_mut(key)?;
        if completed {
            entry.dirty = true;
        }
        Some(&mut entry.value)
    }

    fn set(&mut self, key: StoreKey, mut value: Value) {
        if self.entries.get(&key).is_some_and(|entry| entry.value == value) {
            return;
        }
        // nested models adopt this store's mode
        if self.return_only_changed_values {
            for_each_nested_store(&mut value, &mut |store| store.set_return_only_changed_values(true));
        }
        // a model attached after loading is new in full
        if self.initialization_completed {
            for_each_nested_store(&mut value, &mut |store| store.mark_all_dirty());
        }
        let entry = Entry { value, dirty: self.initialization_completed };
        let previous = self.entries.insert(key.clone(), entry);
        if !self.subscribers.is_empty() {
            if let Some(current) = self.entries.get(&key) {
                self.notify(&key, previous.as_ref().map(|e| &e.value), &current.value);
            }
        }
    }

    fn enumerate(&self) -> Vec<(&StoreKey, &Value)> {
        self.entries
            .iter()
            .filter(|(_, entry)| !self.return_only_changed_values || entry.changed())
            .map(|(key, entry)| (key, &entry.value))
            .collect()
    }

    fn entries(&self) -> Vec<(&StoreKey, &Value)> {
        self.entries.iter().map(|(key, entry)| (key, &entry.value)).collect()
    }

    fn keys_changed_to_null(&self) -> Vec<&StoreKey> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.dirty && entry.value.is_null())
            .map(|(key, _)| key)
            .collect()
    }

    fn is_changed(&self, key: &StoreKey) -> bool {
        self.entries.get(key).is_some_and(Entry::changed)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn subscribe(&mut self, callback: StoreCallback) -> String {
        let id = Uuid::new_v4().to_string();
        self.subscribers.push((id.clone(), callback));
        id
    }

    fn subscribe_with_id(&mut self, id: &str, callback: StoreCallback) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::InvalidKey(id.to_owned()));
        }
        match self.subscribers.iter_mut().find(|(existing, _)| existing == id) {
            Some(slot) => slot.1 = callback,
            None => self.subscribers.push((id.to_owned(), callback)),
        }
        Ok(())
    }

    fn unsubscribe(&mut self, id: &str) -> Result<()> {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| existing != id);
        if self.subscribers.len() == before {
            return Err(Error::UnknownSubscription(id.to_owned()));
        }
        Ok(())
    }

    fn initialization_completed(&self) -> bool {
        self.initialization_completed
    }

    fn set_initialization_completed(&mut self, completed: bool) {
        self.initialization_completed = completed;
        for entry in self.entries.values_mut() {
            entry.dirty = !completed;
            for_each_nested_store(&mut entry.value, &mut |store| {
                store.set_initialization_completed(completed)
            });
        }
    }

    fn return_only_changed_values(&self) -> bool {
        self.return_only_changed_values
    }

    fn set_return_only_changed_values(&mut self, changed_only: bool) {
        self.return_only_changed_values = changed_only;
        for entry in self.entries.values_mut() {
            for_each_nested_store(&mut entry.value, &mut |store| {
                store.set_return_only_changed_values(changed_only)
            });
        }
    }

    fn is_dirty(&self) -> bool {
        self.entries.values().any(Entry::changed)
    }

    fn mark_all_dirty(&mut self) {
        for entry in self.entries.values_mut() {
            entry.dirty = true;
            for_each_nested_store(&mut entry.value, &mut |store| store.mark_all_dirty());
        }
    }

    fn clone_store(&self) -> Box<dyn BackingStore> {
        Box::new(Self {
            entries: self.entries.clone(),
            subscribers: Vec::new(),
            initialization_completed: self.initialization_completed,
            return_only_changed_values: self.return_only_changed_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailAddress;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use pretty_assertions::assert_eq;

    const NAME: StoreKey = StoreKey::from_static("name");
    const AGE: StoreKey = StoreKey::from_static("age");

    #[test]
    fn test_set_marks_dirty_after_initialization() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        assert!(store.is_changed(&NAME));
        assert!(store.is_dirty());

        store.set_initialization_completed(true);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_set_during_initialization_is_clean() {
        let mut store = InMemoryBackingStore::new();
        store.set_initialization_completed(false);
        store.set(NAME, Value::from("Ada"));
        store.set_initialization_completed(true);
        assert!(!store.is_changed(&NAME));

        store.set(AGE, Value::from(36));
        assert!(store.is_changed(&AGE));
        assert!(!store.is_changed(&NAME));
    }

    #[test]
    fn test_equal_write_is_noop() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        store.set_initialization_completed(true);
        store.set(NAME, Value::from("Ada"));
        assert!(!store.is_changed(&NAME));
    }

    #[test]
    fn test_return_only_changed_values() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        store.set_initialization_completed(true);
        store.set(AGE, Value::from(36));

        store.set_return_only_changed_values(true);
        assert_eq!(store.get(&NAME), None);
        assert_eq!(store.get(&AGE), Some(&Value::from(36)));
        assert_eq!(store.peek(&NAME), Some(&Value::from("Ada")));
        assert_eq!(store.enumerate().len(), 1);
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_keys_changed_to_null() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        store.set(AGE, Value::from(36));
        store.set_initialization_completed(true);
        store.set(NAME, Value::Null);
        assert_eq!(store.keys_changed_to_null(), vec![&NAME]);
    }

    #[test]
    fn test_get_mut_marks_dirty() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        store.set_initialization_completed(true);
        if let Some(Value::String(s)) = store.get_mut(&NAME) {
            s.push_str(" Lovelace");
        }
        assert!(store.is_changed(&NAME));
        assert_eq!(store.peek(&NAME), Some(&Value::from("Ada Lovelace")));
    }

    #[test]
    fn test_subscribers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = InMemoryBackingStore::new();

        let seen = Arc::clone(&calls);
        let id = store.subscribe(Box::new(move |key, previous, current| {
            assert_eq!(key.as_str(), "name");
            if seen.fetch_add(1, Ordering::SeqCst) == 1 {
                assert_eq!(previous, Some(&Value::from("Ada")));
                assert_eq!(current, &Value::from("Grace"));
            }
        }));

        store.set(NAME, Value::from("Ada"));
        store.set(NAME, Value::from("Grace"));
        store.set(NAME, Value::from("Grace"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        store.unsubscribe(&id).unwrap();
        store.set(NAME, Value::from("Ada"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(matches!(store.unsubscribe(&id), Err(Error::UnknownSubscription(_))));
    }

    #[test]
    fn test_subscribe_with_id_replaces() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = InMemoryBackingStore::new();
        let first = Arc::clone(&calls);
        store.subscribe_with_id("audit", Box::new(move |_, _, _| { first.fetch_add(1, Ordering::SeqCst); })).unwrap();
        let second = Arc::clone(&calls);
        store.subscribe_with_id("audit", Box::new(move |_, _, _| { second.fetch_add(10, Ordering::SeqCst); })).unwrap();

        store.set(NAME, Value::from("Ada"));
        assert_eq!(calls.load(Ordering::SeqCst), 10);
        assert!(store.subscribe_with_id(" ", Box::new(|_, _, _| {})).is_err());
    }

    #[test]
    fn test_nested_model_dirtiness_propagates() {
        const ADDRESS: StoreKey = StoreKey::from_static("emailAddress");
        let mut store = InMemoryBackingStore::new();
        store.set(ADDRESS, Value::object(EmailAddress::new()));
        store.set_initialization_completed(true);
        assert!(!store.is_dirty());

        if let Some(Value::Object(obj)) = store.entries.get_mut(&ADDRESS).map(|e| &mut e.value) {
            let email = obj.downcast_mut::<EmailAddress>().unwrap();
            email.set_address(Some("ada@example.com".into()));
        }
        assert!(store.is_dirty());
        assert!(store.is_changed(&ADDRESS));
    }

    #[test]
    fn test_attaching_clean_model_marks_it_dirty() {
        use crate::serialization::Parsable;
        const ADDRESS: StoreKey = StoreKey::from_static("emailAddress");
        let mut email = EmailAddress::new();
        email.set_address(Some("ada@example.com".into()));
        email.backing_store_mut().set_initialization_completed(true);
        assert!(!email.backing_store().is_dirty());

        let mut store = InMemoryBackingStore::new();
        store.set(ADDRESS, Value::object(email));
        let attached = store.peek(&ADDRESS).and_then(Value::as_model::<EmailAddress>).unwrap();
        assert!(attached.backing_store().is_changed(&StoreKey::from_static("address")));
    }

    #[test]
    fn test_clone_drops_subscribers() {
        let mut store = InMemoryBackingStore::new();
        store.subscribe(Box::new(|_, _, _| {}));
        store.set(NAME, Value::from("Ada"));
        let copy = store.clone_store();
        assert_eq!(copy.peek(&NAME), Some(&Value::from("Ada")));
        assert!(copy.is_changed(&NAME));
        assert!(format!("{copy:?}").contains("subscribers: 0"));
    }

    #[test]
    fn test_clear() {
        let mut store = InMemoryBackingStore::new();
        store.set(NAME, Value::from("Ada"));
        store.clear();
        assert!(store.is_empty());
    }
}
