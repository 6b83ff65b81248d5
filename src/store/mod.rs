//! # Backing Store Trait
//!
//! This is THE contract between a model and wherever its properties live.
//! Models own no native fields; every accessor reads and writes through a
//! `BackingStore`, which also tracks what changed since the model was
//! loaded.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `InMemoryBackingStore` | `memory` | Hash map with per-entry dirty flags |
//!
//! New models ask [`new_backing_store`] for their store, so an application
//! can swap the implementation process-wide with [`set_backing_store_factory`].

pub mod memory;

use std::borrow::{Borrow, Cow};
use std::fmt;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::model::{FromValue, PropertyMap, Value};
use crate::serialization::{GraphEnum, Parsable};
use crate::{Error, Result};

pub use memory::InMemoryBackingStore;

// ============================================================================
// Keys
// ============================================================================

/// A validated backing store key: non-empty, no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey(Cow<'static, str>);

impl StoreKey {
    /// Key for a literal. Invalid literals fail const evaluation.
    pub const fn from_static(key: &'static str) -> Self {
        assert!(is_valid_key(key.as_bytes()), "backing store keys must be non-empty and trimmed");
        Self(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if is_valid_key(key.as_bytes()) {
            Ok(Self(Cow::Owned(key)))
        } else {
            Err(Error::InvalidKey(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_valid_key(bytes: &[u8]) -> bool {
    match bytes {
        [] => false,
        [first, .., last] => !first.is_ascii_whitespace() && !last.is_ascii_whitespace(),
        [only] => !only.is_ascii_whitespace(),
    }
}

impl Borrow<str> for StoreKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key every model keeps its unknown properties under.
pub const ADDITIONAL_DATA: StoreKey = StoreKey::from_static("additionalData");

// ============================================================================
// BackingStore trait
// ============================================================================

/// Change callback: `(key, previous value, new value)`.
pub type StoreCallback = Box<dyn Fn(&StoreKey, Option<&Value>, &Value) + Send + Sync>;

/// Property storage with change tracking.
///
/// An entry is *dirty* when it was written while initialization was
/// completed. Parsing runs with initialization switched off, so a freshly
/// deserialized model is clean and only later edits show up as changes.
pub trait BackingStore: Send + Sync + fmt::Debug {
    // --- Access ---

    /// Value for `key`. In changed-only mode, clean entries read as absent.
    fn get(&self, key: &StoreKey) -> Option<&Value>;

    /// Value for `key` regardless of the changed-only mode.
    fn peek(&self, key: &StoreKey) -> Option<&Value>;

    /// Mutable access; marks the entry dirty once initialization completed.
    fn get_mut(&mut self, key: &StoreKey) -> Option<&mut Value>;

    /// Store a value. Writing an equal value is a no-op.
    fn set(&mut self, key: StoreKey, value: Value);

    /// Entries visible under the current mode.
    fn enumerate(&self) -> Vec<(&StoreKey, &Value)>;

    /// Every entry regardless of the changed-only mode.
    fn entries(&self) -> Vec<(&StoreKey, &Value)>;

    /// Dirty entries holding `Null`.
    fn keys_changed_to_null(&self) -> Vec<&StoreKey>;

    /// Whether the entry is dirty, directly or through a nested model.
    fn is_changed(&self, key: &StoreKey) -> bool;

    fn clear(&mut self);

    // --- Subscriptions ---

    /// Register a change callback under a generated id.
    fn subscribe(&mut self, callback: StoreCallback) -> String;

    /// Register (or replace) a change callback under `id`.
    fn subscribe_with_id(&mut self, id: &str, callback: StoreCallback) -> Result<()>;

    fn unsubscribe(&mut self, id: &str) -> Result<()>;

    // --- Modes ---

    fn initialization_completed(&self) -> bool;

    /// Set the flag; every entry's dirty flag becomes `!completed`.
    fn set_initialization_completed(&mut self, completed: bool);

    fn return_only_changed_values(&self) -> bool;

    fn set_return_only_changed_values(&mut self, changed_only: bool);

    /// Any entry changed, including inside nested models.
    fn is_dirty(&self) -> bool;

    /// Flag every entry dirty, recursing into nested models.
    fn mark_all_dirty(&mut self);

    /// Copy values and flags. Subscribers are not carried over.
    fn clone_store(&self) -> Box<dyn BackingStore>;

    // --- Runtime keys ---

    fn try_get(&self, key: &str) -> Result<Option<&Value>> {
        let key = StoreKey::new(key)?;
        Ok(self.get(&key))
    }

    fn try_set(&mut self, key: &str, value: Value) -> Result<()> {
        self.set(StoreKey::new(key)?, value);
        Ok(())
    }
}

impl Clone for Box<dyn BackingStore> {
    fn clone(&self) -> Self {
        self.clone_store()
    }
}

/// Same keys with equal values, ignoring dirty flags and modes.
pub fn same_contents(a: &dyn BackingStore, b: &dyn BackingStore) -> bool {
    let entries = a.entries();
    entries.len() == b.entries().len()
        && entries.iter().all(|(key, value)| b.peek(key) == Some(*value))
}

// ============================================================================
// Typed access
// ============================================================================

fn mismatch(key: &StoreKey, expected: &'static str, found: &Value) {
    tracing::warn!(
        key = %key,
        expected,
        found = found.type_name(),
        "backing store value has unexpected kind"
    );
}

/// Typed reads used by generated accessors. A kind mismatch reads as
/// `None` and is logged.
impl dyn BackingStore + '_ {
    pub fn get_value<T: FromValue>(&self, key: &StoreKey) -> Option<T> {
        let value = self.get(key)?;
        if value.is_null() {
            return None;
        }
        let out = T::from_value(value);
        if out.is_none() {
            mismatch(key, std::any::type_name::<T>(), value);
        }
        out
    }

    pub fn get_str(&self, key: &StoreKey) -> Option<&str> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => {
                mismatch(key, "string", other);
                None
            }
        }
    }

    pub fn get_enum<E: GraphEnum>(&self, key: &StoreKey) -> Option<E> {
        match self.get(key)? {
            Value::Null => None,
            Value::Enum(symbol) => match E::parse(symbol) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "stored enum symbol does not parse");
                    None
                }
            },
            other => {
                mismatch(key, E::INFO.name, other);
                None
            }
        }
    }

    pub fn get_collection<T: FromValue>(&self, key: &StoreKey) -> Option<Vec<T>> {
        let items = self.collection(key)?;
        items.iter().filter(|item| !item.is_null()).map(T::from_value).collect()
    }

    pub fn get_enum_collection<E: GraphEnum>(&self, key: &StoreKey) -> Option<Vec<E>> {
        let items = self.collection(key)?;
        items
            .iter()
            .filter_map(Value::as_enum)
            .map(|symbol| E::parse(symbol).ok())
            .collect()
    }

    pub fn get_object<T: Parsable>(&self, key: &StoreKey) -> Option<&T> {
        match self.get(key)? {
            Value::Null => None,
            Value::Object(obj) => obj.downcast_ref(),
            other => {
                mismatch(key, "object", other);
                None
            }
        }
    }

    pub fn get_object_dyn(&self, key: &StoreKey) -> Option<&dyn Parsable> {
        match self.get(key)? {
            Value::Null => None,
            Value::Object(obj) => Some(obj.get()),
            other => {
                mismatch(key, "object", other);
                None
            }
        }
    }

    pub fn get_object_mut<T: Parsable>(&mut self, key: &StoreKey) -> Option<&mut T> {
        match self.get_mut(key)? {
            Value::Object(obj) => obj.downcast_mut(),
            _ => None,
        }
    }

    pub fn get_objects<T: Parsable>(&self, key: &StoreKey) -> Option<Vec<&T>> {
        let items = self.collection(key)?;
        Some(items.iter().filter_map(Value::as_model::<T>).collect())
    }

    pub fn get_objects_dyn(&self, key: &StoreKey) -> Option<Vec<&dyn Parsable>> {
        let items = self.collection(key)?;
        Some(items.iter().filter_map(Value::as_object).collect())
    }

    pub fn get_map(&self, key: &StoreKey) -> Option<&PropertyMap> {
        self.get(key)?.as_map()
    }

    fn collection(&self, key: &StoreKey) -> Option<&[Value]> {
        match self.get(key)? {
            Value::Null => None,
            Value::Collection(items) => Some(items),
            other => {
                mismatch(key, "collection", other);
                None
            }
        }
    }
}

// ============================================================================
// Process-wide factory
// ============================================================================

/// Builds the store a new model starts with.
pub type BackingStoreFactory = fn() -> Box<dyn BackingStore>;

fn in_memory_store() -> Box<dyn BackingStore> {
    Box::new(InMemoryBackingStore::new())
}

static FACTORY: Lazy<RwLock<BackingStoreFactory>> = Lazy::new(|| RwLock::new(in_memory_store));

/// Replace the factory used by every model constructor from now on.
pub fn set_backing_store_factory(factory: BackingStoreFactory) {
    *FACTORY.write() = factory;
}

/// Restore the in-memory default.
pub fn reset_backing_store_factory() {
    set_backing_store_factory(in_memory_store);
}

pub fn new_backing_store() -> Box<dyn BackingStore> {
    let factory = *FACTORY.read();
    factory()
}
