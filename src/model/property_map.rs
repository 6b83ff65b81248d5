//! PropertyMap: untyped nested data and additional (unknown) properties.

use std::collections::BTreeMap;
use super::Value;

/// A map of property names to values, ordered by name.
pub type PropertyMap = BTreeMap<String, Value>;

/// Convert a list of (key, value) pairs into a `Value::Map`.
impl<K, V> From<Vec<(K, V)>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self { Value::Map(map) }
}
