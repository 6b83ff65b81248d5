//! Universal value type matching the Graph/OData primitive kinds.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use super::{IsoDuration, PropertyMap, wire};
use crate::Result;
use crate::serialization::{Parsable, json};
use crate::store;

/// A property value held by a backing store.
///
/// Covers every kind a generated model can declare:
/// - Scalars: Bool, Byte, Int8, Int32, Int64, Float32, Float64, String
/// - Identity/binary: Uuid, Bytes
/// - Temporal: DateTime, Date, Time, Duration
/// - Enum symbols (flag enums are comma-joined)
/// - Containers: Collection, Map (untyped), Object (a nested model)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(u8),
    Int8(i8),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Uuid(Uuid),
    Bytes(Vec<u8>),

    // Temporal types
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(IsoDuration),

    Enum(String),
    Collection(Vec<Value>),
    Map(PropertyMap),
    Object(ObjectValue),
}

// ============================================================================
// Nested models
// ============================================================================

/// A nested model stored as a property value.
///
/// Two object values are equal when they have the same model type and the
/// same stored values; dirty flags are not compared.
pub struct ObjectValue(Box<dyn Parsable>);

impl ObjectValue {
    pub fn new(model: impl Parsable) -> Self {
        Self(Box::new(model))
    }

    pub fn from_boxed(model: Box<dyn Parsable>) -> Self {
        Self(model)
    }

    pub fn get(&self) -> &dyn Parsable {
        &*self.0
    }

    pub fn get_mut(&mut self) -> &mut dyn Parsable {
        &mut *self.0
    }

    pub fn downcast_ref<T: Parsable>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Parsable>(&mut self) -> Option<&mut T> {
        self.0.as_any_mut().downcast_mut()
    }

    pub fn into_inner(self) -> Box<dyn Parsable> {
        self.0
    }
}

impl Clone for ObjectValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_parsable())
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectValue").field(&self.0).finish()
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.schema().type_name == other.0.schema().type_name
            && store::same_contents(self.0.backing_store(), other.0.backing_store())
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Byte(_) => "byte",
            Value::Int8(_) => "sbyte",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Float32(_) => "float",
            Value::Float64(_) => "double",
            Value::String(_) => "string",
            Value::Uuid(_) => "uuid",
            Value::Bytes(_) => "base64",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Duration(_) => "duration",
            Value::Enum(_) => "enum",
            Value::Collection(_) => "collection",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Build an object value from a model.
    pub fn object(model: impl Parsable) -> Self {
        Value::Object(ObjectValue::new(model))
    }

    /// Build a collection of object values from models.
    pub fn objects<T: Parsable>(models: Vec<T>) -> Self {
        Value::Collection(models.into_iter().map(Value::object).collect())
    }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Enum symbol (or comma-joined flag symbols).
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Value::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Attempt to extract as i64, widening the smaller integer kinds.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(i64::from(*v)),
            Value::Int8(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Attempt to extract as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Value]> {
        match self {
            Value::Collection(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&dyn Parsable> {
        match self {
            Value::Object(obj) => Some(obj.get()),
            _ => None,
        }
    }

    /// Downcast a nested model to its concrete type.
    pub fn as_model<T: Parsable>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.downcast_ref(),
            _ => None,
        }
    }
}

// ============================================================================
// Typed extraction
// ============================================================================

/// Strict conversion out of a [`Value`], used by the typed model getters.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value {
    ($ty:ty, $($variant:ident)|+) => {
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    $(Value::$variant(v) => Some(v.clone()),)+
                    _ => None,
                }
            }
        }
    };
}

from_value!(bool, Bool);
from_value!(u8, Byte);
from_value!(i8, Int8);
from_value!(i32, Int32);
from_value!(f32, Float32);
from_value!(String, String);
from_value!(Uuid, Uuid);
from_value!(Vec<u8>, Bytes);
from_value!(DateTime<FixedOffset>, DateTime);
from_value!(NaiveDate, Date);
from_value!(NaiveTime, Time);
from_value!(IsoDuration, Duration);

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> { value.as_int() }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> { value.as_float() }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<u8> for Value { fn from(v: u8) -> Self { Value::Byte(v) } }
impl From<i8> for Value { fn from(v: i8) -> Self { Value::Int8(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int32(v) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int64(v) } }
impl From<f32> for Value { fn from(v: f32) -> Self { Value::Float32(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float64(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<Uuid> for Value { fn from(v: Uuid) -> Self { Value::Uuid(v) } }
impl From<Vec<u8>> for Value { fn from(v: Vec<u8>) -> Self { Value::Bytes(v) } }
impl From<DateTime<FixedOffset>> for Value { fn from(v: DateTime<FixedOffset>) -> Self { Value::DateTime(v) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl From<NaiveTime> for Value { fn from(v: NaiveTime) -> Self { Value::Time(v) } }
impl From<IsoDuration> for Value { fn from(v: IsoDuration) -> Self { Value::Duration(v) } }
impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self { Value::Collection(v.into_iter().map(Value::String).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// JSON
// ============================================================================

impl Value {
    /// Untyped JSON → value, as used for additional data.
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int64(i),
                None => Value::Float64(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Collection(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::Map(
                map.iter().map(|(k, v)| (k.clone(), Value::from_json(v))).collect(),
            ),
        }
    }

    /// Value → JSON in its wire form.
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Byte(v) => JsonValue::from(*v),
            Value::Int8(v) => JsonValue::from(*v),
            Value::Int32(v) => JsonValue::from(*v),
            Value::Int64(v) => JsonValue::from(*v),
            Value::Float32(v) => wire::float_to_json(f64::from(*v)),
            Value::Float64(v) => wire::float_to_json(*v),
            Value::String(s) | Value::Enum(s) => JsonValue::String(s.clone()),
            Value::Uuid(u) => JsonValue::String(u.to_string()),
            Value::Bytes(b) => JsonValue::String(wire::encode_bytes(b)),
            Value::DateTime(dt) => JsonValue::String(wire::format_date_time(dt)),
            Value::Date(d) => JsonValue::String(wire::format_date(d)),
            Value::Time(t) => JsonValue::String(wire::format_time(t)),
            Value::Duration(d) => JsonValue::String(d.to_string()),
            Value::Collection(items) => JsonValue::Array(
                items.iter().map(Value::to_json).collect::<Result<_>>()?,
            ),
            Value::Map(map) => JsonValue::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), v.to_json()?)))
                    .collect::<Result<_>>()?,
            ),
            Value::Object(obj) => json::to_json_value(obj.get())?,
        })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Uuid(u) => write!(f, "{u}"),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::DateTime(dt) => write!(f, "{}", wire::format_date_time(dt)),
            Value::Date(d) => write!(f, "{}", wire::format_date(d)),
            Value::Time(t) => write!(f, "{}", wire::format_time(t)),
            Value::Duration(d) => write!(f, "{d}"),
            Value::Enum(s) => write!(f, "{s}"),
            Value::Collection(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Object(obj) => write!(f, "<{}>", obj.get().schema().type_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailAddress, SizeRange};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int32(42));
        assert_eq!(Value::from(42i64), Value::Int64(42));
        assert_eq!(Value::from(2.5), Value::Float64(2.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<bool>), Value::Null);
    }

    #[test]
    fn test_from_json_untyped() {
        let v = Value::from_json(&json!({"n": 3, "f": 1.5, "list": [true, null], "s": "x"}));
        let map = v.as_map().unwrap();
        assert_eq!(map["n"], Value::Int64(3));
        assert_eq!(map["f"], Value::Float64(1.5));
        assert_eq!(map["list"], Value::Collection(vec![Value::Bool(true), Value::Null]));
        assert_eq!(map["s"], Value::String("x".into()));
    }

    #[test]
    fn test_to_json_wire_forms() {
        let dt = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z").unwrap();
        assert_eq!(Value::DateTime(dt).to_json().unwrap(), json!("2024-05-01T12:00:00Z"));
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()).to_json().unwrap(),
            json!("2024-05-01")
        );
        assert_eq!(Value::Bytes(b"hi".to_vec()).to_json().unwrap(), json!("aGk="));
        assert_eq!(Value::Float64(f64::NAN).to_json().unwrap(), json!("NaN"));
        assert_eq!(Value::Enum("high".into()).to_json().unwrap(), json!("high"));
    }

    #[test]
    fn test_object_to_json() {
        let mut range = SizeRange::new();
        range.set_minimum_size(Some(1));
        range.set_maximum_size(Some(10));
        assert_eq!(
            Value::object(range).to_json().unwrap(),
            json!({"maximumSize": 10, "minimumSize": 1})
        );
    }

    #[test]
    fn test_object_equality_compares_contents() {
        let mut a = EmailAddress::new();
        a.set_address(Some("ada@example.com".into()));
        let mut b = EmailAddress::new();
        b.set_address(Some("ada@example.com".into()));
        assert_eq!(Value::object(a.clone()), Value::object(b));

        let mut c = EmailAddress::new();
        c.set_address(Some("grace@example.com".into()));
        assert_ne!(Value::object(a), Value::object(c));
        assert_ne!(Value::object(SizeRange::new()), Value::object(EmailAddress::new()));
    }

    #[test]
    fn test_strict_extraction() {
        assert_eq!(i32::from_value(&Value::Int32(7)), Some(7));
        assert_eq!(i32::from_value(&Value::Int64(7)), None);
        assert_eq!(i64::from_value(&Value::Int32(7)), Some(7));
        assert_eq!(String::from_value(&Value::Enum("x".into())), None);
    }
}
