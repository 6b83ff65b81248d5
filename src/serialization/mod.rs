//! # Serialization Contracts
//!
//! Models never touch a wire format directly. Parsing goes through a
//! [`ParseNode`] tree, output through a [`SerializationWriter`], and the
//! model itself only supplies a [`ModelSchema`] describing its fields.
//!
//! ```text
//! bytes ──► ParseNode ──► ParsableFactory ──► assign_field_values ──► model
//! model ──► serialize_model ──► SerializationWriter ──► bytes
//! ```

pub mod schema;
pub mod enums;
pub mod discriminator;
pub mod json;
pub mod registry;

use std::any::Any;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::model::{IsoDuration, ObjectValue, PropertyMap, Value};
use crate::store::{ADDITIONAL_DATA, BackingStore};
use crate::{Error, Result};

pub use schema::{Field, FieldKind, ModelSchema, ParsableFactory, assign_field_values, serialize_model};
pub use enums::{EnumInfo, GraphEnum};
pub use discriminator::{Constructor, ODATA_TYPE, resolve_discriminator};

// ============================================================================
// Parsable
// ============================================================================

/// A model that can be built from a [`ParseNode`] and written to a
/// [`SerializationWriter`].
pub trait Parsable: Any + Send + Sync + fmt::Debug {
    /// Static field table for this type (parents reachable via `parent`).
    fn schema(&self) -> &'static ModelSchema;

    fn backing_store(&self) -> &dyn BackingStore;

    fn backing_store_mut(&mut self) -> &mut dyn BackingStore;

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<()> {
        serialize_model(self, writer)
    }

    fn clone_parsable(&self) -> Box<dyn Parsable>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Borrow a model as its concrete type.
pub fn downcast_ref<T: Parsable>(model: &dyn Parsable) -> Option<&T> {
    model.as_any().downcast_ref()
}

/// Take ownership of a model as its concrete type.
pub fn downcast<T: Parsable>(model: Box<dyn Parsable>) -> Result<Box<T>> {
    let got = model.schema().type_name;
    model.into_any().downcast::<T>().map_err(|_| Error::TypeMismatch {
        expected: std::any::type_name::<T>(),
        got: got.to_owned(),
    })
}

impl Clone for Box<dyn Parsable> {
    fn clone(&self) -> Self {
        self.clone_parsable()
    }
}

// ============================================================================
// Additional data
// ============================================================================

/// Properties the schema does not declare, kept so they round-trip.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> Option<&PropertyMap>;

    fn additional_data_mut(&mut self) -> &mut PropertyMap;

    fn set_additional_data(&mut self, data: PropertyMap);
}

impl<T: Parsable + ?Sized> AdditionalDataHolder for T {
    fn additional_data(&self) -> Option<&PropertyMap> {
        self.backing_store().get_map(&ADDITIONAL_DATA)
    }

    fn additional_data_mut(&mut self) -> &mut PropertyMap {
        let store = self.backing_store_mut();
        if !matches!(store.peek(&ADDITIONAL_DATA), Some(Value::Map(_))) {
            store.set(ADDITIONAL_DATA, Value::Map(PropertyMap::new()));
        }
        match store.get_mut(&ADDITIONAL_DATA) {
            Some(Value::Map(map)) => map,
            _ => unreachable!("additional data entry was just stored as a map"),
        }
    }

    fn set_additional_data(&mut self, data: PropertyMap) {
        self.backing_store_mut().set(ADDITIONAL_DATA, Value::Map(data));
    }
}

// ============================================================================
// Primitive kinds
// ============================================================================

/// Scalar kinds a field table can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Bool,
    Byte,
    Int8,
    Int32,
    Int64,
    Float32,
    Float64,
    Uuid,
    Bytes,
    DateTime,
    Date,
    Time,
    Duration,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Int8 => "sbyte",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Float32 => "float",
            PrimitiveKind::Float64 => "double",
            PrimitiveKind::Uuid => "uuid",
            PrimitiveKind::Bytes => "base64",
            PrimitiveKind::DateTime => "datetime",
            PrimitiveKind::Date => "date",
            PrimitiveKind::Time => "time",
            PrimitiveKind::Duration => "duration",
        }
    }
}

// ============================================================================
// ParseNode
// ============================================================================

/// One node of a parsed payload.
///
/// Scalar readers return `Ok(None)` for an explicit null and an error when
/// the node holds a different kind.
pub trait ParseNode {
    /// Named child of an object node; `None` when absent or not an object.
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>>;

    fn is_null(&self) -> bool;

    /// Visit every property of an object node, stopping at the first error.
    fn for_each_property(
        &self,
        visit: &mut dyn FnMut(&str, &dyn ParseNode) -> Result<()>,
    ) -> Result<()>;

    fn string_value(&self) -> Result<Option<String>>;
    fn bool_value(&self) -> Result<Option<bool>>;
    fn byte_value(&self) -> Result<Option<u8>>;
    fn int8_value(&self) -> Result<Option<i8>>;
    fn int32_value(&self) -> Result<Option<i32>>;
    fn int64_value(&self) -> Result<Option<i64>>;
    fn float32_value(&self) -> Result<Option<f32>>;
    fn float64_value(&self) -> Result<Option<f64>>;
    fn uuid_value(&self) -> Result<Option<Uuid>>;
    fn byte_array_value(&self) -> Result<Option<Vec<u8>>>;
    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>>;
    fn date_value(&self) -> Result<Option<NaiveDate>>;
    fn time_value(&self) -> Result<Option<NaiveTime>>;
    fn duration_value(&self) -> Result<Option<IsoDuration>>;

    /// Elements of an array node.
    fn collection_values(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>>;

    /// The node as an untyped value (maps, lists and scalars).
    fn untyped_value(&self) -> Result<Value>;
}

/// Composite readers built on the scalar ones.
impl dyn ParseNode + '_ {
    pub fn primitive_value(&self, kind: PrimitiveKind) -> Result<Option<Value>> {
        Ok(match kind {
            PrimitiveKind::String => self.string_value()?.map(Value::String),
            PrimitiveKind::Bool => self.bool_value()?.map(Value::Bool),
            PrimitiveKind::Byte => self.byte_value()?.map(Value::Byte),
            PrimitiveKind::Int8 => self.int8_value()?.map(Value::Int8),
            PrimitiveKind::Int32 => self.int32_value()?.map(Value::Int32),
            PrimitiveKind::Int64 => self.int64_value()?.map(Value::Int64),
            PrimitiveKind::Float32 => self.float32_value()?.map(Value::Float32),
            PrimitiveKind::Float64 => self.float64_value()?.map(Value::Float64),
            PrimitiveKind::Uuid => self.uuid_value()?.map(Value::Uuid),
            PrimitiveKind::Bytes => self.byte_array_value()?.map(Value::Bytes),
            PrimitiveKind::DateTime => self.date_time_value()?.map(Value::DateTime),
            PrimitiveKind::Date => self.date_value()?.map(Value::Date),
            PrimitiveKind::Time => self.time_value()?.map(Value::Time),
            PrimitiveKind::Duration => self.duration_value()?.map(Value::Duration),
        })
    }

    /// Array of scalars; null elements are dropped.
    pub fn collection_of_primitive_values(&self, kind: PrimitiveKind) -> Result<Option<Vec<Value>>> {
        let Some(items) = self.collection_values()? else { return Ok(None) };
        let mut out = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(value) = item.primitive_value(kind)? {
                out.push(value);
            }
        }
        Ok(Some(out))
    }

    /// Enum symbol, validated against the enum's symbol table.
    pub fn enum_value(&self, info: &EnumInfo) -> Result<Option<String>> {
        match self.string_value()? {
            Some(raw) => Ok(Some(info.validate(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn collection_of_enum_values(&self, info: &EnumInfo) -> Result<Option<Vec<Value>>> {
        let Some(items) = self.collection_values()? else { return Ok(None) };
        let mut out = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(symbol) = item.enum_value(info)? {
                out.push(Value::Enum(symbol));
            }
        }
        Ok(Some(out))
    }

    /// Build a model with `factory` and fill it from this node.
    pub fn object_value(&self, factory: ParsableFactory) -> Result<Option<Box<dyn Parsable>>> {
        if self.is_null() {
            return Ok(None);
        }
        let mut model = factory(self)?;
        assign_field_values(&mut *model, self)?;
        Ok(Some(model))
    }

    pub fn collection_of_object_values(
        &self,
        factory: ParsableFactory,
    ) -> Result<Option<Vec<Box<dyn Parsable>>>> {
        let Some(items) = self.collection_values()? else { return Ok(None) };
        let mut out = Vec::with_capacity(items.len());
        for item in &items {
            if let Some(model) = item.object_value(factory)? {
                out.push(model);
            }
        }
        Ok(Some(out))
    }
}

// ============================================================================
// SerializationWriter
// ============================================================================

/// Sink for model output. An empty `key` writes at the current level
/// instead of under a property name.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: &str) -> Result<()>;
    fn write_bool_value(&mut self, key: &str, value: bool) -> Result<()>;
    fn write_byte_value(&mut self, key: &str, value: u8) -> Result<()>;
    fn write_int8_value(&mut self, key: &str, value: i8) -> Result<()>;
    fn write_int32_value(&mut self, key: &str, value: i32) -> Result<()>;
    fn write_int64_value(&mut self, key: &str, value: i64) -> Result<()>;
    fn write_float32_value(&mut self, key: &str, value: f32) -> Result<()>;
    fn write_float64_value(&mut self, key: &str, value: f64) -> Result<()>;
    fn write_uuid_value(&mut self, key: &str, value: &Uuid) -> Result<()>;
    fn write_byte_array_value(&mut self, key: &str, value: &[u8]) -> Result<()>;
    fn write_date_time_value(&mut self, key: &str, value: &DateTime<FixedOffset>) -> Result<()>;
    fn write_date_value(&mut self, key: &str, value: &NaiveDate) -> Result<()>;
    fn write_time_value(&mut self, key: &str, value: &NaiveTime) -> Result<()>;
    fn write_duration_value(&mut self, key: &str, value: &IsoDuration) -> Result<()>;
    fn write_enum_value(&mut self, key: &str, symbol: &str) -> Result<()>;
    fn write_null_value(&mut self, key: &str) -> Result<()>;
    fn write_collection_of_primitive_values(&mut self, key: &str, values: &[Value]) -> Result<()>;
    fn write_object_value(&mut self, key: &str, value: &dyn Parsable) -> Result<()>;
    fn write_collection_of_object_values(&mut self, key: &str, values: &[&dyn Parsable]) -> Result<()>;
    fn write_map_value(&mut self, key: &str, value: &PropertyMap) -> Result<()>;
    fn write_additional_data(&mut self, data: &PropertyMap) -> Result<()>;

    /// Skip entries that have not changed since the model was loaded.
    fn changed_only(&self) -> bool {
        false
    }

    /// Switch changed-only output on or off for subsequent writes.
    fn set_changed_only(&mut self, _changed_only: bool) {}

    fn serialized_content(&self) -> Result<Vec<u8>>;
}

impl dyn SerializationWriter + '_ {
    /// Dispatch a stored value to the matching typed writer.
    pub fn write_any_value(&mut self, key: &str, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.write_null_value(key),
            Value::Bool(v) => self.write_bool_value(key, *v),
            Value::Byte(v) => self.write_byte_value(key, *v),
            Value::Int8(v) => self.write_int8_value(key, *v),
            Value::Int32(v) => self.write_int32_value(key, *v),
            Value::Int64(v) => self.write_int64_value(key, *v),
            Value::Float32(v) => self.write_float32_value(key, *v),
            Value::Float64(v) => self.write_float64_value(key, *v),
            Value::String(s) => self.write_string_value(key, s),
            Value::Uuid(u) => self.write_uuid_value(key, u),
            Value::Bytes(b) => self.write_byte_array_value(key, b),
            Value::DateTime(dt) => self.write_date_time_value(key, dt),
            Value::Date(d) => self.write_date_value(key, d),
            Value::Time(t) => self.write_time_value(key, t),
            Value::Duration(d) => self.write_duration_value(key, d),
            Value::Enum(symbol) => self.write_enum_value(key, symbol),
            Value::Map(map) => self.write_map_value(key, map),
            Value::Object(obj) => self.write_object_value(key, obj.get()),
            Value::Collection(items) => {
                let models: Option<Vec<&dyn Parsable>> = items
                    .iter()
                    .map(|item| match item {
                        Value::Object(obj) => Some(obj.get()),
                        _ => None,
                    })
                    .collect();
                match models {
                    Some(models) if !models.is_empty() => {
                        self.write_collection_of_object_values(key, &models)
                    }
                    _ => self.write_collection_of_primitive_values(key, items),
                }
            }
        }
    }
}

/// Wrap a parsed model for storage in a parent's backing store.
pub(crate) fn object_entry(model: Box<dyn Parsable>) -> Value {
    Value::Object(ObjectValue::from_boxed(model))
}
