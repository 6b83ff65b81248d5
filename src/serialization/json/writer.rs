//! `SerializationWriter` that builds a `serde_json` document.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use crate::config::SerializationOptions;
use crate::model::{IsoDuration, PropertyMap, Value, wire};
use crate::serialization::{Parsable, SerializationWriter};
use crate::Result;

/// Collects written properties into a JSON object in write order.
///
/// Nested models are written through a child writer that inherits this
/// writer's options.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializationWriter {
    object: Map<String, JsonValue>,
    /// Set when a non-object value is written with an empty key.
    root: Option<JsonValue>,
    options: SerializationOptions,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SerializationOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Only write entries changed since the model was loaded.
    pub fn changed_only(mut self, changed_only: bool) -> Self {
        self.options.changed_only = changed_only;
        self
    }

    pub fn options(&self) -> &SerializationOptions {
        &self.options
    }

    /// The document written so far.
    pub fn to_json(&self) -> JsonValue {
        match &self.root {
            Some(root) => root.clone(),
            None => JsonValue::Object(self.object.clone()),
        }
    }

    pub fn into_json(self) -> JsonValue {
        match self.root {
            Some(root) => root,
            None => JsonValue::Object(self.object),
        }
    }

    fn child(&self) -> Self {
        Self::with_options(self.options.clone())
    }

    fn put(&mut self, key: &str, value: JsonValue) -> Result<()> {
        if !key.is_empty() {
            self.object.insert(key.to_owned(), value);
            return Ok(());
        }
        match value {
            JsonValue::Object(map) => self.object.extend(map),
            other => self.root = Some(other),
        }
        Ok(())
    }

    fn model_json(&self, model: &dyn Parsable) -> Result<JsonValue> {
        let mut child = self.child();
        model.serialize(&mut child)?;
        Ok(child.into_json())
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.put(key, JsonValue::String(value.to_owned()))
    }

    fn write_bool_value(&mut self, key: &str, value: bool) -> Result<()> {
        self.put(key, JsonValue::Bool(value))
    }

    fn write_byte_value(&mut self, key: &str, value: u8) -> Result<()> {
        self.put(key, JsonValue::from(value))
    }

    fn write_int8_value(&mut self, key: &str, value: i8) -> Result<()> {
        self.put(key, JsonValue::from(value))
    }

    fn write_int32_value(&mut self, key: &str, value: i32) -> Result<()> {
        self.put(key, JsonValue::from(value))
    }

    fn write_int64_value(&mut self, key: &str, value: i64) -> Result<()> {
        self.put(key, JsonValue::from(value))
    }

    fn write_float32_value(&mut self, key: &str, value: f32) -> Result<()> {
        self.put(key, wire::float_to_json(f64::from(value)))
    }

    fn write_float64_value(&mut self, key: &str, value: f64) -> Result<()> {
        self.put(key, wire::float_to_json(value))
    }

    fn write_uuid_value(&mut self, key: &str, value: &Uuid) -> Result<()> {
        self.put(key, JsonValue::String(value.to_string()))
    }

    fn write_byte_array_value(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.put(key, JsonValue::String(wire::encode_bytes(value)))
    }

    fn write_date_time_value(&mut self, key: &str, value: &DateTime<FixedOffset>) -> Result<()> {
        self.put(key, JsonValue::String(wire::format_date_time(value)))
    }

    fn write_date_value(&mut self, key: &str, value: &NaiveDate) -> Result<()> {
        self.put(key, JsonValue::String(wire::format_date(value)))
    }

    fn write_time_value(&mut self, key: &str, value: &NaiveTime) -> Result<()> {
        self.put(key, JsonValue::String(wire::format_time(value)))
    }

    fn write_duration_value(&mut self, key: &str, value: &IsoDuration) -> Result<()> {
        self.put(key, JsonValue::String(value.to_string()))
    }

    fn write_enum_value(&mut self, key: &str, symbol: &str) -> Result<()> {
        self.put(key, JsonValue::String(symbol.to_owned()))
    }

    fn write_null_value(&mut self, key: &str) -> Result<()> {
        self.put(key, JsonValue::Null)
    }

    fn write_collection_of_primitive_values(&mut self, key: &str, values: &[Value]) -> Result<()> {
        let items = values.iter().map(Value::to_json).collect::<Result<Vec<_>>>()?;
        self.put(key, JsonValue::Array(items))
    }

    fn write_object_value(&mut self, key: &str, value: &dyn Parsable) -> Result<()> {
        let json = self.model_json(value)?;
        self.put(key, json)
    }

    fn write_collection_of_object_values(&mut self, key: &str, values: &[&dyn Parsable]) -> Result<()> {
        let items = values
            .iter()
            .map(|model| self.model_json(*model))
            .collect::<Result<Vec<_>>>()?;
        self.put(key, JsonValue::Array(items))
    }

    fn write_map_value(&mut self, key: &str, value: &PropertyMap) -> Result<()> {
        let json = Value::Map(value.clone()).to_json()?;
        self.put(key, json)
    }

    fn write_additional_data(&mut self, data: &PropertyMap) -> Result<()> {
        if !self.options.include_additional_data {
            return Ok(());
        }
        for (key, value) in data {
            self.object.insert(key.clone(), value.to_json()?);
        }
        Ok(())
    }

    fn changed_only(&self) -> bool {
        self.options.changed_only
    }

    fn set_changed_only(&mut self, changed_only: bool) {
        self.options.changed_only = changed_only;
    }

    fn serialized_content(&self) -> Result<Vec<u8>> {
        let json = self.to_json();
        Ok(if self.options.pretty {
            serde_json::to_vec_pretty(&json)?
        } else {
            serde_json::to_vec(&json)?
        })
    }
}
