//! `ParseNode` over a `serde_json::Value` tree.

use std::borrow::Cow;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::model::{IsoDuration, Value, wire};
use crate::serialization::{Parsable, ParsableFactory, ParseNode};
use crate::{Error, Result};

/// A JSON node, either owning its document or borrowing a subtree.
#[derive(Debug, Clone)]
pub struct JsonParseNode<'a> {
    value: Cow<'a, JsonValue>,
}

impl JsonParseNode<'static> {
    pub fn from_slice(content: &[u8]) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_slice(content)?))
    }

    pub fn from_str(content: &str) -> Result<Self> {
        Ok(Self::from_value(serde_json::from_str(content)?))
    }

    pub fn from_value(value: JsonValue) -> Self {
        Self { value: Cow::Owned(value) }
    }
}

impl<'a> JsonParseNode<'a> {
    pub fn borrowed(value: &'a JsonValue) -> Self {
        Self { value: Cow::Borrowed(value) }
    }

    pub fn json(&self) -> &JsonValue {
        &self.value
    }

    /// Shorthand for [`ParseNode`]'s `object_value` on a concrete node.
    pub fn object_value(&self, factory: ParsableFactory) -> Result<Option<Box<dyn Parsable>>> {
        (self as &dyn ParseNode).object_value(factory)
    }

    fn string(&self, kind: &'static str) -> Result<Option<&str>> {
        match &*self.value {
            JsonValue::Null => Ok(None),
            JsonValue::String(s) => Ok(Some(s)),
            other => Err(mismatch(kind, other)),
        }
    }

    fn integer<T: TryFrom<i64>>(&self, kind: &'static str) -> Result<Option<T>> {
        match &*self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Number(n) => {
                let wide = n.as_i64().ok_or_else(|| mismatch(kind, &self.value))?;
                T::try_from(wide)
                    .map(Some)
                    .map_err(|_| Error::InvalidValue { kind, value: n.to_string() })
            }
            other => Err(mismatch(kind, other)),
        }
    }

    fn float(&self, kind: &'static str) -> Result<Option<f64>> {
        if self.value.is_null() {
            return Ok(None);
        }
        wire::float_from_json(&self.value)
            .map(Some)
            .ok_or_else(|| mismatch(kind, &self.value))
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, value: &JsonValue) -> Error {
    Error::TypeMismatch { expected, got: json_kind(value).to_owned() }
}

impl ParseNode for JsonParseNode<'_> {
    fn child_node(&self, name: &str) -> Option<Box<dyn ParseNode + '_>> {
        let child = self.value.as_object()?.get(name)?;
        Some(Box::new(JsonParseNode::borrowed(child)))
    }

    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn for_each_property(
        &self,
        visit: &mut dyn FnMut(&str, &dyn ParseNode) -> Result<()>,
    ) -> Result<()> {
        let map = self.value.as_object().ok_or_else(|| mismatch("object", &self.value))?;
        for (name, value) in map {
            visit(name.as_str(), &JsonParseNode::borrowed(value))?;
        }
        Ok(())
    }

    fn string_value(&self) -> Result<Option<String>> {
        Ok(self.string("string")?.map(str::to_owned))
    }

    fn bool_value(&self) -> Result<Option<bool>> {
        match &*self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Bool(b) => Ok(Some(*b)),
            other => Err(mismatch("boolean", other)),
        }
    }

    fn byte_value(&self) -> Result<Option<u8>> {
        self.integer("byte")
    }

    fn int8_value(&self) -> Result<Option<i8>> {
        self.integer("sbyte")
    }

    fn int32_value(&self) -> Result<Option<i32>> {
        self.integer("int32")
    }

    fn int64_value(&self) -> Result<Option<i64>> {
        self.integer("int64")
    }

    fn float32_value(&self) -> Result<Option<f32>> {
        self.float("float")?
            .map(|v| {
                let narrowed = v as f32;
                if v.is_finite() && !narrowed.is_finite() {
                    return Err(Error::InvalidValue { kind: "float", value: v.to_string() });
                }
                Ok(narrowed)
            })
            .transpose()
    }

    fn float64_value(&self) -> Result<Option<f64>> {
        self.float("double")
    }

    fn uuid_value(&self) -> Result<Option<Uuid>> {
        self.string("uuid")?
            .map(|s| Uuid::parse_str(s).map_err(|_| Error::InvalidValue { kind: "uuid", value: s.to_owned() }))
            .transpose()
    }

    fn byte_array_value(&self) -> Result<Option<Vec<u8>>> {
        self.string("base64")?.map(wire::decode_bytes).transpose()
    }

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.string("datetime")?.map(wire::parse_date_time).transpose()
    }

    fn date_value(&self) -> Result<Option<NaiveDate>> {
        self.string("date")?.map(wire::parse_date).transpose()
    }

    fn time_value(&self) -> Result<Option<NaiveTime>> {
        self.string("time")?.map(wire::parse_time).transpose()
    }

    fn duration_value(&self) -> Result<Option<IsoDuration>> {
        self.string("duration")?.map(|s| s.parse::<IsoDuration>()).transpose()
    }

    fn collection_values(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>> {
        match &*self.value {
            JsonValue::Null => Ok(None),
            JsonValue::Array(items) => Ok(Some(
                items
                    .iter()
                    .map(|item| Box::new(JsonParseNode::borrowed(item)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            other => Err(mismatch("collection", other)),
        }
    }

    fn untyped_value(&self) -> Result<Value> {
        Ok(Value::from_json(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::PrimitiveKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node(value: JsonValue) -> JsonParseNode<'static> {
        JsonParseNode::from_value(value)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(node(json!("x")).string_value().unwrap(), Some("x".into()));
        assert_eq!(node(json!(null)).string_value().unwrap(), None);
        assert_eq!(node(json!(true)).bool_value().unwrap(), Some(true));
        assert_eq!(node(json!(7)).int32_value().unwrap(), Some(7));
        assert_eq!(node(json!(-7)).int8_value().unwrap(), Some(-7));
        assert_eq!(node(json!(1.25)).float64_value().unwrap(), Some(1.25));
        assert_eq!(node(json!(3)).float32_value().unwrap(), Some(3.0));
    }

    #[test]
    fn test_integer_range_checks() {
        assert!(matches!(node(json!(300)).byte_value(), Err(Error::InvalidValue { kind: "byte", .. })));
        assert!(node(json!(-1)).byte_value().is_err());
        assert!(node(json!(4_000_000_000i64)).int32_value().is_err());
        assert!(matches!(node(json!(1.5)).int32_value(), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_float32_range_check() {
        assert!(matches!(node(json!(1e300)).float32_value(), Err(Error::InvalidValue { kind: "float", .. })));
        assert!(node(json!(-1e300)).float32_value().is_err());
        assert_eq!(node(json!(1e300)).float64_value().unwrap(), Some(1e300));
        assert_eq!(node(json!(2.5)).float32_value().unwrap(), Some(2.5f32));
    }

    #[test]
    fn test_kind_mismatch() {
        let err = node(json!(1)).string_value().unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected string, got number");
        assert!(node(json!("true")).bool_value().is_err());
    }

    #[test]
    fn test_special_float_strings() {
        assert_eq!(node(json!("INF")).float64_value().unwrap(), Some(f64::INFINITY));
        assert_eq!(node(json!("-INF")).float32_value().unwrap(), Some(f32::NEG_INFINITY));
        assert!(node(json!("NaN")).float64_value().unwrap().unwrap().is_nan());
        assert!(node(json!("1.0")).float64_value().is_err());
    }

    #[test]
    fn test_text_encoded_kinds() {
        let id = node(json!("6f1b8d2e-4b8e-4d2a-9d0e-0a1b2c3d4e5f")).uuid_value().unwrap().unwrap();
        assert_eq!(id.to_string(), "6f1b8d2e-4b8e-4d2a-9d0e-0a1b2c3d4e5f");
        assert!(node(json!("not-a-uuid")).uuid_value().is_err());

        assert_eq!(node(json!("AQID")).byte_array_value().unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(
            node(json!("2024-02-29")).date_value().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            node(json!("P1D")).duration_value().unwrap(),
            Some(IsoDuration::from_days(1))
        );
        assert!(node(json!("P")).duration_value().is_err());
    }

    #[test]
    fn test_children_and_properties() {
        let root = node(json!({"a": 1, "b": {"c": "d"}}));
        assert!(root.child_node("missing").is_none());
        let b = root.child_node("b").unwrap();
        assert_eq!(b.child_node("c").unwrap().string_value().unwrap(), Some("d".into()));

        let mut names = Vec::new();
        root.for_each_property(&mut |name, _| {
            names.push(name.to_owned());
            Ok(())
        })
        .unwrap();
        assert_eq!(names, vec!["a", "b"]);

        assert!(node(json!([1])).for_each_property(&mut |_, _| Ok(())).is_err());
    }

    #[test]
    fn test_primitive_collections_skip_nulls() {
        let list = node(json!(["a", null, "b"]));
        let values = (&list as &dyn ParseNode)
            .collection_of_primitive_values(PrimitiveKind::String)
            .unwrap()
            .unwrap();
        assert_eq!(values, vec![Value::from("a"), Value::from("b")]);

        let not_list = node(json!("a"));
        assert!((&not_list as &dyn ParseNode)
            .collection_of_primitive_values(PrimitiveKind::String)
            .is_err());
    }
}
