//! Static field tables and the generic parse/serialize walks over them.
//!
//! A derived model's schema lists only its own fields and points at its
//! parent; lookups walk derived-first, output walks root-first.

use std::fmt;

use crate::model::Value;
use crate::store::{ADDITIONAL_DATA, StoreKey};
use crate::{Error, Result};
use super::{
    AdditionalDataHolder, EnumInfo, Parsable, ParseNode, PrimitiveKind, SerializationWriter,
    object_entry,
};

/// Builds an empty model of the right concrete type for a node.
pub type ParsableFactory = fn(&dyn ParseNode) -> Result<Box<dyn Parsable>>;

// ============================================================================
// Field tables
// ============================================================================

/// How a field is read from the wire.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Primitive(PrimitiveKind),
    PrimitiveCollection(PrimitiveKind),
    Enum(&'static EnumInfo),
    EnumCollection(&'static EnumInfo),
    Object(ParsableFactory),
    ObjectCollection(ParsableFactory),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Primitive(kind) => write!(f, "Primitive({})", kind.name()),
            FieldKind::PrimitiveCollection(kind) => write!(f, "PrimitiveCollection({})", kind.name()),
            FieldKind::Enum(info) => write!(f, "Enum({})", info.name),
            FieldKind::EnumCollection(info) => write!(f, "EnumCollection({})", info.name),
            FieldKind::Object(_) => f.write_str("Object"),
            FieldKind::ObjectCollection(_) => f.write_str("ObjectCollection"),
        }
    }
}

/// One declared property: wire name, store key, kind.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub key: StoreKey,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, key: StoreKey, kind: FieldKind) -> Self {
        Self { name, key, kind }
    }
}

#[derive(Debug)]
pub struct ModelSchema {
    /// OData type name, e.g. `#microsoft.graph.entity`.
    pub type_name: &'static str,
    pub parent: Option<&'static ModelSchema>,
    pub fields: &'static [Field],
}

impl ModelSchema {
    /// Look a wire name up, derived type first.
    pub fn find_field(&'static self, name: &str) -> Option<&'static Field> {
        let mut schema = Some(self);
        while let Some(current) = schema {
            if let Some(field) = current.fields.iter().find(|f| f.name == name) {
                return Some(field);
            }
            schema = current.parent;
        }
        None
    }

    /// This schema and its ancestors, root first.
    pub fn chain(&'static self) -> Vec<&'static ModelSchema> {
        let mut chain = Vec::new();
        let mut schema = Some(self);
        while let Some(current) = schema {
            chain.push(current);
            schema = current.parent;
        }
        chain.reverse();
        chain
    }

    /// All fields, root type's first.
    pub fn all_fields(&'static self) -> impl Iterator<Item = &'static Field> {
        self.chain().into_iter().flat_map(|schema| schema.fields.iter())
    }

    pub fn is_subtype_of(&'static self, other: &ModelSchema) -> bool {
        self.chain().iter().any(|schema| schema.type_name == other.type_name)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Fill `model` from an object node.
///
/// Runs with initialization switched off so the result is clean. Unknown
/// properties land in additional data. The first failing field aborts the
/// walk.
pub fn assign_field_values<M: Parsable + ?Sized>(model: &mut M, node: &dyn ParseNode) -> Result<()> {
    let schema = model.schema();
    model.backing_store_mut().set_initialization_completed(false);

    let result = node.for_each_property(&mut |name, child| {
        match schema.find_field(name) {
            Some(field) => {
                let value = read_field(field, child).map_err(|err| Error::Deserialization {
                    property: name.to_owned(),
                    message: err.to_string(),
                })?;
                if let Some(value) = value {
                    model.backing_store_mut().set(field.key.clone(), value);
                }
            }
            None => {
                tracing::debug!(
                    type_name = schema.type_name,
                    property = name,
                    "keeping undeclared property as additional data"
                );
                let value = child.untyped_value()?;
                model.additional_data_mut().insert(name.to_owned(), value);
            }
        }
        Ok(())
    });

    model.backing_store_mut().set_initialization_completed(true);
    result
}

fn read_field(field: &Field, node: &dyn ParseNode) -> Result<Option<Value>> {
    if node.is_null() {
        return Ok(None);
    }
    Ok(match field.kind {
        FieldKind::Primitive(kind) => node.primitive_value(kind)?,
        FieldKind::PrimitiveCollection(kind) => {
            node.collection_of_primitive_values(kind)?.map(Value::Collection)
        }
        FieldKind::Enum(info) => node.enum_value(info)?.map(Value::Enum),
        FieldKind::EnumCollection(info) => {
            node.collection_of_enum_values(info)?.map(Value::Collection)
        }
        FieldKind::Object(factory) => node.object_value(factory)?.map(object_entry),
        FieldKind::ObjectCollection(factory) => node
            .collection_of_object_values(factory)?
            .map(|models| Value::Collection(models.into_iter().map(object_entry).collect())),
    })
}

// ============================================================================
// Serialization
// ============================================================================

/// Write every present field in table order, then the additional data.
///
/// A `Null` entry is written only when it is dirty, i.e. it was explicitly
/// cleared after loading; clean nulls are omitted.
pub fn serialize_model<M: Parsable + ?Sized>(
    model: &M,
    writer: &mut dyn SerializationWriter,
) -> Result<()> {
    let store = model.backing_store();
    let changed_only = writer.changed_only();

    for field in model.schema().all_fields() {
        let Some(value) = store.get(&field.key) else { continue };
        let changed = store.is_changed(&field.key);
        if (changed_only || value.is_null()) && !changed {
            continue;
        }
        if changed_only && matches!(value, Value::Collection(_)) {
            // changed collections are written whole
            writer.set_changed_only(false);
            let written = writer.write_any_value(field.name, value);
            writer.set_changed_only(true);
            written?;
            continue;
        }
        writer.write_any_value(field.name, value)?;
    }

    if changed_only && !store.is_changed(&ADDITIONAL_DATA) {
        return Ok(());
    }
    if let Some(data) = model.additional_data() {
        if !data.is_empty() {
            writer.write_additional_data(data)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, Subscription, Windows10CompliancePolicy};
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter};
    use crate::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_find_field_walks_parents() {
        let schema = Windows10CompliancePolicy::new().schema();
        assert_eq!(schema.find_field("passwordRequired").unwrap().key.as_str(), "passwordRequired");
        assert_eq!(schema.find_field("displayName").unwrap().key.as_str(), "displayName");
        assert_eq!(schema.find_field("@odata.type").unwrap().key.as_str(), "odataType");
        assert!(schema.find_field("nope").is_none());
    }

    #[test]
    fn test_chain_is_root_first() {
        let schema = Windows10CompliancePolicy::new().schema();
        let names: Vec<_> = schema.chain().iter().map(|s| s.type_name).collect();
        assert_eq!(
            names,
            vec![
                "#microsoft.graph.entity",
                "#microsoft.graph.deviceCompliancePolicy",
                "#microsoft.graph.windows10CompliancePolicy",
            ]
        );
        assert!(schema.is_subtype_of(Entity::new().schema()));
        assert!(!Entity::new().schema().is_subtype_of(schema));
    }

    #[test]
    fn test_parsed_model_is_clean() {
        let payload = json!({"id": "sub-1", "resource": "me/messages", "custom": 1});
        let node = JsonParseNode::from_value(payload);
        let mut sub = Subscription::new();
        assign_field_values(&mut sub, &node).unwrap();

        assert_eq!(sub.id(), Some("sub-1"));
        assert_eq!(sub.resource(), Some("me/messages"));
        assert!(!sub.backing_store().is_dirty());
        assert_eq!(sub.additional_data().unwrap()["custom"], Value::Int64(1));
    }

    #[test]
    fn test_field_error_names_property() {
        let node = JsonParseNode::from_value(json!({"includeResourceData": "yes"}));
        let mut sub = Subscription::new();
        let err = assign_field_values(&mut sub, &node).unwrap_err();
        match err {
            Error::Deserialization { property, .. } => assert_eq!(property, "includeResourceData"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(sub.backing_store().initialization_completed());
    }

    #[test]
    fn test_null_written_only_when_cleared() {
        let node = JsonParseNode::from_value(json!({"id": "1", "clientState": null, "resource": "r"}));
        let mut sub = Subscription::new();
        assign_field_values(&mut sub, &node).unwrap();
        sub.set_resource(None);

        let mut writer = JsonSerializationWriter::new();
        sub.serialize(&mut writer).unwrap();
        assert_eq!(writer.to_json(), json!({"id": "1", "resource": null}));
    }

    #[test]
    fn test_changed_only_writer() {
        let node = JsonParseNode::from_value(json!({"id": "1", "resource": "r"}));
        let mut sub = Subscription::new();
        assign_field_values(&mut sub, &node).unwrap();
        sub.set_client_state(Some("secret".into()));

        let mut writer = JsonSerializationWriter::new().changed_only(true);
        sub.serialize(&mut writer).unwrap();
        assert_eq!(writer.to_json(), json!({"clientState": "secret"}));
    }
}
