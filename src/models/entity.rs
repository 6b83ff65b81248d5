//! `entity`: the base of every addressable Graph resource.

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Constructor, Field, FieldKind, ModelSchema, Parsable, ParseNode,
    PrimitiveKind, resolve_discriminator,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{
    BookingService, DeviceCompliancePolicy, DeviceCompliancePolicyDeviceStateSummary,
    DeviceConfiguration, Subscription, Windows10CompliancePolicy,
    Windows10TeamGeneralConfiguration, WindowsUpdateForBusinessConfiguration,
};

const ID: StoreKey = StoreKey::from_static("id");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");

pub static ENTITY_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.entity",
    parent: None,
    fields: &[
        Field::new("id", ID, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
    ],
};

#[derive(Debug, Clone)]
pub struct Entity {
    store: Box<dyn BackingStore>,
}

graph_model!(Entity, ENTITY_SCHEMA);

impl Entity {
    /// Every concrete entity type this crate knows, by `@odata.type`.
    pub const DISCRIMINATORS: &'static [(&'static str, Constructor)] = &[
        ("#microsoft.graph.bookingService", BookingService::boxed),
        ("#microsoft.graph.deviceCompliancePolicy", DeviceCompliancePolicy::boxed),
        ("#microsoft.graph.deviceCompliancePolicyDeviceStateSummary", DeviceCompliancePolicyDeviceStateSummary::boxed),
        ("#microsoft.graph.deviceConfiguration", DeviceConfiguration::boxed),
        ("#microsoft.graph.subscription", Subscription::boxed),
        ("#microsoft.graph.windows10CompliancePolicy", Windows10CompliancePolicy::boxed),
        ("#microsoft.graph.windows10TeamGeneralConfiguration", Windows10TeamGeneralConfiguration::boxed),
        ("#microsoft.graph.windowsUpdateForBusinessConfiguration", WindowsUpdateForBusinessConfiguration::boxed),
    ];

    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    /// Instantiate the concrete entity type named by `@odata.type`.
    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        resolve_discriminator(node, Self::DISCRIMINATORS, Self::boxed)
    }
}

/// Accessors every entity type inherits.
pub trait EntityModel: Parsable {
    /// The unique identifier for an entity. Read-only.
    fn id(&self) -> Option<&str> {
        self.backing_store().get_str(&ID)
    }

    fn set_id(&mut self, value: Option<String>) {
        self.backing_store_mut().set(ID, value.into());
    }

    fn odata_type(&self) -> Option<&str> {
        self.backing_store().get_str(&ODATA_TYPE)
    }

    fn set_odata_type(&mut self, value: Option<String>) {
        self.backing_store_mut().set(ODATA_TYPE, value.into());
    }
}

impl EntityModel for Entity {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::serialization::json::{self, JsonParseNode};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_entity_has_empty_additional_data() {
        let entity = Entity::new();
        assert_eq!(entity.additional_data(), Some(&PropertyMap::new()));
        assert_eq!(entity.id(), None);
        assert_eq!(entity.odata_type(), None);
    }

    #[test]
    fn test_every_discriminator_maps_to_its_type() {
        for (type_name, _) in Entity::DISCRIMINATORS {
            let node = JsonParseNode::from_value(json!({"@odata.type": type_name}));
            let model = Entity::create_from_discriminator_value(&node).unwrap();
            assert_eq!(model.schema().type_name, *type_name);
        }
    }

    #[test]
    fn test_unknown_discriminator_falls_back() {
        let body = br##"{"@odata.type":"#microsoft.graph.somethingNew","id":"x1"}"##;
        let model = json::parse(body, Entity::create_from_discriminator_value).unwrap();
        let entity = downcast_ref::<Entity>(&*model).unwrap();
        assert_eq!(entity.id(), Some("x1"));
        assert_eq!(entity.odata_type(), Some("#microsoft.graph.somethingNew"));
    }

    #[test]
    fn test_set_id_marks_dirty() {
        let mut entity = Entity::new();
        entity.backing_store_mut().set_initialization_completed(true);
        assert!(!entity.backing_store().is_dirty());
        entity.set_id(Some("e1".into()));
        assert!(entity.backing_store().is_dirty());
        entity.set_id(None);
        assert_eq!(entity.id(), None);
        assert_eq!(entity.backing_store().keys_changed_to_null().len(), 1);
    }
}
