//! `deviceCompliancePolicy`: abstract base of the platform compliance
//! policies.

use chrono::{DateTime, FixedOffset};

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Constructor, Field, FieldKind, ModelSchema, Parsable, ParseNode,
    PrimitiveKind, resolve_discriminator,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{ENTITY_SCHEMA, EntityModel, Windows10CompliancePolicy};

const CREATED_DATE_TIME: StoreKey = StoreKey::from_static("createdDateTime");
const DESCRIPTION: StoreKey = StoreKey::from_static("description");
const DISPLAY_NAME: StoreKey = StoreKey::from_static("displayName");
const LAST_MODIFIED_DATE_TIME: StoreKey = StoreKey::from_static("lastModifiedDateTime");
const VERSION: StoreKey = StoreKey::from_static("version");

pub static DEVICE_COMPLIANCE_POLICY_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.deviceCompliancePolicy",
    parent: Some(&ENTITY_SCHEMA),
    fields: &[
        Field::new("createdDateTime", CREATED_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("description", DESCRIPTION, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("displayName", DISPLAY_NAME, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("lastModifiedDateTime", LAST_MODIFIED_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("version", VERSION, FieldKind::Primitive(PrimitiveKind::Int32)),
    ],
};

/// Used directly only when a payload names no (or an unknown) subtype.
#[derive(Debug, Clone)]
pub struct DeviceCompliancePolicy {
    store: Box<dyn BackingStore>,
}

graph_model!(DeviceCompliancePolicy, DEVICE_COMPLIANCE_POLICY_SCHEMA);

impl DeviceCompliancePolicy {
    pub const DISCRIMINATORS: &'static [(&'static str, Constructor)] = &[
        ("#microsoft.graph.windows10CompliancePolicy", Windows10CompliancePolicy::boxed),
    ];

    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model.set_odata_type(Some("#microsoft.graph.deviceCompliancePolicy".into()));
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        resolve_discriminator(node, Self::DISCRIMINATORS, Self::boxed)
    }
}

impl EntityModel for DeviceCompliancePolicy {}
impl DeviceCompliancePolicyModel for DeviceCompliancePolicy {}

/// Properties shared by every compliance policy.
pub trait DeviceCompliancePolicyModel: EntityModel {
    /// DateTime the object was created.
    fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.backing_store().get_value(&CREATED_DATE_TIME)
    }

    fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.backing_store_mut().set(CREATED_DATE_TIME, value.into());
    }

    /// Admin provided description of the policy.
    fn description(&self) -> Option<&str> {
        self.backing_store().get_str(&DESCRIPTION)
    }

    fn set_description(&mut self, value: Option<String>) {
        self.backing_store_mut().set(DESCRIPTION, value.into());
    }

    /// Admin provided name of the policy.
    fn display_name(&self) -> Option<&str> {
        self.backing_store().get_str(&DISPLAY_NAME)
    }

    fn set_display_name(&mut self, value: Option<String>) {
        self.backing_store_mut().set(DISPLAY_NAME, value.into());
    }

    fn last_modified_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.backing_store().get_value(&LAST_MODIFIED_DATE_TIME)
    }

    fn set_last_modified_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.backing_store_mut().set(LAST_MODIFIED_DATE_TIME, value.into());
    }

    /// Version of the policy.
    fn version(&self) -> Option<i32> {
        self.backing_store().get_value(&VERSION)
    }

    fn set_version(&mut self, value: Option<i32>) {
        self.backing_store_mut().set(VERSION, value.into());
    }
}
