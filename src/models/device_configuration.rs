//! `deviceConfiguration`: abstract base of the platform configuration
//! profiles.

use chrono::{DateTime, FixedOffset};

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Constructor, Field, FieldKind, ModelSchema, Parsable, ParseNode,
    PrimitiveKind, resolve_discriminator,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{
    ENTITY_SCHEMA, EntityModel, Windows10TeamGeneralConfiguration,
    WindowsUpdateForBusinessConfiguration,
};

const CREATED_DATE_TIME: StoreKey = StoreKey::from_static("createdDateTime");
const DESCRIPTION: StoreKey = StoreKey::from_static("description");
const DISPLAY_NAME: StoreKey = StoreKey::from_static("displayName");
const LAST_MODIFIED_DATE_TIME: StoreKey = StoreKey::from_static("lastModifiedDateTime");
const VERSION: StoreKey = StoreKey::from_static("version");

pub static DEVICE_CONFIGURATION_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.deviceConfiguration",
    parent: Some(&ENTITY_SCHEMA),
    fields: &[
        Field::new("createdDateTime", CREATED_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("description", DESCRIPTION, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("displayName", DISPLAY_NAME, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("lastModifiedDateTime", LAST_MODIFIED_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("version", VERSION, FieldKind::Primitive(PrimitiveKind::Int32)),
    ],
};

#[derive(Debug, Clone)]
pub struct DeviceConfiguration {
    store: Box<dyn BackingStore>,
}

graph_model!(DeviceConfiguration, DEVICE_CONFIGURATION_SCHEMA);

impl DeviceConfiguration {
    pub const DISCRIMINATORS: &'static [(&'static str, Constructor)] = &[
        ("#microsoft.graph.windows10TeamGeneralConfiguration", Windows10TeamGeneralConfiguration::boxed),
        ("#microsoft.graph.windowsUpdateForBusinessConfiguration", WindowsUpdateForBusinessConfiguration::boxed),
    ];

    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model.set_odata_type(Some("#microsoft.graph.deviceConfiguration".into()));
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        resolve_discriminator(node, Self::DISCRIMINATORS, Self::boxed)
    }
}

impl EntityModel for DeviceConfiguration {}
impl DeviceConfigurationModel for DeviceConfiguration {}

/// Properties shared by every configuration profile.
pub trait DeviceConfigurationModel: EntityModel {
    fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.backing_store().get_value(&CREATED_DATE_TIME)
    }

    fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.backing_store_mut().set(CREATED_DATE_TIME, value.into());
    }

    fn description(&self) -> Option<&str> {
        self.backing_store().get_str(&DESCRIPTION)
    }

    fn set_description(&mut self, value: Option<String>) {
        self.backing_store_mut().set(DESCRIPTION, value.into());
    }

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

    fn version(&self) -> Option<i32> {
        self.backing_store().get_value(&VERSION)
    }

    fn set_version(&mut self, value: Option<i32>) {
        self.backing_store_mut().set(VERSION, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{downcast_ref, json};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_type_without_discriminator() {
        let body = br#"{"id":"cfg","displayName":"Kiosk","lastModifiedDateTime":"2024-03-01T08:00:00+02:00"}"#;
        let model = json::parse(body, DeviceConfiguration::create_from_discriminator_value).unwrap();
        let config = downcast_ref::<DeviceConfiguration>(&*model).unwrap();
        assert_eq!(config.display_name(), Some("Kiosk"));
        assert_eq!(
            config.last_modified_date_time().map(|dt| dt.to_rfc3339()),
            Some("2024-03-01T08:00:00+02:00".to_owned())
        );
        assert_eq!(config.odata_type(), Some("#microsoft.graph.deviceConfiguration"));
        assert!(!config.backing_store().is_dirty());
    }

    #[test]
    fn test_new_sets_own_type_name() {
        let config = DeviceConfiguration::new();
        assert_eq!(config.odata_type(), Some("#microsoft.graph.deviceConfiguration"));
    }
}
