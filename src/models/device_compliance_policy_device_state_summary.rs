use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{ENTITY_SCHEMA, EntityModel};

const COMPLIANT_DEVICE_COUNT: StoreKey = StoreKey::from_static("compliantDeviceCount");
const CONFIG_MANAGER_COUNT: StoreKey = StoreKey::from_static("configManagerCount");
const CONFLICT_DEVICE_COUNT: StoreKey = StoreKey::from_static("conflictDeviceCount");
const ERROR_DEVICE_COUNT: StoreKey = StoreKey::from_static("errorDeviceCount");
const IN_GRACE_PERIOD_COUNT: StoreKey = StoreKey::from_static("inGracePeriodCount");
const NON_COMPLIANT_DEVICE_COUNT: StoreKey = StoreKey::from_static("nonCompliantDeviceCount");
const NOT_APPLICABLE_DEVICE_COUNT: StoreKey = StoreKey::from_static("notApplicableDeviceCount");
const REMEDIATED_DEVICE_COUNT: StoreKey = StoreKey::from_static("remediatedDeviceCount");
const UNKNOWN_DEVICE_COUNT: StoreKey = StoreKey::from_static("unknownDeviceCount");

const INT32: FieldKind = FieldKind::Primitive(PrimitiveKind::Int32);

pub static DEVICE_COMPLIANCE_POLICY_DEVICE_STATE_SUMMARY_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.deviceCompliancePolicyDeviceStateSummary",
    parent: Some(&ENTITY_SCHEMA),
    fields: &[
        Field::new("compliantDeviceCount", COMPLIANT_DEVICE_COUNT, INT32),
        Field::new("configManagerCount", CONFIG_MANAGER_COUNT, INT32),
        Field::new("conflictDeviceCount", CONFLICT_DEVICE_COUNT, INT32),
        Field::new("errorDeviceCount", ERROR_DEVICE_COUNT, INT32),
        Field::new("inGracePeriodCount", IN_GRACE_PERIOD_COUNT, INT32),
        Field::new("nonCompliantDeviceCount", NON_COMPLIANT_DEVICE_COUNT, INT32),
        Field::new("notApplicableDeviceCount", NOT_APPLICABLE_DEVICE_COUNT, INT32),
        Field::new("remediatedDeviceCount", REMEDIATED_DEVICE_COUNT, INT32),
        Field::new("unknownDeviceCount", UNKNOWN_DEVICE_COUNT, INT32),
    ],
};

/// Tenant-wide device counts per compliance state.
#[derive(Debug, Clone)]
pub struct DeviceCompliancePolicyDeviceStateSummary {
    store: Box<dyn BackingStore>,
}

graph_model!(
    DeviceCompliancePolicyDeviceStateSummary,
    DEVICE_COMPLIANCE_POLICY_DEVICE_STATE_SUMMARY_SCHEMA
);

impl EntityModel for DeviceCompliancePolicyDeviceStateSummary {}

macro_rules! count_accessors {
    ($($get:ident, $set:ident => $key:ident;)+) => {
        $(
            pub fn $get(&self) -> Option<i32> {
                self.store.get_value(&$key)
            }

            pub fn $set(&mut self, value: Option<i32>) {
                self.store.set($key, value.into());
            }
        )+
    };
}

impl DeviceCompliancePolicyDeviceStateSummary {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Self::boxed())
    }

    count_accessors! {
        compliant_device_count, set_compliant_device_count => COMPLIANT_DEVICE_COUNT;
        config_manager_count, set_config_manager_count => CONFIG_MANAGER_COUNT;
        conflict_device_count, set_conflict_device_count => CONFLICT_DEVICE_COUNT;
        error_device_count, set_error_device_count => ERROR_DEVICE_COUNT;
        in_grace_period_count, set_in_grace_period_count => IN_GRACE_PERIOD_COUNT;
        non_compliant_device_count, set_non_compliant_device_count => NON_COMPLIANT_DEVICE_COUNT;
        not_applicable_device_count, set_not_applicable_device_count => NOT_APPLICABLE_DEVICE_COUNT;
        remediated_device_count, set_remediated_device_count => REMEDIATED_DEVICE_COUNT;
        unknown_device_count, set_unknown_device_count => UNKNOWN_DEVICE_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{downcast, json};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_parse() {
        let body = br#"{"id":"summary","compliantDeviceCount":40,"nonCompliantDeviceCount":2,"unknownDeviceCount":null}"#;
        let model = json::parse(body, DeviceCompliancePolicyDeviceStateSummary::create_from_discriminator_value).unwrap();
        let summary = downcast::<DeviceCompliancePolicyDeviceStateSummary>(model).unwrap();
        assert_eq!(summary.id(), Some("summary"));
        assert_eq!(summary.compliant_device_count(), Some(40));
        assert_eq!(summary.non_compliant_device_count(), Some(2));
        assert_eq!(summary.unknown_device_count(), None);
        assert!(!summary.backing_store().is_dirty());
    }

    #[test]
    fn test_count_too_large_for_int32() {
        let body = br#"{"errorDeviceCount":3000000000}"#;
        let err = json::parse(body, DeviceCompliancePolicyDeviceStateSummary::create_from_discriminator_value)
            .unwrap_err();
        assert!(err.to_string().contains("errorDeviceCount"), "{err}");
    }
}
