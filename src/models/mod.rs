//! # Graph Models
//!
//! Generated-style model types. Each is a thin handle over a backing store
//! plus a static [`ModelSchema`](crate::serialization::ModelSchema).
//!
//! | Shape | Types |
//! |-------|-------|
//! | Polymorphic entity roots | `Entity`, `DeviceCompliancePolicy`, `DeviceConfiguration` |
//! | Derived entities | `Windows10CompliancePolicy`, `WindowsUpdateForBusinessConfiguration`, `Windows10TeamGeneralConfiguration`, `DeviceCompliancePolicyDeviceStateSummary`, `Subscription`, `BookingService` |
//! | Complex types | `MessageRulePredicates`, `Recipient`, `EmailAddress`, `SizeRange`, `WindowsFirewallNetworkProfile`, `KeyCredential` |
//! | Collections | `BaseCollectionPaginationCountResponse`, `SubscriptionCollectionResponse`, `DeviceCompliancePolicyCollectionResponse` |
//! | Errors | `odataerrors::{ODataError, MainError, ErrorDetails, InnerError}` |
//!
//! Accessors for inherited properties live on per-level traits
//! (`EntityModel`, `DeviceCompliancePolicyModel`, ...), which every derived
//! type implements. Bring them into scope with `graph_models::prelude::*`.

/// `Parsable` and `Default` for a model struct holding `store`.
macro_rules! graph_model {
    ($model:ident, $schema:path) => {
        impl $crate::serialization::Parsable for $model {
            fn schema(&self) -> &'static $crate::serialization::ModelSchema {
                &$schema
            }

            fn backing_store(&self) -> &dyn $crate::store::BackingStore {
                &*self.store
            }

            fn backing_store_mut(&mut self) -> &mut dyn $crate::store::BackingStore {
                &mut *self.store
            }

            fn clone_parsable(&self) -> Box<dyn $crate::serialization::Parsable> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                self
            }
        }

        impl Default for $model {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

mod enums;
mod entity;
mod device_compliance_policy;
mod windows10_compliance_policy;
mod device_compliance_policy_device_state_summary;
mod device_configuration;
mod windows_update_for_business_configuration;
mod windows10_team_general_configuration;
mod subscription;
mod booking_service;
mod message_rule_predicates;
mod recipient;
mod email_address;
mod size_range;
mod windows_firewall_network_profile;
mod key_credential;
mod collection_response;
pub mod odataerrors;

pub use enums::{
    AutomaticUpdateMode, BookingPriceType, Importance, MessageActionFlag, RequiredPasswordType,
    Sensitivity, StateManagementSetting, WindowsUpdateForBusinessUpdateWeeks,
};
pub use entity::{Entity, EntityModel, ENTITY_SCHEMA};
pub use device_compliance_policy::{
    DeviceCompliancePolicy, DeviceCompliancePolicyModel, DEVICE_COMPLIANCE_POLICY_SCHEMA,
};
pub use windows10_compliance_policy::{Windows10CompliancePolicy, WINDOWS10_COMPLIANCE_POLICY_SCHEMA};
pub use device_compliance_policy_device_state_summary::{
    DeviceCompliancePolicyDeviceStateSummary, DEVICE_COMPLIANCE_POLICY_DEVICE_STATE_SUMMARY_SCHEMA,
};
pub use device_configuration::{
    DeviceConfiguration, DeviceConfigurationModel, DEVICE_CONFIGURATION_SCHEMA,
};
pub use windows_update_for_business_configuration::{
    WindowsUpdateForBusinessConfiguration, WINDOWS_UPDATE_FOR_BUSINESS_CONFIGURATION_SCHEMA,
};
pub use windows10_team_general_configuration::{
    Windows10TeamGeneralConfiguration, WINDOWS10_TEAM_GENERAL_CONFIGURATION_SCHEMA,
};
pub use subscription::{Subscription, SUBSCRIPTION_SCHEMA};
pub use booking_service::{BookingService, BOOKING_SERVICE_SCHEMA};
pub use message_rule_predicates::{MessageRulePredicates, MESSAGE_RULE_PREDICATES_SCHEMA};
pub use recipient::{Recipient, RECIPIENT_SCHEMA};
pub use email_address::{EmailAddress, EMAIL_ADDRESS_SCHEMA};
pub use size_range::{SizeRange, SIZE_RANGE_SCHEMA};
pub use windows_firewall_network_profile::{
    WindowsFirewallNetworkProfile, WINDOWS_FIREWALL_NETWORK_PROFILE_SCHEMA,
};
pub use key_credential::{KeyCredential, KEY_CREDENTIAL_SCHEMA};
pub use collection_response::{
    BaseCollectionPaginationCountResponse, BaseCollectionPaginationCountResponseModel,
    DeviceCompliancePolicyCollectionResponse, SubscriptionCollectionResponse,
    BASE_COLLECTION_PAGINATION_COUNT_RESPONSE_SCHEMA,
    DEVICE_COMPLIANCE_POLICY_COLLECTION_RESPONSE_SCHEMA, SUBSCRIPTION_COLLECTION_RESPONSE_SCHEMA,
};
pub(crate) use collection_response::{ODATA_COUNT, ODATA_NEXT_LINK, VALUE};
