//! `subscription`: a change-notification subscription.

use chrono::{DateTime, FixedOffset};

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{ENTITY_SCHEMA, EntityModel};

const APPLICATION_ID: StoreKey = StoreKey::from_static("applicationId");
const CHANGE_TYPE: StoreKey = StoreKey::from_static("changeType");
const CLIENT_STATE: StoreKey = StoreKey::from_static("clientState");
const CREATOR_ID: StoreKey = StoreKey::from_static("creatorId");
const ENCRYPTION_CERTIFICATE: StoreKey = StoreKey::from_static("encryptionCertificate");
const ENCRYPTION_CERTIFICATE_ID: StoreKey = StoreKey::from_static("encryptionCertificateId");
const EXPIRATION_DATE_TIME: StoreKey = StoreKey::from_static("expirationDateTime");
const INCLUDE_RESOURCE_DATA: StoreKey = StoreKey::from_static("includeResourceData");
const LATEST_SUPPORTED_TLS_VERSION: StoreKey = StoreKey::from_static("latestSupportedTlsVersion");
const LIFECYCLE_NOTIFICATION_URL: StoreKey = StoreKey::from_static("lifecycleNotificationUrl");
const NOTIFICATION_QUERY_OPTIONS: StoreKey = StoreKey::from_static("notificationQueryOptions");
const NOTIFICATION_URL: StoreKey = StoreKey::from_static("notificationUrl");
const NOTIFICATION_URL_APP_ID: StoreKey = StoreKey::from_static("notificationUrlAppId");
const RESOURCE: StoreKey = StoreKey::from_static("resource");

const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);

pub static SUBSCRIPTION_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.subscription",
    parent: Some(&ENTITY_SCHEMA),
    fields: &[
        Field::new("applicationId", APPLICATION_ID, STRING),
        Field::new("changeType", CHANGE_TYPE, STRING),
        Field::new("clientState", CLIENT_STATE, STRING),
        Field::new("creatorId", CREATOR_ID, STRING),
        Field::new("encryptionCertificate", ENCRYPTION_CERTIFICATE, STRING),
        Field::new("encryptionCertificateId", ENCRYPTION_CERTIFICATE_ID, STRING),
        Field::new("expirationDateTime", EXPIRATION_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("includeResourceData", INCLUDE_RESOURCE_DATA, FieldKind::Primitive(PrimitiveKind::Bool)),
        Field::new("latestSupportedTlsVersion", LATEST_SUPPORTED_TLS_VERSION, STRING),
        Field::new("lifecycleNotificationUrl", LIFECYCLE_NOTIFICATION_URL, STRING),
        Field::new("notificationQueryOptions", NOTIFICATION_QUERY_OPTIONS, STRING),
        Field::new("notificationUrl", NOTIFICATION_URL, STRING),
        Field::new("notificationUrlAppId", NOTIFICATION_URL_APP_ID, STRING),
        Field::new("resource", RESOURCE, STRING),
    ],
};

#[derive(Debug, Clone)]
pub struct Subscription {
    store: Box<dyn BackingStore>,
}

graph_model!(Subscription, SUBSCRIPTION_SCHEMA);

impl EntityModel for Subscription {}

/// Getter/setter pairs for string-valued properties.
macro_rules! string_accessors {
    ($($(#[$doc:meta])* $get:ident, $set:ident => $key:ident;)+) => {
        $(
            $(#[$doc])*
            pub fn $get(&self) -> Option<&str> {
                self.store.get_str(&$key)
            }

            pub fn $set(&mut self, value: Option<String>) {
                self.store.set($key, value.into());
            }
        )+
    };
}

impl Subscription {
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

    string_accessors! {
        /// Identifier of the application used to create the subscription. Read-only.
        application_id, set_application_id => APPLICATION_ID;
        /// Comma-separated change kinds: `created`, `updated`, `deleted`.
        change_type, set_change_type => CHANGE_TYPE;
        /// Echoed back in each notification; at most 128 characters.
        client_state, set_client_state => CLIENT_STATE;
        creator_id, set_creator_id => CREATOR_ID;
        /// Base64 public key used to encrypt resource data.
        encryption_certificate, set_encryption_certificate => ENCRYPTION_CERTIFICATE;
        encryption_certificate_id, set_encryption_certificate_id => ENCRYPTION_CERTIFICATE_ID;
        latest_supported_tls_version, set_latest_supported_tls_version => LATEST_SUPPORTED_TLS_VERSION;
        lifecycle_notification_url, set_lifecycle_notification_url => LIFECYCLE_NOTIFICATION_URL;
        notification_query_options, set_notification_query_options => NOTIFICATION_QUERY_OPTIONS;
        notification_url, set_notification_url => NOTIFICATION_URL;
        notification_url_app_id, set_notification_url_app_id => NOTIFICATION_URL_APP_ID;
        /// The resource that will be monitored for changes.
        resource, set_resource => RESOURCE;
    }

    pub fn expiration_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&EXPIRATION_DATE_TIME)
    }

    pub fn set_expiration_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(EXPIRATION_DATE_TIME, value.into());
    }

    pub fn include_resource_data(&self) -> Option<bool> {
        self.store.get_value(&INCLUDE_RESOURCE_DATA)
    }

    pub fn set_include_resource_data(&mut self, value: Option<bool>) {
        self.store.set(INCLUDE_RESOURCE_DATA, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_subscription_has_no_type_name() {
        let sub = Subscription::new();
        assert_eq!(sub.odata_type(), None);
        assert_eq!(json::to_json_value(&sub).unwrap(), json!({}));
    }

    #[test]
    fn test_patch_payload_after_load() {
        let body = br#"{"id":"s","resource":"me/messages","expirationDateTime":"2030-01-01T00:00:00Z"}"#;
        let mut sub: Subscription =
            json::parse_as(body, Subscription::create_from_discriminator_value).unwrap();

        let later = DateTime::parse_from_rfc3339("2030-02-01T00:00:00Z").unwrap();
        sub.set_expiration_date_time(Some(later));
        sub.set_resource(None);

        let mut writer = json::JsonSerializationWriter::new().changed_only(true);
        sub.serialize(&mut writer).unwrap();
        assert_eq!(
            writer.to_json(),
            json!({"expirationDateTime": "2030-02-01T00:00:00Z", "resource": null})
        );
    }

    #[test]
    fn test_offsetless_timestamp_is_utc() {
        let body = br#"{"expirationDateTime":"2030-01-01T10:00:00"}"#;
        let sub: Subscription = json::parse_as(body, Subscription::create_from_discriminator_value).unwrap();
        assert_eq!(
            sub.expiration_date_time().map(|dt| dt.offset().local_minus_utc()),
            Some(0)
        );
    }
}
