use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;

const CUSTOM_KEY_IDENTIFIER: StoreKey = StoreKey::from_static("customKeyIdentifier");
const DISPLAY_NAME: StoreKey = StoreKey::from_static("displayName");
const END_DATE_TIME: StoreKey = StoreKey::from_static("endDateTime");
const KEY: StoreKey = StoreKey::from_static("key");
const KEY_ID: StoreKey = StoreKey::from_static("keyId");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");
const START_DATE_TIME: StoreKey = StoreKey::from_static("startDateTime");
const TYPE: StoreKey = StoreKey::from_static("type");
const USAGE: StoreKey = StoreKey::from_static("usage");

const BYTES: FieldKind = FieldKind::Primitive(PrimitiveKind::Bytes);
const DATE_TIME: FieldKind = FieldKind::Primitive(PrimitiveKind::DateTime);
const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);

pub static KEY_CREDENTIAL_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.keyCredential",
    parent: None,
    fields: &[
        Field::new("customKeyIdentifier", CUSTOM_KEY_IDENTIFIER, BYTES),
        Field::new("displayName", DISPLAY_NAME, STRING),
        Field::new("endDateTime", END_DATE_TIME, DATE_TIME),
        Field::new("key", KEY, BYTES),
        Field::new("keyId", KEY_ID, FieldKind::Primitive(PrimitiveKind::Uuid)),
        Field::new("@odata.type", ODATA_TYPE, STRING),
        Field::new("startDateTime", START_DATE_TIME, DATE_TIME),
        Field::new("type", TYPE, STRING),
        Field::new("usage", USAGE, STRING),
    ],
};

/// A certificate credential of an application or service principal.
#[derive(Debug, Clone)]
pub struct KeyCredential {
    store: Box<dyn BackingStore>,
}

graph_model!(KeyCredential, KEY_CREDENTIAL_SCHEMA);

impl KeyCredential {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    /// A 40-character binary type used to identify the credential.
    pub fn custom_key_identifier(&self) -> Option<Vec<u8>> {
        self.store.get_value(&CUSTOM_KEY_IDENTIFIER)
    }

    pub fn set_custom_key_identifier(&mut self, value: Option<Vec<u8>>) {
        self.store.set(CUSTOM_KEY_IDENTIFIER, value.into());
    }

    pub fn display_name(&self) -> Option<&str> {
        self.store.get_str(&DISPLAY_NAME)
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.store.set(DISPLAY_NAME, value.into());
    }

    pub fn end_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&END_DATE_TIME)
    }

    pub fn set_end_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(END_DATE_TIME, value.into());
    }

    /// Raw certificate data. Returned only with `$select`.
    pub fn key(&self) -> Option<Vec<u8>> {
        self.store.get_value(&KEY)
    }

    pub fn set_key(&mut self, value: Option<Vec<u8>>) {
        self.store.set(KEY, value.into());
    }

    pub fn key_id(&self) -> Option<Uuid> {
        self.store.get_value(&KEY_ID)
    }

    pub fn set_key_id(&mut self, value: Option<Uuid>) {
        self.store.set(KEY_ID, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }

    pub fn start_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&START_DATE_TIME)
    }

    pub fn set_start_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(START_DATE_TIME, value.into());
    }

    /// `AsymmetricX509Cert`, `X509CertAndPassword` or `Symmetric`.
    pub fn type_(&self) -> Option<&str> {
        self.store.get_str(&TYPE)
    }

    pub fn set_type(&mut self, value: Option<String>) {
        self.store.set(TYPE, value.into());
    }

    /// `Verify` or `Sign`.
    pub fn usage(&self) -> Option<&str> {
        self.store.get_str(&USAGE)
    }

    pub fn set_usage(&mut self, value: Option<String>) {
        self.store.set(USAGE, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_binary_and_uuid_fields() {
        let body = json!({
            "customKeyIdentifier": "AQID",
            "keyId": "6f1c2a6e-35a5-4c36-9b56-7f3ab1a5e0f0",
            "type": "AsymmetricX509Cert",
            "usage": "Verify",
        });
        let cred: KeyCredential =
            json::parse_as(body.to_string().as_bytes(), KeyCredential::create_from_discriminator_value).unwrap();
        assert_eq!(cred.custom_key_identifier(), Some(vec![1, 2, 3]));
        assert_eq!(
            cred.key_id().map(|id| id.to_string()),
            Some("6f1c2a6e-35a5-4c36-9b56-7f3ab1a5e0f0".to_owned())
        );
        assert_eq!(cred.type_(), Some("AsymmetricX509Cert"));

        let out = json::to_json_value(&cred).unwrap();
        assert_eq!(out["customKeyIdentifier"], json!("AQID"));
    }

    #[test]
    fn test_bad_base64_names_the_property() {
        let body = br#"{"key":"not base64!"}"#;
        let err = json::parse(body, KeyCredential::create_from_discriminator_value).unwrap_err();
        assert!(err.to_string().contains("'key'"), "{err}");
    }
}
