use crate::model::{PropertyMap, Value};
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::EmailAddress;

const EMAIL_ADDRESS: StoreKey = StoreKey::from_static("emailAddress");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");

pub static RECIPIENT_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.recipient",
    parent: None,
    fields: &[
        Field::new("emailAddress", EMAIL_ADDRESS, FieldKind::Object(EmailAddress::create_from_discriminator_value)),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
    ],
};

/// A mail sender or recipient.
#[derive(Debug, Clone)]
pub struct Recipient {
    store: Box<dyn BackingStore>,
}

graph_model!(Recipient, RECIPIENT_SCHEMA);

impl Recipient {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    pub fn email_address(&self) -> Option<&EmailAddress> {
        self.store.get_object(&EMAIL_ADDRESS)
    }

    /// In-place access; edits mark this recipient dirty too.
    pub fn email_address_mut(&mut self) -> Option<&mut EmailAddress> {
        self.store.get_object_mut(&EMAIL_ADDRESS)
    }

    pub fn set_email_address(&mut self, value: Option<EmailAddress>) {
        self.store.set(EMAIL_ADDRESS, value.map_or(Value::Null, Value::object));
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_object_parse() {
        let body = br#"{"emailAddress":{"name":"Ada","address":"ada@contoso.com","x-extra":1}}"#;
        let recipient: Recipient = json::parse_as(body, Recipient::create_from_discriminator_value).unwrap();
        let email = recipient.email_address().unwrap();
        assert_eq!(email.name(), Some("Ada"));
        assert_eq!(email.address(), Some("ada@contoso.com"));
        assert_eq!(email.additional_data().map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_nested_edit_dirties_parent() {
        let body = br#"{"emailAddress":{"address":"old@contoso.com"}}"#;
        let mut recipient: Recipient = json::parse_as(body, Recipient::create_from_discriminator_value).unwrap();
        assert!(!recipient.backing_store().is_dirty());

        if let Some(email) = recipient.email_address_mut() {
            email.set_address(Some("new@contoso.com".into()));
        }
        assert!(recipient.backing_store().is_dirty());
        assert_eq!(
            recipient.email_address().and_then(EmailAddress::address),
            Some("new@contoso.com")
        );
    }
}
