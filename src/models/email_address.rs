use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;

const ADDRESS: StoreKey = StoreKey::from_static("address");
const NAME: StoreKey = StoreKey::from_static("name");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");

pub static EMAIL_ADDRESS_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.emailAddress",
    parent: None,
    fields: &[
        Field::new("address", ADDRESS, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("name", NAME, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
    ],
};

#[derive(Debug, Clone)]
pub struct EmailAddress {
    store: Box<dyn BackingStore>,
}

graph_model!(EmailAddress, EMAIL_ADDRESS_SCHEMA);

impl EmailAddress {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    /// The email address of the person or entity.
    pub fn address(&self) -> Option<&str> {
        self.store.get_str(&ADDRESS)
    }

    pub fn set_address(&mut self, value: Option<String>) {
        self.store.set(ADDRESS, value.into());
    }

    /// The display name of the person or entity.
    pub fn name(&self) -> Option<&str> {
        self.store.get_str(&NAME)
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.store.set(NAME, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }
}
