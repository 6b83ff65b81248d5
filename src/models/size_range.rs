use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;

const MAXIMUM_SIZE: StoreKey = StoreKey::from_static("maximumSize");
const MINIMUM_SIZE: StoreKey = StoreKey::from_static("minimumSize");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");

pub static SIZE_RANGE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.sizeRange",
    parent: None,
    fields: &[
        Field::new("maximumSize", MAXIMUM_SIZE, FieldKind::Primitive(PrimitiveKind::Int32)),
        Field::new("minimumSize", MINIMUM_SIZE, FieldKind::Primitive(PrimitiveKind::Int32)),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
    ],
};

/// Inclusive message size bounds, in kilobytes.
#[derive(Debug, Clone)]
pub struct SizeRange {
    store: Box<dyn BackingStore>,
}

graph_model!(SizeRange, SIZE_RANGE_SCHEMA);

impl SizeRange {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    pub fn maximum_size(&self) -> Option<i32> {
        self.store.get_value(&MAXIMUM_SIZE)
    }

    pub fn set_maximum_size(&mut self, value: Option<i32>) {
        self.store.set(MAXIMUM_SIZE, value.into());
    }

    pub fn minimum_size(&self) -> Option<i32> {
        self.store.get_value(&MINIMUM_SIZE)
    }

    pub fn set_minimum_size(&mut self, value: Option<i32>) {
        self.store.set(MINIMUM_SIZE, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }
}
