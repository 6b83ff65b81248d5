//! Paged collection envelopes: `@odata.count`, `@odata.nextLink` and a
//! `value` array.

use crate::model::{PropertyMap, Value};
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
    object_entry,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{DeviceCompliancePolicy, Subscription};

pub(crate) const ODATA_COUNT: StoreKey = StoreKey::from_static("odataCount");
pub(crate) const ODATA_NEXT_LINK: StoreKey = StoreKey::from_static("odataNextLink");
pub(crate) const VALUE: StoreKey = StoreKey::from_static("value");

pub static BASE_COLLECTION_PAGINATION_COUNT_RESPONSE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.baseCollectionPaginationCountResponse",
    parent: None,
    fields: &[
        Field::new("@odata.count", ODATA_COUNT, FieldKind::Primitive(PrimitiveKind::Int64)),
        Field::new("@odata.nextLink", ODATA_NEXT_LINK, FieldKind::Primitive(PrimitiveKind::String)),
    ],
};

/// Accessors shared by every collection page.
pub trait BaseCollectionPaginationCountResponseModel: Parsable {
    /// Total item count, when the request asked for `$count`.
    fn odata_count(&self) -> Option<i64> {
        self.backing_store().get_value(&ODATA_COUNT)
    }

    fn set_odata_count(&mut self, value: Option<i64>) {
        self.backing_store_mut().set(ODATA_COUNT, value.into());
    }

    /// URL of the next page; absent on the last one.
    fn odata_next_link(&self) -> Option<&str> {
        self.backing_store().get_str(&ODATA_NEXT_LINK)
    }

    fn set_odata_next_link(&mut self, value: Option<String>) {
        self.backing_store_mut().set(ODATA_NEXT_LINK, value.into());
    }
}

macro_rules! collection_response {
    ($(#[$doc:meta])* $model:ident, $schema:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $model {
            store: Box<dyn BackingStore>,
        }

        graph_model!($model, $schema);

        impl BaseCollectionPaginationCountResponseModel for $model {}

        impl $model {
            pub fn new() -> Self {
                let mut model = Self { store: new_backing_store() };
                model.set_additional_data(PropertyMap::new());
                model
            }

            pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
                Ok(Box::new(Self::new()))
            }
        }
    };
}

collection_response!(BaseCollectionPaginationCountResponse, BASE_COLLECTION_PAGINATION_COUNT_RESPONSE_SCHEMA);

// ============================================================================
// Typed pages
// ============================================================================

pub static SUBSCRIPTION_COLLECTION_RESPONSE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.subscriptionCollectionResponse",
    parent: Some(&BASE_COLLECTION_PAGINATION_COUNT_RESPONSE_SCHEMA),
    fields: &[Field::new(
        "value",
        VALUE,
        FieldKind::ObjectCollection(Subscription::create_from_discriminator_value),
    )],
};

collection_response!(
    /// One page of `/subscriptions`.
    SubscriptionCollectionResponse,
    SUBSCRIPTION_COLLECTION_RESPONSE_SCHEMA
);

impl SubscriptionCollectionResponse {
    pub fn value(&self) -> Option<Vec<&Subscription>> {
        self.store.get_objects(&VALUE)
    }

    pub fn set_value(&mut self, value: Option<Vec<Subscription>>) {
        self.store.set(VALUE, value.map_or(Value::Null, Value::objects));
    }
}

pub static DEVICE_COMPLIANCE_POLICY_COLLECTION_RESPONSE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.deviceCompliancePolicyCollectionResponse",
    parent: Some(&BASE_COLLECTION_PAGINATION_COUNT_RESPONSE_SCHEMA),
    fields: &[Field::new(
        "value",
        VALUE,
        FieldKind::ObjectCollection(DeviceCompliancePolicy::create_from_discriminator_value),
    )],
};

collection_response!(
    /// One page of `/deviceManagement/deviceCompliancePolicies`. Items keep
    /// their concrete policy type.
    DeviceCompliancePolicyCollectionResponse,
    DEVICE_COMPLIANCE_POLICY_COLLECTION_RESPONSE_SCHEMA
);

impl DeviceCompliancePolicyCollectionResponse {
    pub fn value(&self) -> Option<Vec<&dyn Parsable>> {
        self.store.get_objects_dyn(&VALUE)
    }

    pub fn set_value(&mut self, value: Option<Vec<Box<dyn Parsable>>>) {
        let value = value.map_or(Value::Null, |items| {
            Value::Collection(items.into_iter().map(object_entry).collect())
        });
        self.store.set(VALUE, value);
    }
}
