//! OData error envelope returned by Graph on 4XX/5XX responses.
//!
//! ```text
//! {"error": {"code": "...", "message": "...", "details": [...], "innerError": {...}}}
//! ```

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::model::{PropertyMap, Value};
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;

const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);

const CODE: StoreKey = StoreKey::from_static("code");
const MESSAGE: StoreKey = StoreKey::from_static("message");
const TARGET: StoreKey = StoreKey::from_static("target");

/// Shared `new`/factory for the error models.
macro_rules! error_model {
    ($model:ident, $schema:ident) => {
        #[derive(Debug, Clone)]
        pub struct $model {
            store: Box<dyn BackingStore>,
        }

        graph_model!($model, $schema);

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

// ============================================================================
// ODataError
// ============================================================================

const ERROR: StoreKey = StoreKey::from_static("error");

pub static ODATA_ERROR_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.odataErrors.oDataError",
    parent: None,
    fields: &[Field::new("error", ERROR, FieldKind::Object(MainError::create_from_discriminator_value))],
};

error_model!(ODataError, ODATA_ERROR_SCHEMA);

impl ODataError {
    pub fn error(&self) -> Option<&MainError> {
        self.store.get_object(&ERROR)
    }

    pub fn set_error(&mut self, value: Option<MainError>) {
        self.store.set(ERROR, value.map_or(Value::Null, Value::object));
    }

    /// `error.message`, if the payload carried one.
    pub fn message(&self) -> Option<&str> {
        self.error().and_then(MainError::message)
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(main) = self.error() else {
            return f.write_str("OData error");
        };
        match (main.code(), main.message()) {
            (Some(code), Some(message)) => write!(f, "{code}: {message}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("OData error"),
        }
    }
}

impl std::error::Error for ODataError {}

// ============================================================================
// MainError
// ============================================================================

const DETAILS: StoreKey = StoreKey::from_static("details");
const INNER_ERROR: StoreKey = StoreKey::from_static("innerError");

pub static MAIN_ERROR_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.odataErrors.mainError",
    parent: None,
    fields: &[
        Field::new("code", CODE, STRING),
        Field::new("details", DETAILS, FieldKind::ObjectCollection(ErrorDetails::create_from_discriminator_value)),
        Field::new("innerError", INNER_ERROR, FieldKind::Object(InnerError::create_from_discriminator_value)),
        Field::new("message", MESSAGE, STRING),
        Field::new("target", TARGET, STRING),
    ],
};

error_model!(MainError, MAIN_ERROR_SCHEMA);

impl MainError {
    pub fn code(&self) -> Option<&str> {
        self.store.get_str(&CODE)
    }

    pub fn set_code(&mut self, value: Option<String>) {
        self.store.set(CODE, value.into());
    }

    pub fn details(&self) -> Option<Vec<&ErrorDetails>> {
        self.store.get_objects(&DETAILS)
    }

    pub fn set_details(&mut self, value: Option<Vec<ErrorDetails>>) {
        self.store.set(DETAILS, value.map_or(Value::Null, Value::objects));
    }

    pub fn inner_error(&self) -> Option<&InnerError> {
        self.store.get_object(&INNER_ERROR)
    }

    pub fn set_inner_error(&mut self, value: Option<InnerError>) {
        self.store.set(INNER_ERROR, value.map_or(Value::Null, Value::object));
    }

    pub fn message(&self) -> Option<&str> {
        self.store.get_str(&MESSAGE)
    }

    pub fn set_message(&mut self, value: Option<String>) {
        self.store.set(MESSAGE, value.into());
    }

    pub fn target(&self) -> Option<&str> {
        self.store.get_str(&TARGET)
    }

    pub fn set_target(&mut self, value: Option<String>) {
        self.store.set(TARGET, value.into());
    }
}

// ============================================================================
// ErrorDetails
// ============================================================================

pub static ERROR_DETAILS_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.odataErrors.errorDetails",
    parent: None,
    fields: &[
        Field::new("code", CODE, STRING),
        Field::new("message", MESSAGE, STRING),
        Field::new("target", TARGET, STRING),
    ],
};

error_model!(ErrorDetails, ERROR_DETAILS_SCHEMA);

impl ErrorDetails {
    pub fn code(&self) -> Option<&str> {
        self.store.get_str(&CODE)
    }

    pub fn set_code(&mut self, value: Option<String>) {
        self.store.set(CODE, value.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.store.get_str(&MESSAGE)
    }

    pub fn set_message(&mut self, value: Option<String>) {
        self.store.set(MESSAGE, value.into());
    }

    pub fn target(&self) -> Option<&str> {
        self.store.get_str(&TARGET)
    }

    pub fn set_target(&mut self, value: Option<String>) {
        self.store.set(TARGET, value.into());
    }
}

// ============================================================================
// InnerError
// ============================================================================

const CLIENT_REQUEST_ID: StoreKey = StoreKey::from_static("clientRequestId");
const DATE: StoreKey = StoreKey::from_static("date");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");
const REQUEST_ID: StoreKey = StoreKey::from_static("requestId");

pub static INNER_ERROR_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.odataErrors.innerError",
    parent: None,
    fields: &[
        Field::new("client-request-id", CLIENT_REQUEST_ID, STRING),
        Field::new("date", DATE, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("@odata.type", ODATA_TYPE, STRING),
        Field::new("request-id", REQUEST_ID, STRING),
    ],
};

error_model!(InnerError, INNER_ERROR_SCHEMA);

impl InnerError {
    /// Client request id as sent in the `client-request-id` header.
    pub fn client_request_id(&self) -> Option<&str> {
        self.store.get_str(&CLIENT_REQUEST_ID)
    }

    pub fn set_client_request_id(&mut self, value: Option<String>) {
        self.store.set(CLIENT_REQUEST_ID, value.into());
    }

    pub fn date(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&DATE)
    }

    pub fn set_date(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(DATE, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }

    pub fn request_id(&self) -> Option<&str> {
        self.store.get_str(&REQUEST_ID)
    }

    pub fn set_request_id(&mut self, value: Option<String>) {
        self.store.set(REQUEST_ID, value.into());
    }
}
