//! # graph-models: Backing-Store Models for Microsoft Graph
//!
//! Typed client models for the Graph REST API. Every model keeps its
//! properties in a string-keyed [`BackingStore`] instead of native fields, so
//! change tracking, partial updates and unknown-property passthrough come
//! for free.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `BackingStore`, `ParseNode` and `SerializationWriter` are
//!    the contracts between models and their storage/wire formats
//! 2. **Schemas, not hand-written loops**: each model exposes a static field
//!    table; parsing and serialization walk it
//! 3. **Inheritance by schema chain**: derived types extend their parent's
//!    table and implement the parent's accessor trait
//! 4. **Polymorphism by discriminator**: `@odata.type` picks the concrete type,
//!    unknown values fall back to the base
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graph_models::prelude::*;
//! use graph_models::models::Windows10CompliancePolicy;
//! use graph_models::serialization::json;
//!
//! # fn example() -> graph_models::Result<()> {
//! let body = br##"{"@odata.type":"#microsoft.graph.windows10CompliancePolicy","passwordRequired":true}"##;
//! let policy = json::parse(body, DeviceCompliancePolicy::create_from_discriminator_value)?;
//!
//! let win10 = downcast_ref::<Windows10CompliancePolicy>(&*policy).expect("windows 10 policy");
//! assert_eq!(win10.password_required(), Some(true));
//!
//! let out = json::to_string(&*policy)?;
//! # let _ = out;
//! # Ok(())
//! # }
//! ```
//!
//! ## Value Kinds
//!
//! | Kind | Rust type | Wire form |
//! |------|-----------|-----------|
//! | DateTime | `DateTime<FixedOffset>` | RFC 3339 |
//! | Date | `NaiveDate` | `YYYY-MM-DD` |
//! | Time | `NaiveTime` | `HH:MM:SS[.f]` |
//! | Duration | `IsoDuration` | ISO 8601 (`P1DT2H`) |
//! | Bytes | `Vec<u8>` | base64 |
//! | Enum | generated enum | symbol, comma-joined for flags |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod store;
pub mod serialization;
pub mod models;
pub mod response;
pub mod pagination;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{IsoDuration, ObjectValue, PropertyMap, Value};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{
    BackingStore, InMemoryBackingStore, StoreKey,
    new_backing_store, set_backing_store_factory,
};

// ============================================================================
// Re-exports: Serialization
// ============================================================================

pub use serialization::{
    AdditionalDataHolder, Parsable, ParsableFactory, ParseNode,
    SerializationWriter, downcast, downcast_ref,
};

// ============================================================================
// Re-exports: Responses
// ============================================================================

pub use response::{ApiError, ErrorMappings, RawResponse};
pub use pagination::PageIterator;
pub use config::SerializationOptions;

/// Everything needed to work with models: the accessor traits and the core
/// serialization traits.
pub mod prelude {
    pub use crate::models::{
        BaseCollectionPaginationCountResponseModel, DeviceCompliancePolicy,
        DeviceCompliancePolicyModel, DeviceConfiguration, DeviceConfigurationModel,
        Entity, EntityModel,
    };
    pub use crate::serialization::{
        AdditionalDataHolder, GraphEnum, Parsable, ParseNode, SerializationWriter,
        downcast, downcast_ref,
    };
    pub use crate::{BackingStore, Value};
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid backing store key: {0:?}")]
    InvalidKey(String),

    #[error("Unknown subscription: {0}")]
    UnknownSubscription(String),

    #[error("Failed to deserialize property '{property}': {message}")]
    Deserialization { property: String, message: String },

    #[error("Invalid {kind} value: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Unknown {enum_name} value: {value:?}")]
    InvalidEnumValue { enum_name: &'static str, value: String },

    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
