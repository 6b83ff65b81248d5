//! # Response Decoding
//!
//! Turns a raw HTTP response (status, content type, body) into a model or
//! an [`ApiError`]. Transport stays with the caller; this module only sees
//! bytes.
//!
//! ## Error factories
//!
//! [`ErrorMappings`] maps status patterns to error model factories. A
//! failing status picks its factory in this order:
//!
//! 1. the exact code (`"404"`)
//! 2. the class (`"4XX"` / `"5XX"`)
//! 3. the catch-all (`"XXX"`)

use std::fmt;

use hashbrown::HashMap;

use crate::models::odataerrors::ODataError;
use crate::serialization::registry::ParseNodeFactoryRegistry;
use crate::serialization::{Parsable, ParsableFactory, ParseNode, downcast_ref};
use crate::{Error, Result};

const DEFAULT_ERROR_MESSAGE: &str = "error status code received from the API";

/// A response as received, borrowed from the transport.
#[derive(Debug, Clone, Copy)]
pub struct RawResponse<'a> {
    pub status_code: u16,
    pub content_type: Option<&'a str>,
    pub body: &'a [u8],
}

impl<'a> RawResponse<'a> {
    pub fn json(status_code: u16, body: &'a [u8]) -> Self {
        Self { status_code, content_type: Some("application/json"), body }
    }

    fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    fn has_content(&self) -> bool {
        self.status_code != 204 && !self.body.is_empty() && self.content_type.is_some()
    }
}

// ============================================================================
// ErrorMappings
// ============================================================================

/// Status pattern → error model factory.
#[derive(Clone, Default)]
pub struct ErrorMappings {
    factories: HashMap<String, ParsableFactory>,
}

impl ErrorMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual Graph mapping: `ODataError` for every 4XX and 5XX.
    pub fn odata() -> Self {
        Self::new()
            .with("4XX", ODataError::create_from_discriminator_value)
            .with("5XX", ODataError::create_from_discriminator_value)
    }

    pub fn with(mut self, pattern: &str, factory: ParsableFactory) -> Self {
        self.insert(pattern, factory);
        self
    }

    pub fn insert(&mut self, pattern: &str, factory: ParsableFactory) {
        self.factories.insert(pattern.to_ascii_uppercase(), factory);
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Factory for `status_code`: exact code, then class, then `XXX`.
    pub fn resolve(&self, status_code: u16) -> Option<ParsableFactory> {
        let exact = status_code.to_string();
        let class = match status_code {
            400..=499 => Some("4XX"),
            500..=599 => Some("5XX"),
            _ => None,
        };
        self.factories
            .get(exact.as_str())
            .or_else(|| class.and_then(|class| self.factories.get(class)))
            .or_else(|| self.factories.get("XXX"))
            .copied()
    }
}

impl fmt::Debug for ErrorMappings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut patterns: Vec<_> = self.factories.keys().collect();
        patterns.sort();
        f.debug_struct("ErrorMappings").field("patterns", &patterns).finish()
    }
}

// ============================================================================
// ApiError
// ============================================================================

/// A failing response, with its parsed error model when there was one.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
    pub error: Option<Box<dyn Parsable>>,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self { status_code, message: message.into(), error: None }
    }

    fn from_model(status_code: u16, model: Box<dyn Parsable>) -> Self {
        let message = downcast_ref::<ODataError>(&*model)
            .and_then(ODataError::message)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_owned();
        Self { status_code, message, error: Some(model) }
    }

    /// The parsed error model as `T`.
    pub fn error_as<T: Parsable>(&self) -> Option<&T> {
        self.error.as_deref().and_then(downcast_ref::<T>)
    }
}

// ============================================================================
// Decoding
// ============================================================================

fn root_node(
    response: &RawResponse<'_>,
    registry: &ParseNodeFactoryRegistry,
) -> Result<Option<Box<dyn ParseNode>>> {
    if !response.has_content() {
        return Ok(None);
    }
    let content_type = response.content_type.unwrap_or_default();
    registry.root_parse_node(content_type, response.body).map(Some)
}

fn throw_failed_response(
    response: &RawResponse<'_>,
    mappings: &ErrorMappings,
    registry: &ParseNodeFactoryRegistry,
) -> Error {
    let status = response.status_code;
    let Some(factory) = mappings.resolve(status) else {
        return ApiError::new(
            status,
            format!(
                "The server returned an unexpected status code and no error factory is registered for this code: {status}"
            ),
        )
        .into();
    };

    let node = match root_node(response, registry) {
        Ok(Some(node)) => node,
        Ok(None) => {
            return ApiError::new(
                status,
                format!("The server returned an unexpected status code with no response body: {status}"),
            )
            .into();
        }
        Err(err) => return err,
    };

    match node.object_value(factory) {
        Ok(Some(model)) => ApiError::from_model(status, model).into(),
        Ok(None) => ApiError::new(
            status,
            format!("The server returned an unexpected status code but the error could not be deserialized: {status}"),
        )
        .into(),
        Err(err) => {
            tracing::debug!(status, error = %err, "error body did not parse");
            err
        }
    }
}

/// Decode a single-model response.
///
/// `Ok(None)` for 204, an empty body or a missing content type.
pub fn decode_response(
    response: &RawResponse<'_>,
    factory: ParsableFactory,
    mappings: &ErrorMappings,
    registry: &ParseNodeFactoryRegistry,
) -> Result<Option<Box<dyn Parsable>>> {
    if response.is_error() {
        return Err(throw_failed_response(response, mappings, registry));
    }
    let Some(node) = root_node(response, registry)? else {
        return Ok(None);
    };
    node.object_value(factory)
}

/// Decode a response whose body is a top-level array of models.
pub fn decode_collection_response(
    response: &RawResponse<'_>,
    factory: ParsableFactory,
    mappings: &ErrorMappings,
    registry: &ParseNodeFactoryRegistry,
) -> Result<Option<Vec<Box<dyn Parsable>>>> {
    if response.is_error() {
        return Err(throw_failed_response(response, mappings, registry));
    }
    let Some(node) = root_node(response, registry)? else {
        return Ok(None);
    };
    node.collection_of_object_values(factory)
}
