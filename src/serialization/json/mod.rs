//! # JSON
//!
//! `application/json` parse nodes and writers over `serde_json`, plus
//! one-call helpers for the common model ↔ bytes conversions.

pub mod parse_node;
pub mod writer;

pub use parse_node::JsonParseNode;
pub use writer::JsonSerializationWriter;

use serde_json::Value as JsonValue;

use crate::config::SerializationOptions;
use crate::serialization::{Parsable, ParsableFactory, SerializationWriter, downcast};
use crate::{Error, Result};

pub const CONTENT_TYPE: &str = "application/json";

/// Serialize a model to a JSON value.
pub fn to_json_value(model: &dyn Parsable) -> Result<JsonValue> {
    let mut writer = JsonSerializationWriter::new();
    model.serialize(&mut writer)?;
    Ok(writer.into_json())
}

pub fn to_vec(model: &dyn Parsable) -> Result<Vec<u8>> {
    to_vec_with(model, &SerializationOptions::default())
}

pub fn to_vec_with(model: &dyn Parsable, options: &SerializationOptions) -> Result<Vec<u8>> {
    let mut writer = JsonSerializationWriter::with_options(options.clone());
    model.serialize(&mut writer)?;
    writer.serialized_content()
}

pub fn to_string(model: &dyn Parsable) -> Result<String> {
    let bytes = to_vec(model)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse a JSON document into a model chosen by `factory`.
pub fn parse(content: &[u8], factory: ParsableFactory) -> Result<Box<dyn Parsable>> {
    let node = JsonParseNode::from_slice(content)?;
    node.object_value(factory)?.ok_or(Error::TypeMismatch {
        expected: "object",
        got: "null".to_owned(),
    })
}

/// Parse and take the result as a concrete type.
pub fn parse_as<T: Parsable>(content: &[u8], factory: ParsableFactory) -> Result<T> {
    Ok(*downcast::<T>(parse(content, factory)?)?)
}
