//! Content-type keyed registries of parse node and writer factories.
//!
//! Lookups normalise the content type first: parameters are dropped and a
//! vendor prefix collapses onto its structured suffix, so
//! `application/vnd.ms-graph+json; charset=utf-8` resolves to the
//! `application/json` factory.

use std::sync::Arc;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::SerializationOptions;
use crate::serialization::json::{self, JsonParseNode, JsonSerializationWriter};
use crate::serialization::{ParseNode, SerializationWriter};
use crate::{Error, Result};

// ============================================================================
// Factory traits
// ============================================================================

pub trait ParseNodeFactory: Send + Sync {
    fn valid_content_type(&self) -> &str;

    fn root_parse_node(&self, content: &[u8]) -> Result<Box<dyn ParseNode>>;
}

pub trait SerializationWriterFactory: Send + Sync {
    fn valid_content_type(&self) -> &str;

    fn serialization_writer(&self) -> Box<dyn SerializationWriter>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParseNodeFactory;

impl ParseNodeFactory for JsonParseNodeFactory {
    fn valid_content_type(&self) -> &str {
        json::CONTENT_TYPE
    }

    fn root_parse_node(&self, content: &[u8]) -> Result<Box<dyn ParseNode>> {
        Ok(Box::new(JsonParseNode::from_slice(content)?))
    }
}

#[derive(Debug, Default, Clone)]
pub struct JsonSerializationWriterFactory {
    pub options: SerializationOptions,
}

impl JsonSerializationWriterFactory {
    pub fn new(options: SerializationOptions) -> Self {
        Self { options }
    }
}

impl SerializationWriterFactory for JsonSerializationWriterFactory {
    fn valid_content_type(&self) -> &str {
        json::CONTENT_TYPE
    }

    fn serialization_writer(&self) -> Box<dyn SerializationWriter> {
        Box::new(JsonSerializationWriter::with_options(self.options.clone()))
    }
}

/// Lower-case `type/subtype` without parameters or vendor prefix.
pub fn normalize_content_type(content_type: &str) -> String {
    let base = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match base.split_once('/') {
        Some((kind, subtype)) => {
            let subtype = subtype.rsplit_once('+').map_or(subtype, |(_, suffix)| suffix);
            format!("{kind}/{subtype}")
        }
        None => base,
    }
}

// ============================================================================
// Registries
// ============================================================================

#[derive(Default)]
pub struct ParseNodeFactoryRegistry {
    factories: RwLock<HashMap<String, Arc<dyn ParseNodeFactory>>>,
}

impl ParseNodeFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the JSON factory registered.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(JsonParseNodeFactory));
        registry
    }

    pub fn register(&self, factory: Arc<dyn ParseNodeFactory>) {
        let key = normalize_content_type(factory.valid_content_type());
        self.factories.write().insert(key, factory);
    }

    pub fn content_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.factories.read().keys().cloned().collect();
        types.sort();
        types
    }

    pub fn root_parse_node(&self, content_type: &str, content: &[u8]) -> Result<Box<dyn ParseNode>> {
        let key = normalize_content_type(content_type);
        let factory = self.factories.read().get(&key).cloned();
        tracing::trace!(content_type, normalized = %key, found = factory.is_some(), "parse node factory lookup");
        match factory {
            Some(factory) => factory.root_parse_node(content),
            None => Err(Error::UnsupportedContentType(content_type.to_owned())),
        }
    }
}

#[derive(Default)]
pub struct SerializationWriterFactoryRegistry {
    factories: RwLock<HashMap<String, Arc<dyn SerializationWriterFactory>>>,
}

impl SerializationWriterFactoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(JsonSerializationWriterFactory::default()));
        registry
    }

    pub fn register(&self, factory: Arc<dyn SerializationWriterFactory>) {
        let key = normalize_content_type(factory.valid_content_type());
        self.factories.write().insert(key, factory);
    }

    pub fn content_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.factories.read().keys().cloned().collect();
        types.sort();
        types
    }

    pub fn serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>> {
        let key = normalize_content_type(content_type);
        let factory = self.factories.read().get(&key).cloned();
        tracing::trace!(content_type, normalized = %key, found = factory.is_some(), "writer factory lookup");
        match factory {
            Some(factory) => Ok(factory.serialization_writer()),
            None => Err(Error::UnsupportedContentType(content_type.to_owned())),
        }
    }
}

static PARSE_NODE_REGISTRY: Lazy<ParseNodeFactoryRegistry> =
    Lazy::new(ParseNodeFactoryRegistry::with_defaults);

static WRITER_REGISTRY: Lazy<SerializationWriterFactoryRegistry> =
    Lazy::new(SerializationWriterFactoryRegistry::with_defaults);

/// Process-wide parse node registry, pre-registered with JSON.
pub fn default_parse_node_registry() -> &'static ParseNodeFactoryRegistry {
    &PARSE_NODE_REGISTRY
}

/// Process-wide writer registry, pre-registered with JSON.
pub fn default_writer_registry() -> &'static SerializationWriterFactoryRegistry {
    &WRITER_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_content_type() {
        assert_eq!(normalize_content_type("application/json"), "application/json");
        assert_eq!(normalize_content_type("Application/JSON; charset=utf-8"), "application/json");
        assert_eq!(normalize_content_type("application/vnd.ms-graph+json"), "application/json");
        assert_eq!(normalize_content_type("text/plain"), "text/plain");
        assert_eq!(normalize_content_type("garbage"), "garbage");
    }

    #[test]
    fn test_parse_node_lookup() {
        let registry = ParseNodeFactoryRegistry::with_defaults();
        let node = registry
            .root_parse_node("application/json; odata.metadata=minimal", br#"{"id":"1"}"#)
            .unwrap();
        assert_eq!(node.child_node("id").unwrap().string_value().unwrap(), Some("1".into()));

        let err = registry.root_parse_node("text/xml", b"<x/>").err().unwrap();
        assert!(matches!(err, Error::UnsupportedContentType(ct) if ct == "text/xml"));
    }

    #[test]
    fn test_writer_lookup() {
        let registry = SerializationWriterFactoryRegistry::new();
        assert!(registry.serialization_writer("application/json").is_err());

        let options = SerializationOptions { pretty: true, ..Default::default() };
        registry.register(Arc::new(JsonSerializationWriterFactory::new(options)));
        let mut writer = registry.serialization_writer("application/json").unwrap();
        writer.write_int32_value("n", 1).unwrap();
        assert_eq!(writer.serialized_content().unwrap(), b"{\n  \"n\": 1\n}");
        assert_eq!(registry.content_types(), vec!["application/json"]);
    }

    #[test]
    fn test_reregistering_replaces_factory() {
        let registry = ParseNodeFactoryRegistry::with_defaults();
        registry.register(Arc::new(JsonParseNodeFactory));
        assert_eq!(registry.content_types(), vec!["application/json"]);
        assert!(registry.root_parse_node("application/vnd.ms-graph+json", b"{}").is_ok());
    }

    #[test]
    fn test_defaults_are_shared() {
        assert!(default_parse_node_registry().content_types().contains(&"application/json".to_owned()));
        assert!(default_writer_registry().serialization_writer("application/json").is_ok());
    }
}
