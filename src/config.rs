//! Serialization options, loadable from JSON.
//!
//! ```json
//! { "pretty": true, "changed_only": false, "include_additional_data": true }
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationOptions {
    /// Indent output.
    pub pretty: bool,
    /// Write only entries changed since the model was loaded.
    pub changed_only: bool,
    /// Write undeclared properties kept from the input.
    pub include_additional_data: bool,
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            changed_only: false,
            include_additional_data: true,
        }
    }
}

impl SerializationOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = SerializationOptions::default();
        assert!(!options.pretty);
        assert!(!options.changed_only);
        assert!(options.include_additional_data);
    }

    #[test]
    fn test_partial_json() {
        let options = SerializationOptions::from_json(r#"{"pretty": true}"#).unwrap();
        assert_eq!(options, SerializationOptions { pretty: true, ..Default::default() });
        assert!(SerializationOptions::from_json(r#"{"pretty": "yes"}"#).is_err());
    }
}
