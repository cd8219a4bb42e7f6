use crate::error::{CatalogError, CatalogErrorExt};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An OpenAPI/Swagger description document.
///
/// Kept as an untyped, order-preserving JSON object: the publisher never looks
/// inside beyond a few labels used for logging, and forwards it unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDocument(Map<String, Value>);

impl ApiDocument {
    /// Parses raw bytes into a document. Anything that is not a JSON object is rejected.
    ///
    /// # Errors
    /// Returns the underlying [`serde_json::Error`] for malformed JSON or a non-object root.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serializes the document to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CatalogError::Serialization`] if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, CatalogError> {
        serde_json::to_vec(&self.0).context("Failed to serialize API document")
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `openapi` (3.x) or `swagger` (2.0) version marker, if present.
    #[must_use]
    pub fn spec_version(&self) -> Option<&str> {
        self.get("openapi").or_else(|| self.get("swagger")).and_then(Value::as_str)
    }

    /// The `info.title` field, if present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get("info").and_then(|info| info.get("title")).and_then(Value::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_object_roots() {
        assert!(ApiDocument::from_slice(b"[1, 2, 3]").is_err());
        assert!(ApiDocument::from_slice(b"\"openapi\"").is_err());
        assert!(ApiDocument::from_slice(b"{not json").is_err());
    }

    #[test]
    fn test_preserves_key_order() {
        let raw = br#"{"zeta":1,"openapi":"3.0.0","alpha":{"b":2,"a":1}}"#;
        let doc = ApiDocument::from_slice(raw).unwrap();

        let keys: Vec<&str> = doc.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "openapi", "alpha"]);
        assert_eq!(doc.to_vec().unwrap(), raw.to_vec());
    }

    #[test]
    fn test_labels() {
        let doc = ApiDocument::from_slice(
            br#"{"swagger":"2.0","info":{"title":"Petstore","version":"1.0"}}"#,
        )
        .unwrap();
        assert_eq!(doc.spec_version(), Some("2.0"));
        assert_eq!(doc.title(), Some("Petstore"));
        assert_eq!(doc.len(), 2);
    }
}
