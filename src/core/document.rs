//! The `{"put": <id>, "fields": {...}}` record accepted by the document store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<F> {
    pub put: String,
    pub fields: F,
    /// Any other top-level keys, kept so a rewrite does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<F> Document<F> {
    pub fn new(put: impl Into<String>, fields: F) -> Self {
        Self {
            put: put.into(),
            fields,
            extra: Map::new(),
        }
    }
}

impl<F: Serialize> Document<F> {
    /// Serializes the document as a single JSON line without the trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_keeps_unknown_top_level_keys() {
        let line = r#"{"put":"id:shopping:item::1","fields":{"price":3},"condition":"true"}"#;
        let doc: Document<Map<String, Value>> = serde_json::from_str(line).unwrap();

        assert_eq!(doc.put, "id:shopping:item::1");
        assert_eq!(doc.fields.get("price"), Some(&json!(3)));
        assert_eq!(doc.extra.get("condition"), Some(&json!("true")));
        assert_eq!(doc.to_line().unwrap(), line);
    }

    #[test]
    fn test_document_keeps_large_numbers_exact() {
        let line = r#"{"put":"id:shopping:item::2","fields":{"sku":123456789012345678901234567890,"weight":0.10000000000000000555},"batch":18446744073709551616}"#;
        let doc: Document<Map<String, Value>> = serde_json::from_str(line).unwrap();

        assert_eq!(doc.to_line().unwrap(), line);
    }

    #[test]
    fn test_new_document_serializes_put_then_fields() {
        let doc = Document::new("id:x::1", json!({"a": 1}));
        assert_eq!(doc.to_line().unwrap(), r#"{"put":"id:x::1","fields":{"a":1}}"#);
    }
}
