//! Raw backend objects and their embedded value shapes
//!
//! Records come back as JSON objects with a backend-assigned id and managed
//! timestamps; every other property is kept as-is until the transformer
//! decides what to do with it. Reference values are stored as pointer
//! objects, file attachments as file objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A raw record fetched from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObject {
    /// Backend-assigned identity
    #[serde(rename = "objectId")]
    pub id: String,

    /// Backend-managed creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// Backend-managed update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// All remaining named properties
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl RawObject {
    /// Look up a property by key.
    ///
    /// An absent key and an explicit JSON null both resolve to `None`; the
    /// caller never sees a null value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|value| !value.is_null())
    }

    /// Look up a string property by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a boolean property by key
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }
}

/// A stored reference to another backend object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
    /// Storage class name of the referenced object
    pub class_name: String,

    /// Backend-assigned id of the referenced object
    pub id: String,
}

impl Pointer {
    /// Create a pointer to an object of a class
    pub fn new(class_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            id: id.into(),
        }
    }

    /// Decode a stored reference value.
    ///
    /// Returns `None` when the value is not a well-formed pointer object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.get("__type")?.as_str()? != "Pointer" {
            return None;
        }
        Some(Self {
            class_name: object.get("className")?.as_str()?.to_string(),
            id: object.get("objectId")?.as_str()?.to_string(),
        })
    }

    /// Encode as a value usable in an equality filter
    pub fn to_value(&self) -> Value {
        json!({
            "__type": "Pointer",
            "className": self.class_name,
            "objectId": self.id,
        })
    }
}

/// A stored file attachment with its resolved address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Backend-side file name
    pub name: Option<String>,

    /// Resolved download URL
    pub url: String,
}

impl FileRef {
    /// Decode a stored file value.
    ///
    /// Returns `None` when the value is not a well-formed file object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.get("__type")?.as_str()? != "File" {
            return None;
        }
        Some(Self {
            name: object.get("name").and_then(Value::as_str).map(String::from),
            url: object.get("url")?.as_str()?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> RawObject {
        serde_json::from_value(json!({
            "objectId": "abc123",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T11:30:00.000Z",
            "Title": "Hello",
            "draft": null,
            "published": true
        }))
        .unwrap()
    }

    #[test]
    fn test_raw_object_envelope() {
        let object = sample_object();
        assert_eq!(object.id, "abc123");
        assert_eq!(object.get_str("Title"), Some("Hello"));
        assert_eq!(object.get_bool("published"), Some(true));
    }

    #[test]
    fn test_raw_object_null_is_absent() {
        let object = sample_object();
        assert!(object.get("draft").is_none());
        assert!(object.get("missing").is_none());
    }

    #[test]
    fn test_pointer_roundtrip() {
        let pointer = Pointer::new("ct_author", "A1");
        let decoded = Pointer::from_value(&pointer.to_value()).unwrap();
        assert_eq!(decoded, pointer);
    }

    #[test]
    fn test_pointer_rejects_other_shapes() {
        assert!(Pointer::from_value(&json!("A1")).is_none());
        assert!(Pointer::from_value(&json!({"__type": "File", "url": "x"})).is_none());
        assert!(Pointer::from_value(&json!({"className": "ct_author", "objectId": "A1"})).is_none());
    }

    #[test]
    fn test_file_ref_from_value() {
        let file = FileRef::from_value(&json!({
            "__type": "File",
            "name": "y.png",
            "url": "https://x/y.png"
        }))
        .unwrap();
        assert_eq!(file.url, "https://x/y.png");
        assert_eq!(file.name.as_deref(), Some("y.png"));
    }

    #[test]
    fn test_file_ref_requires_url() {
        assert!(FileRef::from_value(&json!({"__type": "File", "name": "y.png"})).is_none());
    }
}
