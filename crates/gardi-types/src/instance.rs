use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;
use crate::visualization::Visualization;

/// A filled-in sheet created from a [`Schema`](crate::Schema).
///
/// Instances hold concrete values for the schema's variables plus the set of
/// features and modules the owner has activated. The stored shape mirrors the
/// external wire format key-for-key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Unique id of this instance within its (collection, user) partition.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Id of the schema this instance was created from.
    #[serde(default)]
    pub schema_id: DocumentId,
    /// Owning user namespace.
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Concrete values by variable name; values are schema-shaped JSON.
    #[serde(default)]
    pub variable_values: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub active_features: Vec<String>,
    #[serde(default)]
    pub active_modules: Vec<String>,
    /// Layout override; `None` falls back to the schema's tree.
    #[serde(default)]
    pub visualization: Option<Visualization>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Instance {
    /// Create a fresh instance of the given schema with a generated id.
    pub fn new(
        schema_id: DocumentId,
        user_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            schema_id,
            user_id: user_id.into(),
            name: name.into(),
            description: description.into(),
            variable_values: BTreeMap::new(),
            active_features: Vec::new(),
            active_modules: Vec::new(),
            visualization: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_instance() -> Instance {
        let mut variable_values = BTreeMap::new();
        variable_values.insert("health".to_string(), json!(100.0));
        variable_values.insert("name".to_string(), json!("Hero"));
        Instance {
            id: DocumentId::new("instance-456"),
            schema_id: DocumentId::new("schema-12"),
            user_id: "user-789".into(),
            name: "My Character".into(),
            description: String::new(),
            variable_values,
            active_features: vec!["combat".into()],
            active_modules: vec!["weapons".into()],
            visualization: None,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn instance_serializes_with_external_key_names() {
        let json = serde_json::to_string_pretty(&sample_instance()).unwrap();
        for key in [
            "\"_id\"",
            "\"schema_id\"",
            "\"visualization\"",
            "\"user_id\"",
            "\"name\"",
            "\"variable_values\"",
            "\"active_features\"",
            "\"active_modules\"",
            "\"created_at\"",
            "\"updated_at\"",
        ] {
            assert!(json.contains(key), "JSON missing required key: {key}");
        }
        assert!(json.contains("\"_id\": \"instance-456\""));
        assert!(json.contains("\"user_id\": \"user-789\""));
    }

    #[test]
    fn instance_roundtrip() {
        let instance = sample_instance();
        let json = serde_json::to_vec(&instance).unwrap();
        let decoded: Instance = serde_json::from_slice(&json).unwrap();
        assert_eq!(decoded, instance);
    }

    #[test]
    fn instance_decodes_from_known_wire_format() {
        let json = r#"{
            "_id": "instance-789",
            "schema_id": "schema-123",
            "visualization": {
                "name": "Main",
                "type": "default",
                "child_visualizations": null
            },
            "user_id": "user-123",
            "name": "Test Instance",
            "variable_values": {
                "health": 50
            },
            "active_features": ["feature1"],
            "active_modules": ["module1"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.id.as_str(), "instance-789");
        assert_eq!(instance.user_id, "user-123");
        assert_eq!(instance.name, "Test Instance");
        assert_eq!(instance.active_features, vec!["feature1"]);
        assert_eq!(instance.variable_values["health"], json!(50));
        assert!(instance.visualization.is_some());
    }

    #[test]
    fn minimal_instance_decodes_with_defaults() {
        let json = r#"{
            "_id": "i1",
            "name": "Bare",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert!(instance.schema_id.is_empty());
        assert!(instance.variable_values.is_empty());
        assert!(instance.active_features.is_empty());
        assert!(instance.visualization.is_none());
    }

    #[test]
    fn new_instance_links_schema_and_user() {
        let instance = Instance::new(DocumentId::new("s1"), "alice", "Hero", "");
        assert_eq!(instance.schema_id.as_str(), "s1");
        assert_eq!(instance.user_id, "alice");
        assert!(!instance.id.is_empty());
        assert_eq!(instance.created_at, instance.updated_at);
    }
}
