use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::DocumentId;
use crate::visualization::Visualization;

/// A reusable sheet definition owned by a user namespace.
///
/// A schema declares the variables an instance can hold, the properties
/// computed from them, and how the result is laid out. Instances reference
/// their schema by id and are stored separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique id of this schema within its (collection, user) partition.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Internal revision counter, bumped by the backend on publish.
    pub version: u64,
    /// User-facing version counter, controlled by the schema author.
    pub user_version: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Variable definitions by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, Variable>,
    /// Computed display values by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    /// Composable variable/property bundles by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub modules: BTreeMap<String, Module>,
    /// Opt-in groups of modules by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub features: BTreeMap<String, Feature>,
    /// Guided setup flow shown when an instance is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialization: Option<Initialization>,
    /// Default layout tree for instances of this schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<Visualization>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schema {
    /// Create a fresh schema with a generated id and both version counters
    /// starting at 1.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            version: 1,
            user_version: 1,
            name: name.into(),
            description: description.into(),
            variables: BTreeMap::new(),
            properties: BTreeMap::new(),
            modules: BTreeMap::new(),
            features: BTreeMap::new(),
            initialization: None,
            visualization: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A typed input slot on a schema.
///
/// The `type` tag selects the variant; per-type constraints ride along with
/// it (`min`/`max` for numbers, `options` for enums, `items` for arrays).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Variable {
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
    },
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    Enum {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<String>,
        options: Vec<String>,
    },
    Array {
        /// Element shape; `None` means untyped elements.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        items: Option<Box<Variable>>,
    },
}

/// A display value computed from variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Expression over variable names, evaluated by the client.
    pub formula: String,
    #[serde(default)]
    pub format: PropertyFormat,
}

/// How a computed property value is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFormat {
    #[default]
    Raw,
    Round,
    Floor,
    Ceil,
}

/// A composable bundle of variables and computed display values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub adds_variables: BTreeMap<String, Variable>,
    /// Computed properties contributed by this module. External key name kept
    /// from the original wire format.
    #[serde(
        rename = "adds_display_values",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub adds_properties: BTreeMap<String, Property>,
}

/// An opt-in group of modules an instance can activate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adds_modules: Vec<String>,
}

/// Guided setup flow presented when an instance is created from a schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Initialization {
    pub steps: Vec<InitializationStep>,
}

/// One page of the setup flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitializationStep {
    pub title: String,
    pub fields: Vec<Field>,
}

/// A single prompt in a setup step, bound to a variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub prompt: String,
    pub variable_name: String,
    pub formula: String,
}
