use serde::{Deserialize, Serialize};

/// Recursive layout tree describing how an instance is rendered.
///
/// The backend stores visualization trees verbatim; only the client
/// interprets them. `config` is free-form JSON whose shape depends on the
/// node kind (e.g. column counts for a grid).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: VisualizationKind,
    /// Nested layout nodes. `None` round-trips the original's null leaf.
    #[serde(default)]
    pub child_visualizations: Option<Vec<Visualization>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

/// The kind of layout node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationKind {
    #[default]
    Default,
    Grid,
    Card,
    Accordion,
}
