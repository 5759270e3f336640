use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Readiness of a composed resource as reported back to the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ready {
    #[default]
    #[serde(rename = "READY_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "READY_TRUE")]
    True,
    #[serde(rename = "READY_FALSE")]
    False,
}

/// A single resource as it travels on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// The resource body. Must be a JSON object to be usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Value>,

    /// Connection secret entries, base64 encoded. Passed through untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connection_details: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "is_unspecified")]
    pub ready: Ready,
}

fn is_unspecified(ready: &Ready) -> bool {
    *ready == Ready::Unspecified
}

/// Observed or desired state: the composite plus its composed resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<Resource>,

    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}
