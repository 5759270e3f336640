use super::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata the engine attaches to every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMeta {
    /// Opaque correlation tag, echoed back in the response.
    #[serde(default)]
    pub tag: String,
}

/// A request to run the function once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunFunctionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RequestMeta>,

    /// The function's configuration, as written in the composition pipeline step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<State>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired: Option<State>,

    /// Pipeline context shared between functions. Echoed back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RunFunctionRequest {
    /// Returns the correlation tag, or an empty string when no meta was sent.
    pub fn tag(&self) -> &str {
        self.meta.as_ref().map(|m| m.tag.as_str()).unwrap_or("")
    }
}
