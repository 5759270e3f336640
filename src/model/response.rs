use super::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Severity of a [`FunctionResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    #[serde(rename = "SEVERITY_UNSPECIFIED")]
    Unspecified,
    /// The call failed. The engine must not apply the returned state.
    #[serde(rename = "SEVERITY_FATAL")]
    Fatal,
    #[serde(rename = "SEVERITY_WARNING")]
    Warning,
    /// Informational. The call succeeded.
    #[serde(rename = "SEVERITY_NORMAL")]
    Normal,
}

/// A status message attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub severity: Severity,
    pub message: String,
}

/// Response metadata: the echoed tag and a cache hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub tag: String,

    /// How long the engine may reuse this response before calling again.
    #[serde(with = "duration_string")]
    pub ttl: Duration,
}

/// The outcome of a single function run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFunctionResponse {
    pub meta: ResponseMeta,

    #[serde(default)]
    pub desired: State,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<FunctionResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

impl RunFunctionResponse {
    /// Returns true if any result is fatal.
    pub fn is_fatal(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Fatal)
    }
}

/// Durations in the protobuf JSON form, e.g. `"60s"` or `"1.5s"`.
mod duration_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("{}s", d.as_secs_f64()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(d)?;
        let secs = raw
            .strip_suffix('s')
            .ok_or_else(|| D::Error::custom(format!("duration {raw:?} must end in 's'")))?;
        let secs: f64 = secs.parse().map_err(D::Error::custom)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
