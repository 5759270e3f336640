use super::{Object, ResourceError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A resource held as a plain JSON object.
///
/// This is the generic representation every composed resource takes between
/// the request accessors and the response assembler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unstructured(Map<String, Value>);

impl Unstructured {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value, rejecting anything that is not an object.
    pub fn from_value(value: Value) -> Result<Self, ResourceError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ResourceError::NotAnObject(json_type(&other))),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn set_api_version(&mut self, api_version: &str) {
        self.0.insert("apiVersion".into(), Value::String(api_version.into()));
    }

    pub fn set_kind(&mut self, kind: &str) {
        self.0.insert("kind".into(), Value::String(kind.into()));
    }

    /// Looks up a nested field by path, e.g. `["spec", "forProvider"]`.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.as_object()?.get(*key))
    }

    fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

impl Object for Unstructured {
    fn api_version(&self) -> &str {
        self.str_field("apiVersion")
    }

    fn kind(&self) -> &str {
        self.str_field("kind")
    }

    fn name(&self) -> &str {
        self.get(&["metadata", "name"]).and_then(Value::as_str).unwrap_or("")
    }

    fn set_name(&mut self, name: &str) {
        let metadata = self
            .0
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));
        if !metadata.is_object() {
            *metadata = Value::Object(Map::new());
        }
        if let Value::Object(meta) = metadata {
            meta.insert("name".into(), Value::String(name.into()));
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_kind_and_name() {
        let obj = Unstructured::from_value(json!({
            "apiVersion": "s3.aws.crossplane.io/v1beta1",
            "kind": "Bucket",
            "metadata": { "name": "old-name" }
        }))
        .unwrap();

        assert_eq!(obj.api_version(), "s3.aws.crossplane.io/v1beta1");
        assert_eq!(obj.kind(), "Bucket");
        assert_eq!(obj.name(), "old-name");
    }

    #[test]
    fn set_name_creates_metadata() {
        let mut obj = Unstructured::from_value(json!({ "kind": "Bucket" })).unwrap();
        obj.set_name("fresh");
        assert_eq!(obj.name(), "fresh");

        let mut broken = Unstructured::from_value(json!({ "kind": "Bucket", "metadata": 7 })).unwrap();
        broken.set_name("fixed");
        assert_eq!(broken.get(&["metadata"]), Some(&json!({ "name": "fixed" })));
    }

    #[test]
    fn set_name_keeps_other_metadata() {
        let mut obj = Unstructured::from_value(json!({
            "kind": "Bucket",
            "metadata": { "name": "a", "labels": { "team": "storage" } }
        }))
        .unwrap();
        obj.set_name("b");
        assert_eq!(obj.get(&["metadata", "labels", "team"]), Some(&json!("storage")));
    }

    #[test]
    fn rejects_non_objects() {
        let err = Unstructured::from_value(json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, ResourceError::NotAnObject("array")));
    }
}
