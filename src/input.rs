//! The function's configuration, as written in a composition pipeline step.
//!
//! ```json
//! { "apiVersion": "template.fn.crossplane.io/v1beta1", "kind": "Input",
//!   "extras": { "exampleFlag": "ExtraBucket" } }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Flag value that asks the function to add the extra bucket.
pub const EXTRA_BUCKET: &str = "ExtraBucket";

/// Decoded function input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub extras: Extras,
}

/// Optional behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_flag: Option<String>,

    /// Older name of `exampleFlag`. Only read when `exampleFlag` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tgw_mode: Option<String>,
}

impl Extras {
    pub fn flag(&self) -> &str {
        self.example_flag
            .as_deref()
            .or(self.tgw_mode.as_deref())
            .unwrap_or("")
    }

    pub fn wants_extra_bucket(&self) -> bool {
        self.flag() == EXTRA_BUCKET
    }
}

impl fmt::Display for Extras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}}}", self.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flag_and_alias() {
        let input: Input = serde_json::from_value(json!({
            "apiVersion": "template.fn.crossplane.io/v1beta1",
            "kind": "Input",
            "extras": { "exampleFlag": "ExtraBucket" }
        }))
        .unwrap();
        assert!(input.extras.wants_extra_bucket());

        let aliased: Input = serde_json::from_value(json!({ "extras": { "tgwMode": "NoExtraBucket" } })).unwrap();
        assert_eq!(aliased.extras.flag(), "NoExtraBucket");
        assert!(!aliased.extras.wants_extra_bucket());
    }

    #[test]
    fn example_flag_wins_over_legacy_key() {
        let input: Input = serde_json::from_value(json!({
            "extras": { "exampleFlag": "ExtraBucket", "tgwMode": "whatever" }
        }))
        .unwrap();
        assert_eq!(input.extras.flag(), "ExtraBucket");
        assert!(input.extras.wants_extra_bucket());
    }

    #[test]
    fn missing_extras_means_no_flag() {
        let input: Input = serde_json::from_value(json!({ "kind": "Input" })).unwrap();
        assert_eq!(input.extras.example_flag, None);
        assert_eq!(input.extras.to_string(), r#"{""}"#);
    }

    #[test]
    fn extras_display_quotes_the_flag() {
        let extras = Extras { example_flag: Some("ExtraBucket".into()), ..Default::default() };
        assert_eq!(extras.to_string(), r#"{"ExtraBucket"}"#);
    }
}
