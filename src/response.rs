//! Builders for a [`RunFunctionResponse`].

use crate::model::{FunctionResult, Resource, ResponseMeta, RunFunctionRequest, RunFunctionResponse, Severity, State};
use crate::resource::{DesiredComposedResources, Object, ResourceError};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::Duration;

/// How long the engine may cache a response by default.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Starts a response to `req`.
///
/// The tag and pipeline context are echoed, and the desired composite is
/// carried over. Desired composed resources start empty; they are only
/// written by [`set_desired_composed_resources`].
pub fn to(req: &RunFunctionRequest, ttl: Duration) -> RunFunctionResponse {
    RunFunctionResponse {
        meta: ResponseMeta { tag: req.tag().to_string(), ttl },
        desired: State {
            composite: req.desired.as_ref().and_then(|s| s.composite.clone()),
            resources: BTreeMap::new(),
        },
        results: Vec::new(),
        context: req.context.clone(),
    }
}

pub fn fatal(rsp: &mut RunFunctionResponse, err: impl Display) {
    rsp.results.push(FunctionResult { severity: Severity::Fatal, message: err.to_string() });
}

pub fn normal(rsp: &mut RunFunctionResponse, message: impl Into<String>) {
    rsp.results.push(FunctionResult { severity: Severity::Normal, message: message.into() });
}

/// Writes the desired composed resources into the response.
///
/// Every entry must carry an `apiVersion` and a `kind`, or the engine cannot
/// encode it. Nothing is written unless all entries pass.
pub fn set_desired_composed_resources(
    rsp: &mut RunFunctionResponse,
    resources: DesiredComposedResources,
) -> Result<(), ResourceError> {
    let mut wire = BTreeMap::new();
    for (name, desired) in resources {
        let missing = if desired.resource.api_version().is_empty() {
            Some("apiVersion")
        } else if desired.resource.kind().is_empty() {
            Some("kind")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(ResourceError::InvalidEntry { name, source: Box::new(ResourceError::Missing(field)) });
        }

        wire.insert(
            name,
            Resource {
                resource: Some(desired.resource.into_value()),
                connection_details: desired.connection_details,
                ready: desired.ready,
            },
        );
    }

    rsp.desired.resources = wire;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ready, RequestMeta};
    use crate::resource::{DesiredComposed, Unstructured};
    use serde_json::json;

    fn entry(value: serde_json::Value) -> DesiredComposed {
        DesiredComposed::new(Unstructured::from_value(value).unwrap())
    }

    #[test]
    fn echoes_tag_and_ttl() {
        let req = RunFunctionRequest {
            meta: Some(RequestMeta { tag: "hello".into() }),
            context: Some(json!({ "k": "v" })),
            ..Default::default()
        };
        let rsp = to(&req, DEFAULT_TTL);
        assert_eq!(rsp.meta.tag, "hello");
        assert_eq!(rsp.meta.ttl, Duration::from_secs(60));
        assert_eq!(rsp.context, Some(json!({ "k": "v" })));
        assert!(rsp.results.is_empty());
    }

    #[test]
    fn writes_all_entries() {
        let mut rsp = to(&RunFunctionRequest::default(), DEFAULT_TTL);
        let mut resources = DesiredComposedResources::new();
        resources.insert("a".into(), entry(json!({ "apiVersion": "v1", "kind": "ConfigMap" })));

        set_desired_composed_resources(&mut rsp, resources).unwrap();
        assert_eq!(rsp.desired.resources.len(), 1);
        assert_eq!(
            rsp.desired.resources["a"].resource,
            Some(json!({ "apiVersion": "v1", "kind": "ConfigMap" }))
        );
    }

    #[test]
    fn writes_connection_details_and_readiness() {
        let mut rsp = to(&RunFunctionRequest::default(), DEFAULT_TTL);
        let mut secret = entry(json!({ "apiVersion": "v1", "kind": "Secret" }));
        secret.ready = Ready::False;
        secret.connection_details.insert("password".into(), "cGFzcw==".into());
        let mut resources = DesiredComposedResources::new();
        resources.insert("secret".into(), secret);

        set_desired_composed_resources(&mut rsp, resources).unwrap();
        let written = &rsp.desired.resources["secret"];
        assert_eq!(written.ready, Ready::False);
        assert_eq!(written.connection_details["password"], "cGFzcw==");
    }

    #[test]
    fn entry_without_kind_writes_nothing() {
        let mut rsp = to(&RunFunctionRequest::default(), DEFAULT_TTL);
        let mut resources = DesiredComposedResources::new();
        resources.insert("good".into(), entry(json!({ "apiVersion": "v1", "kind": "ConfigMap" })));
        resources.insert("bad".into(), entry(json!({ "apiVersion": "v1" })));

        let err = set_desired_composed_resources(&mut rsp, resources).unwrap_err();
        assert_eq!(err.to_string(), "composed resource \"bad\": kind is missing");
        assert!(rsp.desired.resources.is_empty());
    }
}
