use composition_function::function::{BucketFunction, EXTRA_BUCKET_KEY, RENAMED_BUCKET_NAME};
use composition_function::model::{RunFunctionRequest, Severity};
use composition_function::resource::{s3, Scheme};
use composition_function::response::DEFAULT_TTL;
use serde_json::json;
use std::sync::Arc;

struct Case {
    reason: &'static str,
    request: serde_json::Value,
    severity: Severity,
    message: &'static str,
    resources: usize,
}

/// Mirrors how the engine calls the function, one request at a time.
#[test]
fn test_run_function() {
    let cases = [
        Case {
            reason: "no extra bucket when the flag asks for none",
            request: json!({
                "meta": { "tag": "hello" },
                "input": {
                    "apiVersion": "template.fn.crossplane.io/v1beta1",
                    "kind": "Input",
                    "extras": { "exampleFlag": "NoExtraBucket" }
                }
            }),
            severity: Severity::Normal,
            message: r#"I was run with input :{"NoExtraBucket"}!"#,
            resources: 0,
        },
        Case {
            reason: "an S3 bucket is added when the flag is ExtraBucket",
            request: json!({
                "meta": { "tag": "hello" },
                "input": {
                    "apiVersion": "template.fn.crossplane.io/v1beta1",
                    "kind": "Input",
                    "extras": { "exampleFlag": "ExtraBucket" }
                }
            }),
            severity: Severity::Normal,
            message: r#"I was run with input :{"ExtraBucket"}!"#,
            resources: 1,
        },
        Case {
            reason: "the legacy tgwMode key still selects the behaviour",
            request: json!({
                "meta": { "tag": "hello" },
                "input": { "extras": { "tgwMode": "ExtraBucket" } }
            }),
            severity: Severity::Normal,
            message: r#"I was run with input :{"ExtraBucket"}!"#,
            resources: 1,
        },
        Case {
            reason: "exampleFlag decides when the legacy key is also set",
            request: json!({
                "meta": { "tag": "hello" },
                "input": { "extras": { "exampleFlag": "ExtraBucket", "tgwMode": "whatever" } }
            }),
            severity: Severity::Normal,
            message: r#"I was run with input :{"ExtraBucket"}!"#,
            resources: 1,
        },
        Case {
            reason: "a request without input is fatal",
            request: json!({ "meta": { "tag": "hello" } }),
            severity: Severity::Fatal,
            message: "cannot get Function input from RunFunctionRequest: input is missing",
            resources: 0,
        },
    ];

    let function = BucketFunction::new(Arc::new(s3::add_to_scheme(Scheme::builder()).build()));

    for case in cases {
        let req: RunFunctionRequest = serde_json::from_value(case.request).unwrap();
        let rsp = function.run(&req);

        assert_eq!(rsp.meta.tag, "hello", "{}", case.reason);
        assert_eq!(rsp.meta.ttl, DEFAULT_TTL, "{}", case.reason);
        assert_eq!(rsp.results.len(), 1, "{}", case.reason);
        assert_eq!(rsp.results[0].severity, case.severity, "{}", case.reason);
        assert_eq!(rsp.results[0].message, case.message, "{}", case.reason);
        assert_eq!(rsp.desired.resources.len(), case.resources, "{}", case.reason);
    }
}

#[test]
fn test_bucket_rename_keeps_key_and_kind() {
    let function = BucketFunction::new(Arc::new(s3::add_to_scheme(Scheme::builder()).build()));
    let req: RunFunctionRequest = serde_json::from_value(json!({
        "input": { "apiVersion": "template.fn.crossplane.io/v1beta1", "kind": "Input" },
        "desired": { "resources": {
            "storage": {
                "resource": {
                    "apiVersion": "s3.aws.crossplane.io/v1beta1",
                    "kind": "Bucket",
                    "metadata": { "name": "old-name" },
                    "spec": { "forProvider": { "locationConstraint": "us-east-1" } }
                },
                "ready": "READY_TRUE"
            }
        } }
    }))
    .unwrap();

    let rsp = function.run(&req);
    assert_eq!(rsp.results[0].severity, Severity::Normal);
    assert_eq!(rsp.desired.resources.len(), 1);
    assert!(!rsp.desired.resources.contains_key(EXTRA_BUCKET_KEY));

    let storage = &rsp.desired.resources["storage"];
    let body = storage.resource.as_ref().unwrap();
    assert_eq!(body["metadata"]["name"], RENAMED_BUCKET_NAME);
    assert_eq!(body["kind"], "Bucket");
    assert_eq!(body["spec"]["forProvider"]["locationConstraint"], "us-east-1");
    assert_eq!(storage.ready, composition_function::model::Ready::True);
}

#[test]
fn test_other_kinds_pass_through_unchanged() {
    let function = BucketFunction::new(Arc::new(s3::add_to_scheme(Scheme::builder()).build()));
    let req: RunFunctionRequest = serde_json::from_value(json!({
        "input": { "extras": { "exampleFlag": "NoExtraBucket" } },
        "desired": { "resources": {
            "settings": {
                "resource": {
                    "apiVersion": "v1",
                    "kind": "ConfigMap",
                    "metadata": { "name": "settings", "labels": { "team": "storage" } },
                    "data": { "region": "us-east-1" }
                },
                "connectionDetails": { "user": "YWRtaW4=" },
                "ready": "READY_FALSE"
            },
            "storage": {
                "resource": {
                    "apiVersion": "s3.aws.crossplane.io/v1beta1",
                    "kind": "Bucket",
                    "metadata": { "name": "old-name" }
                },
                "connectionDetails": { "endpoint": "czM6Ly9idWNrZXQ=" }
            }
        } }
    }))
    .unwrap();
    let sent = req.desired.clone().unwrap();

    let rsp = function.run(&req);
    assert_eq!(rsp.results[0].severity, Severity::Normal);
    assert_eq!(
        rsp.desired.resources.keys().collect::<Vec<_>>(),
        sent.resources.keys().collect::<Vec<_>>()
    );
    assert_eq!(rsp.desired.resources["settings"], sent.resources["settings"]);

    let storage = &rsp.desired.resources["storage"];
    assert_eq!(storage.connection_details, sent.resources["storage"].connection_details);
    assert_eq!(storage.resource.as_ref().unwrap()["metadata"]["name"], RENAMED_BUCKET_NAME);
}
