//! The slice of the AWS provider's S3 API this function synthesizes.

use super::{GroupVersionKind, ObjectMeta, SchemeBuilder};
use serde::Serialize;

pub const GROUP: &str = "s3.aws.crossplane.io";
pub const VERSION: &str = "v1beta1";

pub const BUCKET_KIND: GroupVersionKind = GroupVersionKind::new(GROUP, VERSION, "Bucket");

/// Registers the S3 types with a scheme.
pub fn add_to_scheme(builder: SchemeBuilder) -> SchemeBuilder {
    builder.register::<Bucket>(BUCKET_KIND)
}

/// A managed S3 bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bucket {
    pub metadata: ObjectMeta,
    pub spec: BucketSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSpec {
    pub for_provider: BucketParameters,
}

/// Provider-side bucket settings. Left empty so the provider picks its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketParameters {}
