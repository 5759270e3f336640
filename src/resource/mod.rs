//! Generic resources and the capability the transform works against.
//!
//! The transform never touches a concrete resource type. It sees composed
//! resources through the [`Object`] trait, and typed resources (like the S3
//! [`s3::Bucket`]) only become composed resources by going through a
//! [`Scheme`].

pub mod s3;
pub mod scheme;
pub mod unstructured;

pub use scheme::*;
pub use unstructured::*;

use crate::model::Ready;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key of a composed resource within a composite. Assigned by the composition author.
pub type Name = String;

/// Desired composed resources keyed by name.
pub type DesiredComposedResources = BTreeMap<Name, DesiredComposed>;

/// What the transform needs to know about a resource.
pub trait Object {
    fn api_version(&self) -> &str;

    fn kind(&self) -> &str;

    /// The display name (`metadata.name`). Empty when unset.
    fn name(&self) -> &str;

    fn set_name(&mut self, name: &str);
}

/// Errors raised while interpreting or converting resources.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("type {0} is not registered in the scheme")]
    NotRegistered(&'static str),

    #[error("{0} is missing")]
    Missing(&'static str),

    #[error("composed resource {name:?}: {source}")]
    InvalidEntry {
        name: Name,
        #[source]
        source: Box<ResourceError>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The composite resource, observed or desired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    pub resource: Unstructured,
    pub connection_details: BTreeMap<String, String>,
}

/// A composed resource the function wants to exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesiredComposed {
    pub resource: Unstructured,
    pub ready: Ready,
    /// Base64 encoded connection secret entries, carried to the response as is.
    pub connection_details: BTreeMap<String, String>,
}

impl DesiredComposed {
    pub fn new(resource: Unstructured) -> Self {
        Self { resource, ready: Ready::Unspecified, connection_details: BTreeMap::new() }
    }
}

/// Standard object metadata carried by typed resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl ObjectMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
