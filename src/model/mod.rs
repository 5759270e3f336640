//! Wire types exchanged with the composition engine.
//!
//! These mirror the `RunFunctionRequest` / `RunFunctionResponse` envelope in its
//! JSON form. Resource bodies stay opaque ([`serde_json::Value`]) here; the
//! [`crate::request`] accessors turn them into [`crate::resource::Unstructured`]
//! objects and report anything malformed.

pub mod request;
pub mod response;
pub mod state;

pub use request::*;
pub use response::*;
pub use state::*;
