//! # Composition Function
//!
//! > **Rename every desired Bucket, and add one more on request.**
//!
//! This crate is a composition function: the composition engine hands it the
//! observed and desired state of a composite resource, and it hands back a
//! revised set of desired composed resources plus a status message.
//!
//! ## 🏗️ What A Run Does
//!
//! 1. Decode the [`Input`](input::Input) from the request.
//! 2. Read the observed composite, desired composite, and desired composed resources.
//! 3. Rename every composed resource of kind `Bucket` to `NewNameXYZ`.
//! 4. If `extras.exampleFlag` is `ExtraBucket`, add an S3 bucket under `dynamicXPlaneFnBucket`.
//! 5. Write the resources back and add a normal result echoing the input.
//!
//! Any failure along the way stops the run and becomes one fatal result on the
//! response. Only plumbing failures surface as a
//! [`TransportError`](framework::TransportError).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Function ([`function`])
//! - **Role**: The run itself and its rule set.
//! - **Key items**: [`BucketFunction`](function::BucketFunction), [`Rules`](function::Rules),
//!   [`FunctionError`](function::FunctionError).
//!
//! ### 2. Resources ([`resource`])
//! - **Role**: The [`Object`](resource::Object) capability the rules work against, the
//!   [`Scheme`](resource::Scheme) registry that turns typed resources into generic ones,
//!   and the S3 [`Bucket`](resource::s3::Bucket).
//!
//! ### 3. The Envelope ([`model`], [`request`], [`response`])
//! - **Role**: Wire types, read-only accessors, and response builders.
//!
//! ### 4. The Host ([`framework`], [`lifecycle`])
//! - **Role**: A server that runs each request on its own task, a client to reach it,
//!   configuration, tracing, and a JSON-lines stdio transport.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! echo '{"meta":{"tag":"t"},"input":{"extras":{"exampleFlag":"ExtraBucket"}}}' \
//!   | RUST_LOG=info cargo run
//! ```

pub mod framework;
pub mod function;
pub mod input;
pub mod lifecycle;
pub mod model;
pub mod request;
pub mod resource;
pub mod response;
