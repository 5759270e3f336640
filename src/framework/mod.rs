//! Host plumbing for serving a function.
//!
//! # Main Components
//!
//! - [`Function`] - Trait a request handler implements to be served
//! - [`FunctionServer`] - Receives run requests and serves each on its own task
//! - [`FunctionClient`] - Cloneable handle for sending run requests
//! - [`TransportError`] - Failures of the plumbing itself, never of the function
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test callers without a real function.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
