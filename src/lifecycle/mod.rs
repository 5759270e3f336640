//! Runtime orchestration and lifecycle management.
//!
//! - [`FunctionSystem`] - Builds the scheme, starts the server, and shuts it down
//! - [`FunctionConfig`] / [`Args`] - Settings from flags or environment
//! - [`serve`] - The JSON-lines stdio transport
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod function_system;
pub mod stdio;
pub mod tracing;

pub use config::*;
pub use function_system::*;
pub use stdio::*;
pub use self::tracing::*;
