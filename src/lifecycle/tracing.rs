//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber that writes to
//! stderr, leaving stdout free for the response stream.
//!
//! ## What Gets Traced
//!
//! - **Server Lifecycle**: Startup, shutdown, and the number of requests served
//! - **Each Run**: The request tag, the decoded input, and every composed resource checked
//! - **Errors**: The failing stage and its cause
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info composition-function < requests.jsonl
//!
//! # Show decoded input and every resource
//! composition-function --debug < requests.jsonl
//!
//! # Filter to specific modules
//! RUST_LOG=composition_function::function=debug composition-function < requests.jsonl
//! ```
//!
//! `RUST_LOG` wins over `--debug` when both are set.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
