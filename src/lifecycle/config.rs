//! Runtime configuration, from the command line or the environment.

use crate::response::DEFAULT_TTL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Settings the host runtime needs to serve the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    /// Cache hint written into every response.
    pub ttl: Duration,
    /// How many requests may queue before callers wait.
    pub buffer_size: usize,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL, buffer_size: 32 }
    }
}

/// Command-line arguments of the `composition-function` binary.
#[derive(Debug, Parser)]
#[command(name = "composition-function")]
#[command(about = "Renames desired Buckets and optionally adds one, one JSON request per line")]
#[command(version)]
pub struct Args {
    /// Read requests from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Response TTL in seconds
    #[arg(long, env = "FUNCTION_TTL_SECONDS", default_value_t = DEFAULT_TTL.as_secs())]
    pub ttl: u64,

    /// Requests that may queue before readers wait
    #[arg(long, env = "FUNCTION_BUFFER_SIZE", default_value_t = 32, value_parser = clap::value_parser!(u64).range(1..))]
    pub buffer_size: u64,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, env = "FUNCTION_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn config(&self) -> FunctionConfig {
        FunctionConfig {
            ttl: Duration::from_secs(self.ttl),
            buffer_size: self.buffer_size as usize,
        }
    }
}
