use super::FunctionConfig;
use crate::framework::FunctionClient;
use crate::function;
use crate::resource::{s3, Scheme};
use std::sync::Arc;
use tracing::{error, info};

/// The running function: scheme, server task, and a client to reach it.
///
/// # Example
///
/// ```ignore
/// let system = FunctionSystem::new(&FunctionConfig::default());
/// let rsp = system.client.run_function(req).await?;
/// system.shutdown().await?;
/// ```
pub struct FunctionSystem {
    /// Client for sending run requests to the server
    pub client: FunctionClient,

    /// Types the function may synthesize, shared read-only with the server
    pub scheme: Arc<Scheme>,

    handle: tokio::task::JoinHandle<()>,
}

impl FunctionSystem {
    /// Builds the scheme, starts the server task, and returns once it is accepting requests.
    pub fn new(config: &FunctionConfig) -> Self {
        // Registered once here and passed down, never looked up globally.
        let scheme = Arc::new(s3::add_to_scheme(Scheme::builder()).build());
        info!(types = scheme.len(), "Scheme ready");

        let (server, client) = function::new(Arc::clone(&scheme), config.ttl, config.buffer_size);
        let handle = tokio::spawn(server.run());

        Self { client, scheme, handle }
    }

    /// Drops the client and waits for the server to finish in-flight requests.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down function...");

        // Closing the last sender ends the server loop.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Function server task failed: {:?}", e);
            return Err(format!("Function server task failed: {:?}", e));
        }

        info!("Function shutdown complete.");
        Ok(())
    }
}
