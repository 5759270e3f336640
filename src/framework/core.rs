//! # Function Server
//!
//! The server half owns the receiving end of a channel and hands every
//! request to the [`Function`] on a fresh task. The client half is a thin,
//! cloneable sender that awaits a one-shot reply.
//!
//! ## Error Split
//!
//! Domain failures travel inside the [`RunFunctionResponse`] as fatal results.
//! [`TransportError`] only says the request never got an answer.

use crate::model::{RunFunctionRequest, RunFunctionResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A request handler the engine can call.
///
/// Implementations must be stateless across calls: the server may run any
/// number of them concurrently against the same instance.
#[async_trait]
pub trait Function: Send + Sync + 'static {
    /// Runs the function once. Return `Err` only when no response can be built at all.
    async fn run_function(&self, req: RunFunctionRequest) -> Result<RunFunctionResponse, TransportError>;
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors raised by the plumbing between caller and function.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    #[error("Function server closed")]
    ServerClosed,
    #[error("Function server dropped response channel")]
    ServerDropped,
    #[error("Function could not build a response: {0}")]
    Internal(String),
}

/// Type alias for the one-shot response channel.
pub type Reply = oneshot::Sender<Result<RunFunctionResponse, TransportError>>;

/// A run request in flight.
#[derive(Debug)]
pub struct RunRequest {
    pub request: RunFunctionRequest,
    pub respond_to: Reply,
}

// =============================================================================
// 3. THE SERVER
// =============================================================================

/// Serves run requests for one [`Function`].
pub struct FunctionServer<F: Function> {
    receiver: mpsc::Receiver<RunRequest>,
    function: Arc<F>,
}

impl<F: Function> FunctionServer<F> {
    pub fn new(buffer_size: usize, function: F) -> (Self, FunctionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let server = Self { receiver, function: Arc::new(function) };
        (server, FunctionClient::new(sender))
    }

    /// Runs until every client is dropped, then waits for in-flight requests.
    pub async fn run(mut self) {
        // e.g. "BucketFunction" rather than the full module path
        let function_type = std::any::type_name::<F>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(function_type, "Function server started");

        let mut in_flight = JoinSet::new();
        let mut served: u64 = 0;

        while let Some(RunRequest { request, respond_to }) = self.receiver.recv().await {
            let function = Arc::clone(&self.function);
            served += 1;
            in_flight.spawn(async move {
                let tag = request.tag().to_string();
                let result = function.run_function(request).await;
                match &result {
                    Ok(rsp) if rsp.is_fatal() => warn!(function_type, %tag, "Run returned fatal result"),
                    Ok(rsp) => debug!(function_type, %tag, resources = rsp.desired.resources.len(), "Run ok"),
                    Err(e) => error!(function_type, %tag, error = %e, "Run failed"),
                }
                let _ = respond_to.send(result);
            });

            while let Some(done) = in_flight.try_join_next() {
                if let Err(e) = done {
                    error!(function_type, error = %e, "Request task failed");
                }
            }
        }

        while let Some(done) = in_flight.join_next().await {
            if let Err(e) = done {
                error!(function_type, error = %e, "Request task failed");
            }
        }

        info!(function_type, served, "Shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A handle for sending run requests to a [`FunctionServer`].
#[derive(Clone)]
pub struct FunctionClient {
    sender: mpsc::Sender<RunRequest>,
}

impl FunctionClient {
    pub fn new(sender: mpsc::Sender<RunRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip_all, fields(tag = request.tag()))]
    pub async fn run_function(&self, request: RunFunctionRequest) -> Result<RunFunctionResponse, TransportError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RunRequest { request, respond_to })
            .await
            .map_err(|_| TransportError::ServerClosed)?;
        response.await.map_err(|_| TransportError::ServerDropped)?
    }
}
