//! # Mock Framework
//!
//! Utilities for testing callers of a function in isolation.
//!
//! Use [`MockFunction`] to script responses for a real [`FunctionServer`](super::FunctionServer),
//! or [`create_mock_client`] with [`expect_run`] to answer requests by hand.

use super::{Function, FunctionClient, Reply, RunRequest, TransportError};
use crate::model::{RunFunctionRequest, RunFunctionResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type Scripted = Result<RunFunctionResponse, TransportError>;

/// A function that replays scripted responses in order and records what it received.
///
/// # Example
/// ```ignore
/// let mock = MockFunction::new();
/// mock.expect_run().return_ok(rsp);
///
/// let (server, client) = FunctionServer::new(4, mock.clone());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockFunction {
    expectations: Arc<Mutex<VecDeque<Scripted>>>,
    received: Arc<Mutex<Vec<RunFunctionRequest>>>,
}

impl MockFunction {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one more run.
    pub fn expect_run(&self) -> RunExpectationBuilder {
        RunExpectationBuilder { expectations: self.expectations.clone() }
    }

    /// Requests received so far, in arrival order.
    pub fn received(&self) -> Vec<RunFunctionRequest> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Function for MockFunction {
    async fn run_function(&self, req: RunFunctionRequest) -> Result<RunFunctionResponse, TransportError> {
        self.received.lock().unwrap().push(req);
        let next = self.expectations.lock().unwrap().pop_front();
        next.unwrap_or_else(|| panic!("Unexpected run request"))
    }
}

/// Builder for run expectations.
pub struct RunExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Scripted>>>,
}

impl RunExpectationBuilder {
    /// Sets the expectation to return a response.
    pub fn return_ok(self, rsp: RunFunctionResponse) {
        self.expectations.lock().unwrap().push_back(Ok(rsp));
    }

    /// Sets the expectation to return a transport error.
    pub fn return_err(self, error: TransportError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// No server runs: the test reads requests with [`expect_run`] and answers
/// (or drops) the reply channel itself.
pub fn create_mock_client(buffer_size: usize) -> (FunctionClient, mpsc::Receiver<RunRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (FunctionClient::new(sender), receiver)
}

/// Takes the next request off the channel.
pub async fn expect_run(receiver: &mut mpsc::Receiver<RunRequest>) -> Option<(RunFunctionRequest, Reply)> {
    receiver
        .recv()
        .await
        .map(|RunRequest { request, respond_to }| (request, respond_to))
}
