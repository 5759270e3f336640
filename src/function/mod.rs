//! The composition function: rename Buckets, optionally add one.

pub mod error;
pub mod rules;

pub use error::*;
pub use rules::*;

use crate::framework::{Function, FunctionClient, FunctionServer, TransportError};
use crate::input::Input;
use crate::model::{RunFunctionRequest, RunFunctionResponse, State};
use crate::resource::Scheme;
use crate::{request, response};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Creates a server running [`BucketFunction`] and its client.
pub fn new(scheme: Arc<Scheme>, ttl: Duration, buffer_size: usize) -> (FunctionServer<BucketFunction>, FunctionClient) {
    FunctionServer::new(buffer_size, BucketFunction::new(scheme).with_ttl(ttl))
}

/// Renames every desired Bucket and, when asked, adds an extra one.
pub struct BucketFunction {
    scheme: Arc<Scheme>,
    rules: Rules,
    ttl: Duration,
}

impl BucketFunction {
    pub fn new(scheme: Arc<Scheme>) -> Self {
        Self { scheme, rules: Rules::default(), ttl: response::DEFAULT_TTL }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Runs the function once.
    ///
    /// Never fails: any problem ends up as a single fatal result on the
    /// returned response, with no desired state at all.
    pub fn run(&self, req: &RunFunctionRequest) -> RunFunctionResponse {
        info!(tag = req.tag(), "Running function");

        let mut rsp = response::to(req, self.ttl);
        if let Err(e) = self.compose(req, &mut rsp) {
            warn!(tag = req.tag(), error = %e, "Function failed");
            rsp.desired = State::default();
            response::fatal(&mut rsp, e);
        }
        rsp
    }

    fn compose(&self, req: &RunFunctionRequest, rsp: &mut RunFunctionResponse) -> Result<(), FunctionError> {
        let input: Input = request::get_input(req).map_err(FunctionError::Decode)?;
        debug!(?input, "Received input");

        let oxr = request::get_observed_composite_resource(req)
            .map_err(FunctionError::access(AccessStage::ObservedComposite))?;
        debug!(oxr = ?oxr.resource, "Observed composite resource");

        let dxr = request::get_desired_composite_resource(req)
            .map_err(FunctionError::access(AccessStage::DesiredComposite))?;
        if dxr.resource.is_empty() {
            debug!("Desired composite resource is empty");
        } else {
            debug!(dxr = ?dxr.resource, "Desired composite resource");
        }

        let dcr = request::get_desired_composed_resources(req)
            .map_err(FunctionError::access(AccessStage::DesiredComposed))?;
        info!(count = dcr.len(), "Desired composed resources");

        let desired = self.rules.transform(&input, &self.scheme, &dcr)?;
        for (key, entry) in &desired {
            debug!(%key, resource = ?entry.resource, "Desired resource");
        }

        response::set_desired_composed_resources(rsp, desired).map_err(FunctionError::ResponseBuild)?;
        response::normal(rsp, format!("I was run with input :{}!", input.extras));
        Ok(())
    }
}

#[async_trait]
impl Function for BucketFunction {
    async fn run_function(&self, req: RunFunctionRequest) -> Result<RunFunctionResponse, TransportError> {
        Ok(self.run(&req))
    }
}
