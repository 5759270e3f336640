//! Error types for the function run.

use crate::resource::{Name, ResourceError};
use std::fmt;
use thiserror::Error;

/// Which piece of request state could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStage {
    ObservedComposite,
    DesiredComposite,
    DesiredComposed,
}

impl fmt::Display for AccessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessStage::ObservedComposite => "observed composite resource",
            AccessStage::DesiredComposite => "desired composite resource",
            AccessStage::DesiredComposed => "desired composed resources",
        })
    }
}

/// Everything that can make a run fatal.
///
/// None of these reach the transport: each is turned into a single fatal
/// result on an otherwise normal response.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The input is missing, malformed or of the wrong shape.
    #[error("cannot get Function input from RunFunctionRequest: {0}")]
    Decode(#[source] ResourceError),

    /// Observed or desired state could not be read.
    #[error("cannot get {stage} from RunFunctionRequest: {source}")]
    Access {
        stage: AccessStage,
        #[source]
        source: ResourceError,
    },

    /// A resource to be added could not be built.
    #[error("failed to create new resource {key:?}: {source}")]
    Synthesis {
        key: Name,
        #[source]
        source: ResourceError,
    },

    /// The resulting resources could not be written to the response.
    #[error("cannot set desired composed resources: {0}")]
    ResponseBuild(#[source] ResourceError),
}

impl FunctionError {
    pub(crate) fn access(stage: AccessStage) -> impl FnOnce(ResourceError) -> Self {
        move |source| FunctionError::Access { stage, source }
    }
}
