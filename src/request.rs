//! Read-only accessors over a [`RunFunctionRequest`].
//!
//! Absent state is not an error: the engine omits sections it has nothing to
//! say about, and those read as empty. Present but malformed state is.

use crate::model::{Resource, RunFunctionRequest};
use crate::resource::{Composite, DesiredComposed, DesiredComposedResources, ResourceError, Unstructured};
use serde::de::DeserializeOwned;

/// Decodes the function input into `T`.
pub fn get_input<T: DeserializeOwned>(req: &RunFunctionRequest) -> Result<T, ResourceError> {
    let input = req.input.clone().ok_or(ResourceError::Missing("input"))?;
    Ok(serde_json::from_value(input)?)
}

pub fn get_observed_composite_resource(req: &RunFunctionRequest) -> Result<Composite, ResourceError> {
    composite(req.observed.as_ref().and_then(|s| s.composite.as_ref()))
}

pub fn get_desired_composite_resource(req: &RunFunctionRequest) -> Result<Composite, ResourceError> {
    composite(req.desired.as_ref().and_then(|s| s.composite.as_ref()))
}

/// Returns a fresh copy of the desired composed resources.
pub fn get_desired_composed_resources(req: &RunFunctionRequest) -> Result<DesiredComposedResources, ResourceError> {
    let Some(desired) = req.desired.as_ref() else {
        return Ok(DesiredComposedResources::new());
    };

    desired
        .resources
        .iter()
        .map(|(name, res)| {
            let resource = unstructured(res).map_err(|e| ResourceError::InvalidEntry {
                name: name.clone(),
                source: Box::new(e),
            })?;
            let entry = DesiredComposed {
                resource,
                ready: res.ready,
                connection_details: res.connection_details.clone(),
            };
            Ok::<_, ResourceError>((name.clone(), entry))
        })
        .collect()
}

fn composite(res: Option<&Resource>) -> Result<Composite, ResourceError> {
    let Some(res) = res else {
        return Ok(Composite::default());
    };
    Ok(Composite {
        resource: unstructured(res)?,
        connection_details: res.connection_details.clone(),
    })
}

fn unstructured(res: &Resource) -> Result<Unstructured, ResourceError> {
    match &res.resource {
        Some(value) => Unstructured::from_value(value.clone()),
        None => Ok(Unstructured::new()),
    }
}
