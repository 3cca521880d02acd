//! Safe zero-action result for when the solver fails.

use serde::Serialize;

use crate::{
    core::{
        dispatch::{Dispatch, Metrics},
        request::DispatchRequest,
    },
    prelude::*,
    quantity::{Zero, energy::KilowattHours},
};

impl Dispatch {
    /// Do nothing: keep the storage, curtail nothing, and report no metrics.
    pub fn fallback(request: &DispatchRequest) -> Self {
        Self {
            curtailment: KilowattHours::ZERO,
            storage_flow: KilowattHours::ZERO,
            new_storage_charge: request.storage_charge,
            metrics: Metrics::default(),
        }
    }
}

/// Failure report emitted instead of a regular response.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Failure {
    pub error: String,

    /// Always set, tells the consumer the flows are a fallback.
    pub fallback: bool,

    #[serde(flatten)]
    pub dispatch: Dispatch,
}

impl Failure {
    pub fn new(error: &Error, request: &DispatchRequest) -> Self {
        Self { error: format!("{error:#}"), fallback: true, dispatch: Dispatch::fallback(request) }
    }
}
