use std::time::Instant;

use crate::{
    core::{
        decoder::decode,
        dispatch::Dispatch,
        fallback::Failure,
        problem::Problem,
        request::DispatchRequest,
    },
    prelude::*,
    solver::Solver,
};

/// Result of a single dispatch invocation.
#[must_use]
pub enum Outcome {
    Solved(Dispatch),

    /// The solver failed and the fallback was used instead.
    Fallback(Failure),
}

impl Outcome {
    /// Flows that are in effect, either decoded or fallen back to.
    pub const fn dispatch(&self) -> &Dispatch {
        match self {
            Self::Solved(dispatch) => dispatch,
            Self::Fallback(failure) => &failure.dispatch,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Row label for the summary tables.
    pub const fn label(&self, solver_name: &'static str) -> &'static str {
        match self {
            Self::Solved(_) => solver_name,
            Self::Fallback(_) => "Fallback",
        }
    }
}

/// Build the problem, solve it, and decode the solution.
///
/// Only the solver failure is recovered from, invalid requests are returned as errors.
#[instrument(skip_all, fields(solver = solver.name()))]
pub fn dispatch(request: &DispatchRequest, solver: &dyn Solver) -> Result<Outcome> {
    request.validate().context("invalid dispatch request")?;
    let start_instant = Instant::now();

    let problem = Problem::build(request);
    let solution = match solver.solve(&problem) {
        Ok(solution) => solution,
        Err(error) => {
            warn!("solver failed, falling back: {error:#}");
            return Ok(Outcome::Fallback(Failure::new(&error, request)));
        }
    };
    info!(%solution, objective = problem.objective(&solution.decisions()), "solved");

    let mut dispatch = decode(&solution.decisions(), request, problem.surplus);
    dispatch.metrics.compute_time = start_instant.elapsed();
    info!(
        storage_flow = ?dispatch.storage_flow,
        new_storage_charge = ?dispatch.new_storage_charge,
        total_cost = ?dispatch.metrics.total_cost,
        compute_time = ?dispatch.metrics.compute_time,
        "dispatched"
    );
    Ok(Outcome::Solved(dispatch))
}
