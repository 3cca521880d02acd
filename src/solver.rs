//! Pluggable minimization backends.
//!
//! Any component that minimizes `Σ cᵢxᵢ + Σ cᵢⱼxᵢxⱼ` over binary variables subject to the linear
//! constraints and returns an assignment, or fails, conforms. The approximation quality
//! is unconstrained: the decoder accepts any assignment.

mod descent;
mod exhaustive;
mod time_limited;

pub use self::{descent::Descent, exhaustive::Exhaustive, time_limited::TimeLimited};
use crate::{
    core::{problem::Problem, solution::Solution},
    prelude::*,
};

pub trait Solver {
    /// Solver name for logging.
    fn name(&self) -> &'static str;

    fn solve(&self, problem: &Problem) -> Result<Solution>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, problem: &Problem) -> Result<Solution> {
        (**self).solve(problem)
    }
}

/// Available solver backends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SolverKind {
    /// Enumerate every assignment, exact.
    Exhaustive,

    /// Steepest single-flip descent from the default assignment, heuristic.
    Descent,
}
