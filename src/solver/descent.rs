use bon::Builder;
use ordered_float::OrderedFloat;

use crate::{
    core::{
        problem::Problem,
        solution::{DEFAULT_DECISIONS, Decisions, Solution},
        variable::Variable,
    },
    prelude::*,
    solver::Solver,
};

/// Deterministic steepest descent over single-variable flips.
///
/// Starts from the default assignment and stops at the first local minimum.
/// Infeasible assignments are never moved to, unless the starting point is infeasible itself.
#[derive(Builder)]
pub struct Descent {
    #[builder(default = 100)]
    max_iterations: usize,
}

impl Solver for Descent {
    fn name(&self) -> &'static str {
        "descent"
    }

    #[instrument(skip_all, fields(max_iterations = self.max_iterations))]
    fn solve(&self, problem: &Problem) -> Result<Solution> {
        problem.ensure_finite()?;

        let energy = |decisions: &Decisions| {
            if problem.is_feasible(decisions) {
                OrderedFloat(problem.objective(decisions))
            } else {
                OrderedFloat(f64::INFINITY)
            }
        };

        let mut current = DEFAULT_DECISIONS;
        let mut current_energy = energy(&current);
        for iteration in 0..=self.max_iterations {
            let (neighbour, neighbour_energy) = Variable::ALL
                .into_iter()
                .map(|variable| current.flipped(variable))
                .map(|neighbour| (neighbour, energy(&neighbour)))
                .min_by_key(|(_, energy)| *energy)
                .context("there are no variables to flip")?;
            if neighbour_energy >= current_energy {
                ensure!(current_energy.0.is_finite(), "no feasible assignment reached");
                debug!(iteration, energy = current_energy.0, "reached a local minimum");
                return Ok(current.into());
            }
            if iteration == self.max_iterations {
                break;
            }
            current = neighbour;
            current_energy = neighbour_energy;
        }
        bail!("did not converge within {} iterations", self.max_iterations)
    }
}
