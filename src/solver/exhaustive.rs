use ordered_float::OrderedFloat;

use crate::{
    core::{
        problem::Problem,
        solution::{Decisions, Solution},
        variable::Variable,
    },
    prelude::*,
    solver::Solver,
};

/// Exact solver that enumerates all `2ⁿ` assignments.
///
/// Ties are resolved in favour of the lowest bit mask.
pub struct Exhaustive;

impl Solver for Exhaustive {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    #[instrument(skip_all)]
    fn solve(&self, problem: &Problem) -> Result<Solution> {
        problem.ensure_finite()?;
        let (decisions, objective) = (0..1_u8 << Variable::N)
            .map(Decisions::from_mask)
            .filter(|decisions| problem.is_feasible(decisions))
            .map(|decisions| (decisions, problem.objective(&decisions)))
            .min_by_key(|(_, objective)| OrderedFloat(*objective))
            .context("no feasible assignment")?;
        debug!(objective, "found the optimum");
        Ok(decisions.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            problem::{Constraint, Sense},
            request::DispatchRequest,
        },
        quantity::energy::KilowattHours,
    };

    fn problem(solar_gen: f64, wind_gen: f64, demand: f64) -> Problem {
        Problem::build(
            &DispatchRequest::builder()
                .solar_gen(KilowattHours(solar_gen))
                .wind_gen(KilowattHours(wind_gen))
                .demand(KilowattHours(demand))
                .storage_charge(KilowattHours(20.0))
                .storage_capacity(KilowattHours(100.0))
                .build(),
        )
    }

    #[test]
    fn test_optimum() -> Result {
        let solution = Exhaustive.solve(&problem(50.0, 30.0, 60.0))?;
        assert_eq!(solution, Solution::from_bits(&[1, 1, 0, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_optimum_is_global() -> Result {
        let problem = problem(10.0, 10.0, 50.0);
        let solution = Exhaustive.solve(&problem)?;
        let best = problem.objective(&solution.decisions());
        for mask in 0..32 {
            assert!(best <= problem.objective(&Decisions::from_mask(mask)));
        }
        Ok(())
    }

    #[test]
    fn test_respects_constraints() -> Result {
        let mut problem = problem(10.0, 10.0, 50.0);
        problem.constraints.push(Constraint {
            name: "force_discharge",
            terms: vec![(Variable::DischargeStorage, 1.0)],
            sense: Sense::Equal,
            rhs: 1.0,
        });
        let decisions = Exhaustive.solve(&problem)?.decisions();
        assert!(decisions[Variable::DischargeStorage]);
        assert!(!decisions[Variable::ChargeStorage]);
        Ok(())
    }

    #[test]
    fn test_infeasible() {
        let mut problem = problem(10.0, 10.0, 50.0);
        problem.constraints.push(Constraint {
            name: "impossible",
            terms: vec![(Variable::Curtail, 1.0)],
            sense: Sense::GreaterOrEqual,
            rhs: 2.0,
        });
        assert!(Exhaustive.solve(&problem).is_err());
    }

    #[test]
    fn test_non_finite() {
        let mut problem = problem(10.0, 10.0, 50.0);
        problem.linear[Variable::UseWind] = f64::NAN;
        assert!(Exhaustive.solve(&problem).is_err());
    }
}
