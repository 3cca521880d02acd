//! Dispatch decision as a pseudo-Boolean minimization problem.

use crate::{
    core::{
        request::DispatchRequest,
        solution::Decisions,
        variable::{Variable, VariableMap},
    },
    prelude::*,
    quantity::{Zero, energy::KilowattHours},
};

/// Incentive for using a renewable source.
const RENEWABLE_REWARD: f64 = -10.0;

/// Cost of a single charge or discharge cycle decision.
const STORAGE_CYCLING_COST: f64 = 2.0;

/// Curtailment cost per unit of generation imbalance.
const CURTAILMENT_PENALTY: f64 = 5.0;

/// Penalty for charging and discharging at the same time.
const SIMULTANEOUS_STORAGE_PENALTY: f64 = 100.0;

/// Bonus for using both renewable sources.
const COMBINED_RENEWABLES_REWARD: f64 = -5.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sense {
    GreaterOrEqual,

    #[cfg(test)]
    LessOrEqual,

    #[cfg(test)]
    Equal,
}

/// Named linear constraint over the binary variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub name: &'static str,
    pub terms: Vec<(Variable, f64)>,
    pub sense: Sense,
    pub rhs: f64,
}

impl Constraint {
    pub fn is_satisfied_by(&self, decisions: &Decisions) -> bool {
        let lhs: f64 = self
            .terms
            .iter()
            .filter(|(variable, _)| decisions[*variable])
            .map(|(_, coefficient)| coefficient)
            .sum();
        match self.sense {
            Sense::GreaterOrEqual => lhs >= self.rhs,
            #[cfg(test)]
            Sense::LessOrEqual => lhs <= self.rhs,
            #[cfg(test)]
            #[allow(clippy::float_cmp)]
            Sense::Equal => lhs == self.rhs,
        }
    }
}

/// Pairwise interaction term `coefficient × lhs × rhs`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction {
    pub lhs: Variable,
    pub rhs: Variable,
    pub coefficient: f64,
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub linear: VariableMap<f64>,
    pub quadratic: Vec<Interaction>,
    pub constraints: Vec<Constraint>,

    /// Generation minus demand, carried along for decoding.
    pub surplus: KilowattHours,
}

impl Problem {
    #[instrument(skip_all, fields(surplus = ?request.surplus()))]
    pub fn build(request: &DispatchRequest) -> Self {
        let surplus = request.surplus();

        let mut linear = VariableMap::default();
        linear[Variable::UseSolar] = RENEWABLE_REWARD;
        linear[Variable::UseWind] = RENEWABLE_REWARD;
        linear[Variable::ChargeStorage] = STORAGE_CYCLING_COST;
        linear[Variable::DischargeStorage] = STORAGE_CYCLING_COST;
        linear[Variable::Curtail] = CURTAILMENT_PENALTY * surplus.abs().0;

        let quadratic = vec![
            Interaction {
                lhs: Variable::ChargeStorage,
                rhs: Variable::DischargeStorage,
                coefficient: SIMULTANEOUS_STORAGE_PENALTY,
            },
            Interaction {
                lhs: Variable::UseSolar,
                rhs: Variable::UseWind,
                coefficient: COMBINED_RENEWABLES_REWARD,
            },
        ];

        // Always satisfiable, the slot is only reserved for the deficit regime:
        let constraints = if surplus < KilowattHours::ZERO {
            vec![Constraint {
                name: "meet_demand",
                terms: vec![(Variable::DischargeStorage, 1.0)],
                sense: Sense::GreaterOrEqual,
                rhs: 0.0,
            }]
        } else {
            Vec::new()
        };

        debug!(n_constraints = constraints.len(), "built the problem");
        Self { linear, quadratic, constraints, surplus }
    }

    /// Evaluate `Σ cᵢxᵢ + Σ cᵢⱼxᵢxⱼ`.
    pub fn objective(&self, decisions: &Decisions) -> f64 {
        let linear: f64 = self
            .linear
            .iter()
            .filter(|(variable, _)| decisions[*variable])
            .map(|(_, coefficient)| coefficient)
            .sum();
        let quadratic: f64 = self
            .quadratic
            .iter()
            .filter(|interaction| decisions[interaction.lhs] && decisions[interaction.rhs])
            .map(|interaction| interaction.coefficient)
            .sum();
        linear + quadratic
    }

    pub fn is_feasible(&self, decisions: &Decisions) -> bool {
        self.constraints.iter().all(|constraint| constraint.is_satisfied_by(decisions))
    }

    /// Solvers cannot rank assignments when any coefficient is `NaN` or infinite.
    pub fn ensure_finite(&self) -> Result {
        for (variable, coefficient) in self.linear.iter() {
            ensure!(coefficient.is_finite(), "non-finite coefficient for `{variable}`");
        }
        for interaction in &self.quadratic {
            ensure!(
                interaction.coefficient.is_finite(),
                "non-finite coefficient for `({}, {})`",
                interaction.lhs,
                interaction.rhs,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::solution::Solution;

    fn request(solar_gen: f64, wind_gen: f64, demand: f64) -> DispatchRequest {
        DispatchRequest::builder()
            .solar_gen(KilowattHours(solar_gen))
            .wind_gen(KilowattHours(wind_gen))
            .demand(KilowattHours(demand))
            .storage_charge(KilowattHours(20.0))
            .storage_capacity(KilowattHours(100.0))
            .build()
    }

    #[test]
    fn test_linear_coefficients() {
        let problem = Problem::build(&request(50.0, 30.0, 60.0));
        assert_eq!(problem.linear.0, [-10.0, -10.0, 2.0, 2.0, 100.0]);
        assert_eq!(problem.surplus, KilowattHours(20.0));
    }

    #[test]
    fn test_curtailment_scales_with_deficit() {
        let problem = Problem::build(&request(10.0, 10.0, 50.0));
        assert_abs_diff_eq!(problem.linear[Variable::Curtail], 150.0);
    }

    #[test]
    fn test_interactions() {
        let problem = Problem::build(&request(50.0, 30.0, 60.0));
        assert_eq!(problem.quadratic.len(), 2);
        assert!(problem.quadratic.contains(&Interaction {
            lhs: Variable::ChargeStorage,
            rhs: Variable::DischargeStorage,
            coefficient: 100.0,
        }));
        assert!(problem.quadratic.contains(&Interaction {
            lhs: Variable::UseSolar,
            rhs: Variable::UseWind,
            coefficient: -5.0,
        }));
    }

    #[test]
    fn test_constraint_only_in_deficit() {
        assert!(Problem::build(&request(50.0, 30.0, 60.0)).constraints.is_empty());
        assert!(Problem::build(&request(30.0, 30.0, 60.0)).constraints.is_empty());

        let problem = Problem::build(&request(10.0, 10.0, 50.0));
        assert_eq!(problem.constraints.len(), 1);
        assert_eq!(problem.constraints[0].name, "meet_demand");
    }

    #[test]
    fn test_deficit_constraint_never_binds() {
        let problem = Problem::build(&request(10.0, 10.0, 50.0));
        for bits in [[0, 0, 0, 0, 0], [1, 1, 1, 1, 1], [0, 0, 0, 1, 0]] {
            let decisions = Solution::from_bits(&bits).decisions();
            assert!(problem.is_feasible(&decisions));
        }
    }

    #[test]
    fn test_constraint_senses() {
        let decisions = Solution::from_bits(&[1, 1, 1, 0, 0]).decisions();
        let constraint = |sense, rhs| Constraint {
            name: "storage",
            terms: vec![(Variable::ChargeStorage, 2.0), (Variable::DischargeStorage, 3.0)],
            sense,
            rhs,
        };
        assert!(constraint(Sense::LessOrEqual, 2.0).is_satisfied_by(&decisions));
        assert!(!constraint(Sense::LessOrEqual, 1.0).is_satisfied_by(&decisions));
        assert!(constraint(Sense::GreaterOrEqual, 2.0).is_satisfied_by(&decisions));
        assert!(!constraint(Sense::GreaterOrEqual, 3.0).is_satisfied_by(&decisions));
        assert!(constraint(Sense::Equal, 2.0).is_satisfied_by(&decisions));
    }

    #[test]
    fn test_objective() {
        let problem = Problem::build(&request(50.0, 30.0, 60.0));
        let objective = |bits: &[u8]| problem.objective(&Solution::from_bits(bits).decisions());
        assert_abs_diff_eq!(objective(&[0, 0, 0, 0, 0]), 0.0);
        assert_abs_diff_eq!(objective(&[1, 1, 0, 0, 0]), -25.0);
        assert_abs_diff_eq!(objective(&[1, 1, 1, 0, 0]), -23.0);
        assert_abs_diff_eq!(objective(&[0, 0, 1, 1, 0]), 104.0);
        assert_abs_diff_eq!(objective(&[1, 1, 1, 1, 1]), 179.0);
    }

    #[test]
    fn test_ensure_finite() {
        let mut problem = Problem::build(&request(50.0, 30.0, 60.0));
        assert!(problem.ensure_finite().is_ok());
        problem.linear[Variable::Curtail] = f64::INFINITY;
        assert!(problem.ensure_finite().is_err());
    }
}
