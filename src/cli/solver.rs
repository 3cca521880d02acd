use std::time::Duration;

use clap::Parser;

use crate::solver::{Descent, Exhaustive, Solver, SolverKind, TimeLimited};

#[derive(Parser)]
pub struct SolverArgs {
    /// Minimization backend.
    #[clap(long = "solver", default_value = "exhaustive", env = "DISPATCH_SOLVER")]
    pub kind: SolverKind,

    /// Maximum number of moves for the descent solver.
    #[clap(long, default_value = "100", env = "DESCENT_ITERATIONS")]
    pub descent_iterations: usize,

    /// Wall-clock budget for the solver, for example: `50ms`. An overrun is a solver failure.
    #[clap(long, value_parser = humantime::parse_duration, env = "SOLVER_TIME_LIMIT")]
    pub solver_time_limit: Option<Duration>,
}

impl SolverArgs {
    pub fn build(&self) -> Box<dyn Solver> {
        let solver: Box<dyn Solver> = match self.kind {
            SolverKind::Exhaustive => Box::new(Exhaustive),
            SolverKind::Descent => {
                Box::new(Descent::builder().max_iterations(self.descent_iterations).build())
            }
        };
        match self.solver_time_limit {
            Some(limit) => Box::new(TimeLimited { inner: solver, limit }),
            None => solver,
        }
    }
}
