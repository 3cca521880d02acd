use std::time::{Duration, Instant};

use crate::{
    core::{problem::Problem, solution::Solution},
    prelude::*,
    solver::Solver,
};

/// Wall-clock budget for the wrapped solver.
///
/// The solver call itself is not interrupted, but an overrun solution is discarded as a failure.
pub struct TimeLimited<S> {
    pub inner: S,
    pub limit: Duration,
}

impl<S: Solver> Solver for TimeLimited<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn solve(&self, problem: &Problem) -> Result<Solution> {
        let start_instant = Instant::now();
        let solution = self.inner.solve(problem)?;
        let elapsed = start_instant.elapsed();
        ensure!(
            elapsed <= self.limit,
            "`{}` exceeded the time limit: {elapsed:?} > {:?}",
            self.inner.name(),
            self.limit,
        );
        Ok(solution)
    }
}
