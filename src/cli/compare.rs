use clap::Parser;

use crate::{
    baseline,
    cli::{request::RequestArgs, solver::SolverArgs},
    core::pipeline,
    prelude::*,
    tables::build_dispatch_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub request: RequestArgs,

    #[clap(flatten)]
    pub solver: SolverArgs,
}

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result {
    let request = args.request.read()?;
    let solver = args.solver.build();
    let outcome = pipeline::dispatch(&request, &*solver)?;
    let baseline = baseline::dispatch(&request);
    let label = outcome.label(solver.name());
    println!(
        "{}",
        build_dispatch_table(&request, &[(label, outcome.dispatch()), ("Baseline", &baseline)])
    );
    Ok(())
}
