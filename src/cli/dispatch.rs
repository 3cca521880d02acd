use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

use crate::{
    cli::{request::RequestArgs, solver::SolverArgs},
    core::pipeline::{self, Outcome},
    prelude::*,
    tables::build_dispatch_table,
};

#[derive(Parser)]
pub struct DispatchArgs {
    #[clap(flatten)]
    pub request: RequestArgs,

    #[clap(flatten)]
    pub solver: SolverArgs,

    /// Also render a summary table to the standard error.
    #[clap(long)]
    pub table: bool,
}

#[instrument(skip_all)]
pub fn dispatch(args: &DispatchArgs) -> Result<ExitCode> {
    let request = args.request.read()?;
    let solver = args.solver.build();
    let outcome = pipeline::dispatch(&request, &*solver)?;
    if args.table {
        eprintln!(
            "{}",
            build_dispatch_table(&request, &[(outcome.label(solver.name()), outcome.dispatch())])
        );
    }
    report(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Write the dispatch to `stdout`, or the failure report to `stderr`.
fn report(
    outcome: &Outcome,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<ExitCode> {
    match outcome {
        Outcome::Solved(dispatch) => {
            writeln!(stdout, "{}", serde_json::to_string(dispatch)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Fallback(failure) => {
            writeln!(stderr, "{}", serde_json::to_string(failure)?)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
