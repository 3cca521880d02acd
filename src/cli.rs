mod compare;
mod decode;
mod dispatch;
mod request;
mod simulate;
mod solver;

use clap::{Parser, Subcommand};

pub use self::{compare::compare, decode::decode, dispatch::dispatch, simulate::simulate};
use crate::cli::{
    compare::CompareArgs,
    decode::DecodeArgs,
    dispatch::DispatchArgs,
    simulate::SimulateArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: read the request, solve, and print the dispatch.
    #[clap(name = "dispatch")]
    Dispatch(Box<DispatchArgs>),

    /// Decode an explicit solution vector, bypassing the solver.
    #[clap(name = "decode")]
    Decode(Box<DecodeArgs>),

    /// Compare the solver dispatch against the rule-based baseline.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Simulate a day of hourly dispatches.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),
}
