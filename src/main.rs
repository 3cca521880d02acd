#![allow(clippy::doc_markdown)]

mod baseline;
mod cli;
mod core;
mod prelude;
mod quantity;
mod simulation;
mod solver;
mod tables;

use std::{io::stderr, process::ExitCode};

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, compare, decode, dispatch, simulate},
    prelude::*,
};

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    // The standard output is reserved for the response:
    tracing_subscriber::fmt().without_time().compact().with_writer(stderr).init();
    info!(version = crate_version!(), "starting…");

    let exit_code = match Args::parse().command {
        Command::Dispatch(args) => dispatch(&args)?,
        Command::Decode(args) => {
            decode(&args)?;
            ExitCode::SUCCESS
        }
        Command::Compare(args) => {
            compare(&args)?;
            ExitCode::SUCCESS
        }
        Command::Simulate(args) => {
            simulate(&args)?;
            ExitCode::SUCCESS
        }
    };

    info!("done!");
    Ok(exit_code)
}
