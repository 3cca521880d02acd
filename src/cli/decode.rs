use clap::Parser;

use crate::{
    cli::request::RequestArgs,
    core::{decoder, solution::Solution},
    prelude::*,
    tables::build_dispatch_table,
};

#[derive(Parser)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub request: RequestArgs,

    /// Comma-separated binary vector: `use_solar,use_wind,charge_storage,discharge_storage,curtail`.
    /// Missing trailing entries take their defaults.
    #[clap(
        long,
        value_delimiter = ',',
        num_args = 0..,
        value_parser = clap::value_parser!(u8).range(0..=1),
    )]
    pub solution: Vec<u8>,

    /// Also render a summary table to the standard error.
    #[clap(long)]
    pub table: bool,
}

#[instrument(skip_all)]
pub fn decode(args: &DecodeArgs) -> Result {
    let request = args.request.read()?;
    request.validate()?;
    let solution = Solution::from_bits(&args.solution);
    let decisions = solution.decisions();
    info!(%solution, ?decisions, "decoding…");
    let dispatch = decoder::decode(&decisions, &request, request.surplus());
    if args.table {
        eprintln!("{}", build_dispatch_table(&request, &[("Decoded", &dispatch)]));
    }
    println!("{}", serde_json::to_string(&dispatch)?);
    Ok(())
}
