use clap::Parser;

use crate::{
    cli::solver::SolverArgs,
    prelude::*,
    quantity::energy::KilowattHours,
    simulation::{Microgrid, Simulation},
    tables::{build_simulation_table, build_totals_table},
};

#[derive(Parser)]
pub struct SimulateArgs {
    #[clap(flatten)]
    pub solver: SolverArgs,

    /// Peak solar generation per hour.
    #[clap(long, default_value = "300", env = "SOLAR_CAPACITY")]
    pub solar_capacity: KilowattHours,

    /// Peak wind generation per hour.
    #[clap(long, default_value = "250", env = "WIND_CAPACITY")]
    pub wind_capacity: KilowattHours,

    #[clap(long, default_value = "200", env = "STORAGE_CAPACITY")]
    pub storage_capacity: KilowattHours,

    /// Hourly demand before the morning and evening peaks are applied.
    #[clap(long, default_value = "400", env = "BASE_DEMAND")]
    pub base_demand: KilowattHours,

    /// Initial stored energy, half of the capacity by default.
    #[clap(long, env = "INITIAL_STORAGE_CHARGE")]
    pub initial_charge: Option<KilowattHours>,

    #[clap(long, default_value = "6", value_parser = clap::value_parser!(u32).range(0..24))]
    pub start_hour: u32,

    #[clap(long = "hours", default_value = "24")]
    pub n_hours: u32,
}

#[instrument(skip_all)]
pub fn simulate(args: &SimulateArgs) -> Result {
    ensure!(args.storage_capacity.0 > 0.0, "storage capacity must be positive");
    let microgrid = Microgrid::builder()
        .solar_capacity(args.solar_capacity)
        .wind_capacity(args.wind_capacity)
        .storage_capacity(args.storage_capacity)
        .base_demand(args.base_demand)
        .build();
    let initial_charge = args.initial_charge.unwrap_or(args.storage_capacity * 0.5);
    let solver = args.solver.build();

    let simulation =
        Simulation::run(&microgrid, &*solver, initial_charge, args.start_hour, args.n_hours)?;
    println!("{}", build_simulation_table(&simulation));
    println!("{}", build_totals_table(&simulation.totals(), &simulation.baseline_totals()));
    Ok(())
}
