//! Daily microgrid simulation that threads the storage state from one hour into the next.

use std::f64::consts::PI;

use bon::Builder;

use crate::{
    baseline,
    core::{
        dispatch::Dispatch,
        pipeline::{Outcome, dispatch},
        request::DispatchRequest,
    },
    prelude::*,
    quantity::{
        Zero,
        cost::Cost,
        emissions::Kilograms,
        energy::KilowattHours,
        ratios::Percentage,
    },
    solver::Solver,
};

/// Mean of the uniform `0.8..1.0` cloud cover factor.
const SOLAR_VARIABILITY: f64 = 0.9;

/// Installed capacities and the demand level.
#[derive(Copy, Clone, Debug, Builder)]
pub struct Microgrid {
    pub solar_capacity: KilowattHours,
    pub wind_capacity: KilowattHours,
    pub storage_capacity: KilowattHours,
    pub base_demand: KilowattHours,
}

impl Microgrid {
    /// Solar generation follows a half-sine between the sunrise at 06:00 and the sunset at 18:00.
    ///
    /// The variability is taken at its mean, same as for the wind.
    pub fn solar_generation(&self, hour: f64) -> KilowattHours {
        if !(6.0..=18.0).contains(&hour) {
            return KilowattHours::ZERO;
        }
        self.solar_capacity * (((hour - 6.0) / 12.0 * PI).sin() * SOLAR_VARIABILITY)
    }

    /// Wind peaks at night, the variability is taken at its mean.
    pub fn wind_generation(&self, hour: f64) -> KilowattHours {
        let base = 0.4f64.mul_add((hour / 24.0).mul_add(2.0 * PI, PI).sin(), 0.3);
        self.wind_capacity * (base + 0.15)
    }

    /// Base load with morning and evening peaks.
    pub fn demand(&self, hour: f64) -> KilowattHours {
        let morning_peak = (-(hour - 8.0).powi(2) / 8.0).exp() * 0.3;
        let evening_peak = (-(hour - 19.0).powi(2) / 8.0).exp() * 0.4;
        self.base_demand * (0.6 + morning_peak + evening_peak)
    }

    pub fn request(&self, hour: f64, storage_charge: KilowattHours) -> DispatchRequest {
        DispatchRequest::builder()
            .solar_gen(self.solar_generation(hour))
            .wind_gen(self.wind_generation(hour))
            .demand(self.demand(hour))
            .storage_charge(storage_charge)
            .storage_capacity(self.storage_capacity)
            .build()
    }
}

/// Single simulated hour.
pub struct Step {
    pub hour: u32,
    pub request: DispatchRequest,
    pub outcome: Outcome,

    /// Rule-based dispatch of the same hour, starting from its own storage state.
    pub baseline: Dispatch,
}

#[derive(Copy, Clone, Default)]
pub struct Totals {
    pub total_cost: Cost,
    pub curtailment: KilowattHours,
    pub emissions: Kilograms,
    pub mean_efficiency: Percentage,
}

impl Totals {
    #[expect(clippy::cast_precision_loss)]
    pub fn of<'a>(dispatches: impl IntoIterator<Item = &'a Dispatch>) -> Self {
        let mut totals = Self::default();
        let mut efficiency_sum = 0.0;
        let mut n_dispatches = 0_usize;
        for dispatch in dispatches {
            totals.total_cost += dispatch.metrics.total_cost;
            totals.curtailment += dispatch.metrics.curtailment;
            totals.emissions += dispatch.metrics.emissions;
            efficiency_sum += dispatch.metrics.efficiency.0;
            n_dispatches += 1;
        }
        if n_dispatches != 0 {
            totals.mean_efficiency = Percentage(efficiency_sum / n_dispatches as f64);
        }
        totals
    }
}

#[must_use]
pub struct Simulation {
    pub steps: Vec<Step>,
}

impl Simulation {
    /// Run the hourly dispatch, feeding each new storage charge into the next request.
    #[instrument(skip_all, fields(start_hour = start_hour, n_hours = n_hours))]
    pub fn run(
        microgrid: &Microgrid,
        solver: &dyn Solver,
        initial_charge: KilowattHours,
        start_hour: u32,
        n_hours: u32,
    ) -> Result<Self> {
        let mut storage_charge = initial_charge;
        let mut baseline_charge = initial_charge;
        let mut steps = Vec::with_capacity(n_hours as usize);

        for offset in 0..n_hours {
            let hour = (start_hour + offset) % 24;
            let request = microgrid.request(f64::from(hour), storage_charge);
            let outcome = dispatch(&request, solver)
                .with_context(|| format!("failed to dispatch hour {hour}"))?;
            if outcome.is_fallback() {
                warn!(hour, "fallback, storage is left unchanged");
            }
            storage_charge = outcome.dispatch().new_storage_charge;

            let baseline = baseline::dispatch(&microgrid.request(f64::from(hour), baseline_charge));
            baseline_charge = baseline.new_storage_charge;

            steps.push(Step { hour, request, outcome, baseline });
        }

        info!(final_storage_charge = ?storage_charge, "simulated");
        Ok(Self { steps })
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.steps.iter().map(|step| step.outcome.dispatch()))
    }

    pub fn baseline_totals(&self) -> Totals {
        Totals::of(self.steps.iter().map(|step| &step.baseline))
    }
}
