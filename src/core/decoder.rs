use crate::{
    core::{dispatch::Dispatch, request::DispatchRequest, solution::Decisions, variable::Variable},
    prelude::*,
    quantity::{Zero, cost::KilowattHourPrice, energy::KilowattHours},
};

/// Maximum share of the capacity that may be charged or discharged within one interval.
pub const MAX_RATE: f64 = 0.25;

/// Price of the energy passing through the storage.
pub const STORAGE_PRICE: KilowattHourPrice = KilowattHourPrice(1.5);

/// Turn the solver decisions into physically valid energy flows.
///
/// The storage branch is chosen by the sign of the surplus first, and only then by the
/// corresponding flag, so charging and discharging never apply together.
/// Curtailment is only reachable through the charging branch.
#[instrument(skip_all, fields(surplus = ?surplus))]
pub fn decode(decisions: &Decisions, request: &DispatchRequest, surplus: KilowattHours) -> Dispatch {
    let total_generation = used(request.solar_gen, decisions[Variable::UseSolar])
        + used(request.wind_gen, decisions[Variable::UseWind]);
    let rate_limit = request.storage_capacity * MAX_RATE;
    let stored_energy = request.stored_energy();

    let (storage_flow, curtailment) = if surplus > KilowattHours::ZERO
        && decisions[Variable::ChargeStorage]
    {
        let charged =
            surplus.min(request.storage_capacity - stored_energy).min(rate_limit);
        let curtailment = if decisions[Variable::Curtail] {
            (surplus - charged).max(KilowattHours::ZERO)
        } else {
            KilowattHours::ZERO
        };
        (charged, curtailment)
    } else if surplus < KilowattHours::ZERO && decisions[Variable::DischargeStorage] {
        let discharged = (-surplus).min(stored_energy).min(rate_limit);
        (-discharged, KilowattHours::ZERO)
    } else {
        (KilowattHours::ZERO, KilowattHours::ZERO)
    };
    debug!(?total_generation, ?storage_flow, ?curtailment, "decoded");

    Dispatch::settle()
        .request(request)
        .total_generation(total_generation)
        .storage_flow(storage_flow)
        .curtailment(curtailment)
        .storage_price(STORAGE_PRICE)
        .call()
}

const fn used(generation: KilowattHours, is_used: bool) -> KilowattHours {
    if is_used { generation } else { KilowattHours::ZERO }
}
