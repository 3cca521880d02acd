//! Rule-based dispatch without any solver, used as the comparison reference.

use crate::{
    core::{dispatch::Dispatch, request::DispatchRequest},
    quantity::{Zero, cost::KilowattHourPrice, energy::KilowattHours},
};

/// Maximum share of the capacity the greedy strategy moves per interval.
const MAX_RATE: f64 = 0.2;

/// The greedy strategy pays more for the storage throughput.
const STORAGE_PRICE: KilowattHourPrice = KilowattHourPrice(2.0);

/// Store as much surplus as possible and curtail the rest, or cover the deficit from storage.
///
/// All generation is always used.
pub fn dispatch(request: &DispatchRequest) -> Dispatch {
    let total_generation = request.solar_gen + request.wind_gen;
    let surplus = total_generation - request.demand;
    let rate_limit = request.storage_capacity * MAX_RATE;
    let stored_energy = request.stored_energy();

    let (storage_flow, curtailment) = if surplus > KilowattHours::ZERO {
        let charged =
            surplus.min(request.storage_capacity - stored_energy).min(rate_limit);
        (charged, surplus - charged)
    } else {
        let discharged = (-surplus).min(stored_energy).min(rate_limit);
        (-discharged, KilowattHours::ZERO)
    };

    Dispatch::settle()
        .request(request)
        .total_generation(total_generation)
        .storage_flow(storage_flow)
        .curtailment(curtailment)
        .storage_price(STORAGE_PRICE)
        .call()
}
