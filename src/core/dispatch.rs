use std::{
    fmt::{Display, Formatter},
    time::Duration,
};

use bon::bon;
use comfy_table::Color;
use serde::Serialize;
use serde_with::{DurationMilliSecondsWithFrac, serde_as};

use crate::{
    core::request::DispatchRequest,
    quantity::{
        Zero,
        cost::{Cost, KilowattHourPrice},
        emissions::{EmissionFactor, Kilograms},
        energy::KilowattHours,
        ratios::Percentage,
    },
};

/// Guards the efficiency against division by zero when no generation is used.
const EPSILON: KilowattHours = KilowattHours(0.001);

/// Unmet demand is served by fossil backup at this price.
pub const FOSSIL_PRICE: KilowattHourPrice = KilowattHourPrice(80.0);

pub const CURTAILMENT_PRICE: KilowattHourPrice = KilowattHourPrice(5.0);

pub const FOSSIL_EMISSION_FACTOR: EmissionFactor = EmissionFactor(0.5);

/// Energy flows decided for one interval, along with their metrics.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Dispatch {
    pub curtailment: KilowattHours,

    /// Positive is charging, negative is discharging.
    pub storage_flow: KilowattHours,

    pub new_storage_charge: KilowattHours,
    pub metrics: Metrics,
}

#[serde_as]
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_cost: Cost,
    pub curtailment: KilowattHours,

    /// Share of the used generation that reached the demand, at most 100%.
    pub efficiency: Percentage,

    pub emissions: Kilograms,

    #[serde_as(as = "DurationMilliSecondsWithFrac<f64>")]
    pub compute_time: Duration,
}

#[bon]
impl Dispatch {
    /// Settle the metrics for the decided flows.
    ///
    /// The storage throughput price is the only parameter that differs between the strategies.
    #[builder]
    pub fn settle(
        request: &DispatchRequest,
        total_generation: KilowattHours,
        storage_flow: KilowattHours,
        curtailment: KilowattHours,
        storage_price: KilowattHourPrice,
    ) -> Self {
        let delivered_energy = (total_generation + storage_flow.abs()).min(request.demand);
        let efficiency =
            Percentage::of(delivered_energy, total_generation + EPSILON).min(Percentage::HUNDRED);
        let fossil_backup = (request.demand - delivered_energy).max(KilowattHours::ZERO);
        let total_cost = fossil_backup * FOSSIL_PRICE
            + curtailment * CURTAILMENT_PRICE
            + storage_flow.abs() * storage_price;
        Self {
            curtailment,
            storage_flow,
            new_storage_charge: request.stored_energy() + storage_flow,
            metrics: Metrics {
                total_cost,
                curtailment,
                efficiency,
                emissions: fossil_backup * FOSSIL_EMISSION_FACTOR,
                compute_time: Duration::ZERO,
            },
        }
    }
}

impl Dispatch {
    pub fn storage_mode(&self) -> StorageMode {
        if self.storage_flow.0 > 0.0 {
            StorageMode::Charge
        } else if self.storage_flow.0 < 0.0 {
            StorageMode::Discharge
        } else {
            StorageMode::Idle
        }
    }
}

/// Physically active storage operation, at most one per interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StorageMode {
    Idle,
    Charge,
    Discharge,
}

impl Display for StorageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Charge => write!(f, "Charge"),
            Self::Discharge => write!(f, "Discharge"),
        }
    }
}

impl StorageMode {
    pub const fn color(self) -> Color {
        match self {
            Self::Charge => Color::Green,
            Self::Discharge => Color::Blue,
            Self::Idle => Color::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use super::*;

    fn request() -> DispatchRequest {
        DispatchRequest::builder()
            .solar_gen(KilowattHours(50.0))
            .wind_gen(KilowattHours(30.0))
            .demand(KilowattHours(60.0))
            .storage_charge(KilowattHours(20.0))
            .storage_capacity(KilowattHours(100.0))
            .build()
    }

    #[test]
    fn test_settle_without_generation() {
        let dispatch = Dispatch::settle()
            .request(&request())
            .total_generation(KilowattHours::ZERO)
            .storage_flow(KilowattHours::ZERO)
            .curtailment(KilowattHours::ZERO)
            .storage_price(KilowattHourPrice(1.5))
            .call();
        assert_abs_diff_eq!(dispatch.metrics.efficiency.0, 0.0);
        assert_abs_diff_eq!(dispatch.metrics.total_cost.0, 60.0 * 80.0);
        assert_abs_diff_eq!(dispatch.metrics.emissions.0, 30.0);
        assert_eq!(dispatch.storage_mode(), StorageMode::Idle);
    }

    #[test]
    fn test_serialize() -> anyhow::Result<()> {
        let mut dispatch = Dispatch::settle()
            .request(&request())
            .total_generation(KilowattHours(80.0))
            .storage_flow(KilowattHours(20.0))
            .curtailment(KilowattHours::ZERO)
            .storage_price(KilowattHourPrice(1.5))
            .call();
        dispatch.metrics.efficiency = Percentage(75.0);
        dispatch.metrics.compute_time = Duration::from_micros(1500);
        assert_eq!(
            serde_json::to_value(dispatch)?,
            json!({
                "curtailment": 0.0,
                "storage_flow": 20.0,
                "new_storage_charge": 40.0,
                "metrics": {
                    "totalCost": 30.0,
                    "curtailment": 0.0,
                    "efficiency": 75.0,
                    "emissions": 0.0,
                    "computeTime": 1.5,
                },
            }),
        );
        Ok(())
    }
}
