use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{Zero, energy::KilowattHours},
};

/// Physical state of the microgrid for a single dispatch interval.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DispatchRequest {
    pub solar_gen: KilowattHours,
    pub wind_gen: KilowattHours,
    pub demand: KilowattHours,
    pub storage_charge: KilowattHours,
    pub storage_capacity: KilowattHours,
}

impl DispatchRequest {
    /// Generation in excess of demand, negative in deficit.
    pub fn surplus(&self) -> KilowattHours {
        self.solar_gen + self.wind_gen - self.demand
    }

    /// Storage charge limited to what the storage can physically hold.
    ///
    /// Flows are always settled against this value, so an out-of-range charge is corrected
    /// instead of propagating into the new charge.
    pub fn stored_energy(&self) -> KilowattHours {
        self.storage_charge.min(self.storage_capacity).max(KilowattHours::ZERO)
    }

    /// Reject requests that cannot be dispatched at all.
    ///
    /// Finite out-of-range values (negative generation, over-full storage) pass through,
    /// the storage charge is then taken as [`Self::stored_energy`].
    pub fn validate(&self) -> Result {
        for (name, value) in [
            ("solarGen", self.solar_gen),
            ("windGen", self.wind_gen),
            ("demand", self.demand),
            ("storageCharge", self.storage_charge),
            ("storageCapacity", self.storage_capacity),
        ] {
            ensure!(value.is_finite(), "`{name}` must be finite, got {value:?}");
        }
        ensure!(
            self.storage_capacity > KilowattHours::ZERO,
            "`storageCapacity` must be positive, got {:?}",
            self.storage_capacity,
        );
        Ok(())
    }
}
