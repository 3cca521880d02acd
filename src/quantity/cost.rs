use crate::quantity::energy::KilowattHours;

quantity!(Cost, via: f64, suffix: "¤", precision: 2);

quantity!(
    /// Cost of one kilowatt-hour.
    KilowattHourPrice, via: f64, suffix: "¤/kWh", precision: 2
);

implement_mul!(KilowattHourPrice, KilowattHours, Cost);
