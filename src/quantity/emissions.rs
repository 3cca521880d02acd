use crate::quantity::energy::KilowattHours;

quantity!(
    /// Mass of emitted CO₂.
    Kilograms, via: f64, suffix: "kg", precision: 2
);

quantity!(
    /// Emitted CO₂ per kilowatt-hour of generated energy.
    EmissionFactor, via: f64, suffix: "kg/kWh", precision: 2
);

implement_mul!(EmissionFactor, KilowattHours, Kilograms);
