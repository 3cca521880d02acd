quantity!(
    /// Energy over one dispatch interval.
    ///
    /// Generation and demand are power quantities, but since every request covers a single
    /// interval, they are tracked as the energy delivered within it.
    KilowattHours, via: f64, suffix: "kWh", precision: 2
);

impl KilowattHours {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}
