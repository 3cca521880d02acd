use crate::quantity::energy::KilowattHours;

quantity!(Percentage, via: f64, suffix: "%", precision: 1);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    /// Share of `part` in `whole`.
    ///
    /// The caller is responsible for keeping `whole` away from zero.
    pub fn of(part: KilowattHours, whole: KilowattHours) -> Self {
        Self(part / whole * 100.0)
    }
}
