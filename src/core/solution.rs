use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::core::variable::{Variable, VariableMap};

/// Fixed-length decisions the decoder works with.
pub type Decisions = VariableMap<bool>;

/// Decisions assumed for entries the solver did not return:
/// use all renewables, no storage action, no curtailment.
pub const DEFAULT_DECISIONS: Decisions = VariableMap([true, true, false, false, false]);

/// Binary vector as returned by a solver, in the [`Variable`] order.
///
/// It may be shorter than the number of variables.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution(pub Vec<bool>);

impl Solution {
    /// Build from `0`/`1` entries, anything non-zero is treated as set.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self(bits.iter().map(|bit| *bit != 0).collect())
    }

    /// Overlay the returned entries onto the defaults, ignoring any excess ones.
    pub fn decisions(&self) -> Decisions {
        let mut decisions = DEFAULT_DECISIONS;
        for (decision, value) in decisions.0.iter_mut().zip(&self.0) {
            *decision = *value;
        }
        decisions
    }
}

impl From<Decisions> for Solution {
    fn from(decisions: Decisions) -> Self {
        Self(decisions.0.to_vec())
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().map(|value| u8::from(*value)).join(","))
    }
}

impl Decisions {
    /// Decisions encoded by the lowest [`Variable::N`] bits of `mask`.
    pub fn from_mask(mask: u8) -> Self {
        Self(Variable::ALL.map(|variable| mask & (1 << variable.index()) != 0))
    }

    #[must_use]
    pub fn flipped(mut self, variable: Variable) -> Self {
        self[variable] = !self[variable];
        self
    }
}
