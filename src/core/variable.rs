use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

/// Binary dispatch decision.
///
/// The declaration order is the positional order of the solution vector.
#[derive(Debug, Hash, Ord, PartialOrd, enumset::EnumSetType)]
pub enum Variable {
    UseSolar,
    UseWind,
    ChargeStorage,
    DischargeStorage,
    Curtail,
}

impl Variable {
    pub const N: usize = 5;

    pub const ALL: [Self; Self::N] =
        [Self::UseSolar, Self::UseWind, Self::ChargeStorage, Self::DischargeStorage, Self::Curtail];

    /// Stable variable name as exposed to solvers.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UseSolar => "use_solar",
            Self::UseWind => "use_wind",
            Self::ChargeStorage => "charge_storage",
            Self::DischargeStorage => "discharge_storage",
            Self::Curtail => "curtail",
        }
    }

    /// Position in the solution vector.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Dense per-variable map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct VariableMap<T>(pub [T; Variable::N]);

impl<T> VariableMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &T)> {
        Variable::ALL.into_iter().zip(&self.0)
    }
}

impl<T> Index<Variable> for VariableMap<T> {
    type Output = T;

    fn index(&self, variable: Variable) -> &Self::Output {
        &self.0[variable.index()]
    }
}

impl<T> IndexMut<Variable> for VariableMap<T> {
    fn index_mut(&mut self, variable: Variable) -> &mut Self::Output {
        &mut self.0[variable.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_order() {
        let names = Variable::ALL.map(Variable::name);
        assert_eq!(
            names,
            ["use_solar", "use_wind", "charge_storage", "discharge_storage", "curtail"]
        );
        for (index, variable) in Variable::ALL.into_iter().enumerate() {
            assert_eq!(variable.index(), index);
        }
    }

    #[test]
    fn test_index_mut() {
        let mut map = VariableMap([0; Variable::N]);
        map[Variable::Curtail] = 42;
        assert_eq!(map.0, [0, 0, 0, 0, 42]);
        assert_eq!(map.iter().last(), Some((Variable::Curtail, &42)));
    }
}
