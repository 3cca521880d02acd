#[macro_use]
pub mod macros;

pub mod cost;
pub mod emissions;
pub mod energy;
pub mod ratios;
mod zero;

pub use self::zero::Zero;
