pub mod constants;
pub mod engine;

pub use constants::*;
pub use engine::{
    default_custom_units, is_non_dairy_switch, price_drink, resolve_units, size_multiplier,
    ResolvedUnits,
};
