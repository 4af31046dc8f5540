pub mod dimension;
pub mod error;
pub mod quantity;
pub mod units;

pub use dimension::{BaseQuantity, Dimension, Exponent};
pub use error::{QuantityError, QuantityResult};
pub use quantity::{DerivedUnitRegistry, FormatOptions, Operand, QuantityFormatter, QuantityValue, UnitReference};

/// Crate version, as published.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

