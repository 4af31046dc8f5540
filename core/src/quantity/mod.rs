//! Quantity values with units and measurement uncertainty.
//!
//! Provides:
//! - Unit references parsed from `symbol^exponent` token lists
//! - Dimension-checked arithmetic with uncertainty propagation
//! - Engineering-notation formatting with SI prefixes
//! - A derived-unit registry the formatter can consult

pub mod types;
pub mod parser;
pub mod arithmetic;
pub mod format;
pub mod registry;


pub use types::{QuantityValue, Operand};
pub use parser::UnitReference;
pub use format::{engineering_exponent, FormatOptions, QuantityFormatter};
pub use registry::DerivedUnitRegistry;
