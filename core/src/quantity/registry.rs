//! Derived-unit lookup keyed by dimension.
//!
//! The registry is built once by the caller, typically by composing base
//! units (`N = kg m / s²`), and handed to the formatter. It is never
//! mutated after construction and holds no global state.

use super::types::QuantityValue;
use crate::dimension::Dimension;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DerivedUnitRegistry {
    symbols: HashMap<Dimension, String>,
}

impl DerivedUnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbol` for the dimension of `unit`. A later registration
    /// for the same dimension replaces the earlier one.
    pub fn with_unit(mut self, symbol: &str, unit: &QuantityValue) -> Self {
        self.symbols.insert(unit.dimension(), symbol.to_string());
        self
    }

    pub fn with_dimension(mut self, symbol: &str, dimension: Dimension) -> Self {
        self.symbols.insert(dimension, symbol.to_string());
        self
    }

    pub fn symbol_for(&self, dimension: &Dimension) -> Option<&str> {
        self.symbols.get(dimension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<(Dimension, String)> for DerivedUnitRegistry {
    fn from_iter<I: IntoIterator<Item = (Dimension, String)>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use crate::units::{kilogram, meter, second};

    fn newton() -> QuantityValue {
        kilogram()
            .multiply(meter())
            .and_then(|v| v.divide(second()))
            .and_then(|v| v.divide(second()))
            .unwrap()
    }

    #[test]
    fn test_lookup_by_composed_dimension() {
        let registry = DerivedUnitRegistry::new().with_unit("N", &newton());
        let force = QuantityValue::new(2.0, "m kg s^-2", 0.1).unwrap();
        assert_eq!(registry.symbol_for(&force.dimension()), Some("N"));
        assert_eq!(registry.symbol_for(&Dimension::LENGTH), None);
    }

    #[test]
    fn test_formatter_substitutes_symbol() {
        let registry = DerivedUnitRegistry::new()
            .with_unit("N", &newton())
            .with_unit("Hz", &second().invert().unwrap());
        let force = QuantityValue::new(2.0, "kg m s^-2", 0.1).unwrap();
        assert_eq!(force.format_with(&registry).unwrap(), "2.00(10) N");

        let rate = QuantityValue::new(1500.0, "s^-1", 10.0).unwrap();
        assert_eq!(rate.format_with(&registry).unwrap(), "1.500(10) kHz");
    }

    #[test]
    fn test_opaque_symbols_are_not_substituted() {
        let registry = DerivedUnitRegistry::new().with_dimension("Hz", Dimension::TIME.invert().unwrap());
        let value = QuantityValue::new(2.0, "rev s^-1", 0.1).unwrap();
        assert_eq!(value.format_with(&registry).unwrap(), "2.00(10) rev s^-1");
    }

    #[test]
    fn test_from_iter() {
        let registry: DerivedUnitRegistry = [(Dimension::TIME.invert().unwrap(), "Hz".to_string())]
            .into_iter()
            .collect();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
