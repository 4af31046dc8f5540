//! Core types for quantity values.

use super::parser::UnitReference;
use crate::dimension::Dimension;
use crate::error::QuantityResult;
use crate::units::BaseUnit;
use serde::{Deserialize, Serialize};

/// A magnitude with a standard uncertainty, a unit reference and the
/// dimension implied by that reference.
///
/// Values are immutable: every operation returns a new value. The dimension
/// is always derived from the reference, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawQuantity", into = "RawQuantity")]
pub struct QuantityValue {
    number: f64,
    standard_uncertainty: f64,
    reference: UnitReference,
    dimension: Dimension,
}

impl QuantityValue {
    /// Create a value from a magnitude, a reference string and a standard
    /// uncertainty. A negative uncertainty is taken by absolute value.
    pub fn new(number: f64, reference: &str, standard_uncertainty: f64) -> QuantityResult<Self> {
        let reference = UnitReference::parse(reference)?;
        Ok(Self::from_reference(number, reference, standard_uncertainty))
    }

    /// Create a value with zero uncertainty.
    pub fn exact(number: f64, reference: &str) -> QuantityResult<Self> {
        Self::new(number, reference, 0.0)
    }

    pub fn from_reference(number: f64, reference: UnitReference, standard_uncertainty: f64) -> Self {
        let dimension = reference.dimension();
        Self {
            number,
            standard_uncertainty: standard_uncertainty.abs(),
            reference,
            dimension,
        }
    }

    pub fn dimensionless(number: f64, standard_uncertainty: f64) -> Self {
        Self::from_reference(number, UnitReference::dimensionless(), standard_uncertainty)
    }

    /// One exact unit of a base quantity.
    pub fn base(unit: BaseUnit) -> Self {
        Self::from_reference(1.0, UnitReference::from_base(unit), 0.0)
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    /// Absolute 1-sigma uncertainty, never negative.
    pub fn standard_uncertainty(&self) -> f64 {
        self.standard_uncertainty
    }

    /// `standard_uncertainty / |number|`, or 0 when the number is 0.
    pub fn relative_uncertainty(&self) -> f64 {
        if self.number == 0.0 {
            0.0
        } else {
            self.standard_uncertainty / self.number.abs()
        }
    }

    pub fn reference(&self) -> &UnitReference {
        &self.reference
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// True when both the reference and the dimension are empty.
    pub fn is_dimensionless(&self) -> bool {
        self.reference.is_dimensionless() && self.dimension.is_dimensionless()
    }

    /// Whether `self` and `other` may be added or subtracted.
    pub fn is_commensurable(&self, other: &QuantityValue) -> bool {
        self.reference == other.reference
    }
}

/// Right-hand operand of an arithmetic operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Quantity(QuantityValue),
    /// An exact real number.
    Scalar(f64),
}

impl From<QuantityValue> for Operand {
    fn from(value: QuantityValue) -> Self {
        Self::Quantity(value)
    }
}

impl From<&QuantityValue> for Operand {
    fn from(value: &QuantityValue) -> Self {
        Self::Quantity(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

/// Serialized shape of a quantity: the dimension and relative uncertainty
/// are re-derived on the way back in.
#[derive(Serialize, Deserialize)]
struct RawQuantity {
    number: f64,
    #[serde(default)]
    standard_uncertainty: f64,
    #[serde(default)]
    reference: UnitReference,
}

impl From<RawQuantity> for QuantityValue {
    fn from(raw: RawQuantity) -> Self {
        Self::from_reference(raw.number, raw.reference, raw.standard_uncertainty)
    }
}

impl From<QuantityValue> for RawQuantity {
    fn from(value: QuantityValue) -> Self {
        Self {
            number: value.number,
            standard_uncertainty: value.standard_uncertainty,
            reference: value.reference,
        }
    }
}
