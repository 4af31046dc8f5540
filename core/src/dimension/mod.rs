//! Dimension vectors over the seven ISQ base quantities.
//!
//! Every physical quantity has a dimension expressed as a product of powers
//! of the base quantities:
//! - L: length
//! - M: mass
//! - T: time
//! - I: electric current
//! - Θ: thermodynamic temperature
//! - N: amount of substance
//! - J: luminous intensity
//!
//! Exponents are exact rationals, so repeated products, quotients and square
//! roots never accumulate rounding error in exponent space.

use crate::error::{QuantityError, QuantityResult};
use num_rational::Rational32;
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
mod tests_algebra;

/// Exact rational exponent of a base quantity or unit symbol.
pub type Exponent = Rational32;

pub const NUM_BASE_QUANTITIES: usize = 7;

const ZERO: Exponent = Exponent::new_raw(0, 1);
const ONE: Exponent = Exponent::new_raw(1, 1);

/// One of the seven ISQ base quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaseQuantity {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    ThermodynamicTemperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseQuantity {
    /// All base quantities in canonical order.
    pub const ALL: [BaseQuantity; NUM_BASE_QUANTITIES] = [
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::ElectricCurrent,
        Self::ThermodynamicTemperature,
        Self::AmountOfSubstance,
        Self::LuminousIntensity,
    ];

    /// Key used when building a dimension from named exponents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::ElectricCurrent => "electric current",
            Self::ThermodynamicTemperature => "thermodynamic temperature",
            Self::AmountOfSubstance => "amount of substance",
            Self::LuminousIntensity => "luminous intensity",
        }
    }

    /// Dimension symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Length => "L",
            Self::Mass => "M",
            Self::Time => "T",
            Self::ElectricCurrent => "I",
            Self::ThermodynamicTemperature => "Θ",
            Self::AmountOfSubstance => "N",
            Self::LuminousIntensity => "J",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for BaseQuantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.name() == s)
            .ok_or_else(|| QuantityError::InvalidDimensionKey(s.to_string()))
    }
}

impl fmt::Display for BaseQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable vector of rational exponents, one per base quantity.
///
/// All algebra returns a new vector. Equality is pointwise over the seven
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    exponents: [Exponent; NUM_BASE_QUANTITIES],
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl Dimension {
    // ==========================================================================
    // Base Dimensions
    // ==========================================================================

    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self {
        exponents: [ZERO; NUM_BASE_QUANTITIES],
    };

    /// Length [L] - meter
    pub const LENGTH: Self = Self::unit_vector(BaseQuantity::Length);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::unit_vector(BaseQuantity::Mass);

    /// Time [T] - second
    pub const TIME: Self = Self::unit_vector(BaseQuantity::Time);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::unit_vector(BaseQuantity::ElectricCurrent);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::unit_vector(BaseQuantity::ThermodynamicTemperature);

    /// Amount of substance [N] - mole
    pub const AMOUNT: Self = Self::unit_vector(BaseQuantity::AmountOfSubstance);

    /// Luminous intensity [J] - candela
    pub const LUMINOSITY: Self = Self::unit_vector(BaseQuantity::LuminousIntensity);

    // ==========================================================================
    // Constructors
    // ==========================================================================

    const fn unit_vector(quantity: BaseQuantity) -> Self {
        let mut exponents = [ZERO; NUM_BASE_QUANTITIES];
        exponents[quantity.index()] = ONE;
        Self { exponents }
    }

    /// Exponent 1 on a single base quantity.
    pub fn base(quantity: BaseQuantity) -> Self {
        Self::unit_vector(quantity)
    }

    /// Build a dimension from `(base quantity name, exponent)` pairs.
    ///
    /// Missing keys default to 0, a repeated key keeps its last exponent.
    /// Fails with [`QuantityError::InvalidDimensionKey`] on the first name
    /// that is not a base quantity; nothing is partially built.
    pub fn from_exponents<'a, I>(exponents: I) -> QuantityResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Exponent)>,
    {
        let mut dimension = Self::DIMENSIONLESS;
        for (key, exponent) in exponents {
            let quantity: BaseQuantity = key.parse()?;
            dimension.exponents[quantity.index()] = exponent;
        }
        Ok(dimension)
    }

    pub(crate) fn with_exponent(mut self, quantity: BaseQuantity, exponent: Exponent) -> Self {
        self.exponents[quantity.index()] = exponent;
        self
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    pub fn exponent(&self, quantity: BaseQuantity) -> Exponent {
        self.exponents[quantity.index()]
    }

    /// `(base quantity, exponent)` pairs in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (BaseQuantity, Exponent)> + '_ {
        BaseQuantity::ALL
            .into_iter()
            .zip(self.exponents.iter().copied())
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(Zero::is_zero)
    }

    // ==========================================================================
    // Operations
    // ==========================================================================
    //
    // Exponents are `i32` rationals, so every operation is checked and
    // reports `ExponentOverflow` instead of wrapping.

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> QuantityResult<Dimension> {
        self.zip_with(other, checked_sum)
            .ok_or_else(|| QuantityError::overflow("multiply", format!("{}·{}", self, other)))
    }

    /// Reciprocal (negate all exponents)
    pub fn invert(&self) -> QuantityResult<Dimension> {
        self.map(|e| checked_product(e, -ONE))
            .ok_or_else(|| QuantityError::overflow("invert", self))
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> QuantityResult<Dimension> {
        self.multiply(&other.invert()?)
    }

    /// Square root (halve all exponents)
    ///
    /// Odd exponents become half-integers, exactly.
    pub fn sqrt(&self) -> QuantityResult<Dimension> {
        self.map(|e| checked_product(e, Exponent::new_raw(1, 2)))
            .ok_or_else(|| QuantityError::overflow("sqrt", self))
    }

    /// Raise to an integer power (multiply all exponents)
    pub fn powi(&self, n: i32) -> QuantityResult<Dimension> {
        self.map(|e| checked_product(e, Exponent::from_integer(n)))
            .ok_or_else(|| QuantityError::overflow(&format!("power {}", n), self))
    }

    fn map(&self, f: impl Fn(Exponent) -> Option<Exponent>) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = f(*e)?;
        }
        Some(Dimension { exponents })
    }

    fn zip_with(
        &self,
        other: &Dimension,
        f: impl Fn(Exponent, Exponent) -> Option<Exponent>,
    ) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents.iter()) {
            *e = f(*e, *o)?;
        }
        Some(Dimension { exponents })
    }
}

/// `a + b`, or `None` when the result does not fit an `i32` rational.
///
/// A numerator of `i32::MIN` is rejected as well: it cannot be negated, and
/// `num_integer::gcd` panics on it in some combinations.
pub(crate) fn checked_sum(a: Exponent, b: Exponent) -> Option<Exponent> {
    a.checked_add(&b).filter(fits)
}

/// `a * b`, with the same range rule as [`checked_sum`].
pub(crate) fn checked_product(a: Exponent, b: Exponent) -> Option<Exponent> {
    a.checked_mul(&b).filter(fits)
}

fn fits(e: &Exponent) -> bool {
    *e.numer() != i32::MIN
}

/// Renders nonzero components in canonical order, e.g. `LMT^(-2)`.
/// The dimensionless vector renders as an empty string.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (quantity, exponent) in self.iter() {
            if exponent.is_zero() {
                continue;
            }
            write!(f, "{}", quantity.symbol())?;
            if !exponent.is_one() {
                write!(f, "^({})", exponent)?;
            }
        }
        Ok(())
    }
}
