//! Dimension-checked arithmetic with first-order uncertainty propagation.
//!
//! Uncertainties of distinct operands are treated as independent:
//! - sums and differences combine absolute uncertainties in quadrature
//! - products and quotients combine relative uncertainties in quadrature
//! - scalars are exact and only scale the uncertainty
//!
//! Additive operations are gated on equal unit references. Multiplicative
//! ones combine references and dimensions, failing only when an exponent
//! leaves the `i32` rational range.

use super::parser::UnitReference;
use super::types::{Operand, QuantityValue};
use crate::dimension::Exponent;
use crate::error::{QuantityError, QuantityResult};
use std::ops::{Div, Mul, Neg};
use tracing::debug;

impl QuantityValue {
    /// Sum of two commensurable values, or of a dimensionless value and a
    /// scalar.
    ///
    /// For a scalar the result uncertainty is `|scalar| * standard_uncertainty`.
    pub fn add(&self, rhs: impl Into<Operand>) -> QuantityResult<QuantityValue> {
        match rhs.into() {
            Operand::Quantity(other) => {
                self.require_commensurable("add", &other)?;
                Ok(Self::from_reference(
                    self.number() + other.number(),
                    self.reference().clone(),
                    self.standard_uncertainty().hypot(other.standard_uncertainty()),
                ))
            }
            Operand::Scalar(x) => {
                self.require_dimensionless_for("add", x)?;
                Ok(Self::from_reference(
                    x + self.number(),
                    self.reference().clone(),
                    x.abs() * self.standard_uncertainty(),
                ))
            }
        }
    }

    /// Difference, with the same compatibility rules and uncertainty
    /// formulas as [`QuantityValue::add`].
    pub fn subtract(&self, rhs: impl Into<Operand>) -> QuantityResult<QuantityValue> {
        match rhs.into() {
            Operand::Quantity(other) => {
                self.require_commensurable("subtract", &other)?;
                Ok(Self::from_reference(
                    self.number() - other.number(),
                    self.reference().clone(),
                    self.standard_uncertainty().hypot(other.standard_uncertainty()),
                ))
            }
            Operand::Scalar(x) => {
                self.require_dimensionless_for("subtract", x)?;
                Ok(Self::from_reference(
                    self.number() - x,
                    self.reference().clone(),
                    x.abs() * self.standard_uncertainty(),
                ))
            }
        }
    }

    /// Product. Fails only when a combined reference exponent leaves the
    /// `i32` rational range.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> QuantityResult<QuantityValue> {
        match rhs.into() {
            Operand::Quantity(other) => {
                let number = self.number() * other.number();
                Ok(Self::from_reference(
                    number,
                    self.reference().product(other.reference())?,
                    number.abs() * self.relative_uncertainty().hypot(other.relative_uncertainty()),
                ))
            }
            Operand::Scalar(x) => Ok(self.scale(x)),
        }
    }

    pub fn divide(&self, rhs: impl Into<Operand>) -> QuantityResult<QuantityValue> {
        match rhs.into() {
            Operand::Quantity(other) => {
                let number = self.number() / other.number();
                Ok(Self::from_reference(
                    number,
                    self.reference().product(&other.reference().inverse()?)?,
                    number.abs() * self.relative_uncertainty().hypot(other.relative_uncertainty()),
                ))
            }
            Operand::Scalar(x) => Ok(self.shrink(x)),
        }
    }

    /// `scalar / self`, the scalar being exact.
    pub fn rdiv(&self, scalar: f64) -> QuantityResult<QuantityValue> {
        let number = scalar / self.number();
        Ok(Self::from_reference(
            number,
            self.reference().inverse()?,
            number.abs() * self.relative_uncertainty(),
        ))
    }

    pub fn negate(&self) -> QuantityValue {
        Self::from_reference(
            -self.number(),
            self.reference().clone(),
            self.standard_uncertainty(),
        )
    }

    /// Reciprocal.
    pub fn invert(&self) -> QuantityResult<QuantityValue> {
        self.rdiv(1.0)
    }

    /// Square root. Reference exponents are halved exactly.
    ///
    /// Uncertainty follows d√x = ½ √x · (u/x).
    pub fn sqrt(&self) -> QuantityResult<QuantityValue> {
        let root = self.number().sqrt();
        Ok(Self::from_reference(
            root,
            self.reference().scaled(Exponent::new(1, 2))?,
            root * 0.5 * self.relative_uncertainty(),
        ))
    }

    /// Integer power. Uncertainty is `|n| · |xⁿ| · (u/|x|)`.
    pub fn powi(&self, n: i32) -> QuantityResult<QuantityValue> {
        let number = self.number().powi(n);
        Ok(Self::from_reference(
            number,
            self.reference().scaled(Exponent::from_integer(n))?,
            f64::from(n).abs() * number.abs() * self.relative_uncertainty(),
        ))
    }

    /// Natural exponential of a dimensionless value.
    pub fn exp(&self) -> QuantityResult<QuantityValue> {
        if !self.is_dimensionless() {
            debug!("Rejected exp of '{}'", self.reference());
            return Err(QuantityError::DimensionalityError {
                function: "exp".to_string(),
                reference: self.reference().to_string(),
            });
        }
        let number = self.number().exp();
        Ok(Self::from_reference(
            number,
            UnitReference::dimensionless(),
            number * self.standard_uncertainty(),
        ))
    }

    fn scale(&self, x: f64) -> QuantityValue {
        Self::from_reference(
            x * self.number(),
            self.reference().clone(),
            x.abs() * self.standard_uncertainty(),
        )
    }

    fn shrink(&self, x: f64) -> QuantityValue {
        Self::from_reference(
            self.number() / x,
            self.reference().clone(),
            self.standard_uncertainty() / x.abs(),
        )
    }

    fn require_commensurable(&self, op: &str, other: &QuantityValue) -> QuantityResult<()> {
        if self.is_commensurable(other) {
            Ok(())
        } else {
            debug!("Rejected {}: '{}' vs '{}'", op, self.reference(), other.reference());
            Err(QuantityError::incompatible(op, self.reference(), other.reference()))
        }
    }

    fn require_dimensionless_for(&self, op: &str, scalar: f64) -> QuantityResult<()> {
        if self.reference().is_dimensionless() {
            Ok(())
        } else {
            debug!("Rejected {} of scalar {} to '{}'", op, scalar, self.reference());
            Err(QuantityError::incompatible(op, self.reference(), scalar))
        }
    }
}

// Operator sugar for the operations that cannot fail: scaling by an exact
// scalar and negation. Products of two values touch reference exponents and
// go through `multiply`/`divide`.

impl Mul<f64> for QuantityValue {
    type Output = QuantityValue;

    fn mul(self, rhs: f64) -> QuantityValue {
        self.scale(rhs)
    }
}

impl Mul<QuantityValue> for f64 {
    type Output = QuantityValue;

    fn mul(self, rhs: QuantityValue) -> QuantityValue {
        rhs.scale(self)
    }
}

impl Div<f64> for QuantityValue {
    type Output = QuantityValue;

    fn div(self, rhs: f64) -> QuantityValue {
        self.shrink(rhs)
    }
}

impl Neg for QuantityValue {
    type Output = QuantityValue;

    fn neg(self) -> QuantityValue {
        self.negate()
    }
}

impl Neg for &QuantityValue {
    type Output = QuantityValue;

    fn neg(self) -> QuantityValue {
        self.negate()
    }
}
