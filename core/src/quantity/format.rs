//! Engineering-notation formatting.
//!
//! A value renders as `<mantissa>(<uncertainty>) <prefix><unit>`:
//! - the mantissa is scaled by the largest multiple of 3 not exceeding the
//!   order of magnitude, and that power is shown as an SI prefix
//! - the uncertainty is shown as its two leading digits, and the mantissa
//!   carries exactly as many decimals as reach the last of those digits
//! - an exact value shows a placeholder and a fixed number of decimals

use super::registry::DerivedUnitRegistry;
use super::types::QuantityValue;
use crate::error::{QuantityError, QuantityResult};
use crate::units::prefix_symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Decimals shown when the uncertainty is zero.
    pub exact_digits: usize,
    /// Shown in place of the uncertainty digits when it is zero.
    pub exact_placeholder: String,
    /// Render the engineering exponent as an SI prefix (`k`, `μ`, ...) or,
    /// when false, as `e<exponent>` after the uncertainty.
    pub si_prefixes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            exact_digits: 4,
            exact_placeholder: "(...)".to_string(),
            si_prefixes: true,
        }
    }
}

impl FormatOptions {
    /// Read options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> QuantityResult<Self> {
        serde_json::from_str(json).map_err(|e| QuantityError::InvalidOptions(e.to_string()))
    }
}

/// Formats quantity values, optionally substituting derived-unit symbols.
#[derive(Debug, Clone, Default)]
pub struct QuantityFormatter<'a> {
    options: FormatOptions,
    registry: Option<&'a DerivedUnitRegistry>,
}

impl<'a> QuantityFormatter<'a> {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: &'a DerivedUnitRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Fails with [`QuantityError::PrefixOutOfRange`] when SI prefixes are
    /// enabled and the engineering exponent has none.
    pub fn format(&self, value: &QuantityValue) -> QuantityResult<String> {
        let exponent = engineering_exponent(value.number());
        let mantissa = value.number() / 10f64.powi(exponent);

        let (digits, uncertainty) = if value.standard_uncertainty() != 0.0 {
            let u = value.standard_uncertainty();
            let u_exponent = u.log10().floor() as i32;
            let u_digits = u / 10f64.powi(u_exponent.saturating_sub(1));
            let digits = exponent.saturating_sub(u_exponent).saturating_add(1).max(0) as usize;
            (digits, format!("({:.0})", u_digits))
        } else {
            (self.options.exact_digits, self.options.exact_placeholder.clone())
        };

        let mut out = format!("{:.*}{}", digits, mantissa, uncertainty);
        let unit = self.unit_text(value);
        let suffix = if exponent == 0 {
            unit
        } else if self.options.si_prefixes {
            let prefix = prefix_symbol(exponent).ok_or_else(|| {
                warn!("No SI prefix for 10^{} while formatting {}", exponent, value.number());
                QuantityError::PrefixOutOfRange(exponent)
            })?;
            format!("{}{}", prefix, unit)
        } else {
            out.push_str(&format!("e{}", exponent));
            unit
        };

        if !suffix.is_empty() {
            out.push(' ');
            out.push_str(&suffix);
        }
        Ok(out)
    }

    fn unit_text(&self, value: &QuantityValue) -> String {
        let reference = value.reference();
        let derived = self
            .registry
            .filter(|_| !reference.is_empty() && reference.is_base_only())
            .and_then(|r| r.symbol_for(&value.dimension()));
        match derived {
            Some(symbol) => symbol.to_string(),
            None => reference.to_string(),
        }
    }
}

/// `3 * floor(floor(log10|x|) / 3)`, or 0 for zero and non-finite values.
pub fn engineering_exponent(number: f64) -> i32 {
    if number == 0.0 || !number.is_finite() {
        return 0;
    }
    let order = number.abs().log10().floor() as i32;
    3 * order.div_euclid(3)
}

impl QuantityValue {
    /// Format with default options.
    pub fn format(&self) -> QuantityResult<String> {
        QuantityFormatter::default().format(self)
    }

    /// Format with default options, substituting derived-unit symbols.
    pub fn format_with(&self, registry: &DerivedUnitRegistry) -> QuantityResult<String> {
        QuantityFormatter::default().with_registry(registry).format(self)
    }
}

/// Default formatting; exponents beyond the prefix table are written as
/// `e<exponent>`.
impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.format() {
            Ok(text) => text,
            Err(_) => QuantityFormatter::new(FormatOptions {
                si_prefixes: false,
                ..FormatOptions::default()
            })
            .format(self)
            .map_err(|_| fmt::Error)?,
        };
        write!(f, "{}", text)
    }
}
