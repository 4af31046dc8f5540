use crate::dimension::{BaseQuantity, Dimension};
use crate::quantity::QuantityValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SI base unit, one per base quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseUnit {
    Meter,
    Kilogram,
    Second,
    Ampere,
    Kelvin,
    Mole,
    Candela,
}

impl BaseUnit {
    pub const ALL: [BaseUnit; 7] = [
        Self::Meter,
        Self::Kilogram,
        Self::Second,
        Self::Ampere,
        Self::Kelvin,
        Self::Mole,
        Self::Candela,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilogram => "kg",
            Self::Second => "s",
            Self::Ampere => "A",
            Self::Kelvin => "K",
            Self::Mole => "mol",
            Self::Candela => "cd",
        }
    }

    /// Look up a base unit by its reference symbol. Prefixed symbols such
    /// as `mm` are not base units.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    pub fn quantity(&self) -> BaseQuantity {
        match self {
            Self::Meter => BaseQuantity::Length,
            Self::Kilogram => BaseQuantity::Mass,
            Self::Second => BaseQuantity::Time,
            Self::Ampere => BaseQuantity::ElectricCurrent,
            Self::Kelvin => BaseQuantity::ThermodynamicTemperature,
            Self::Mole => BaseQuantity::AmountOfSubstance,
            Self::Candela => BaseQuantity::LuminousIntensity,
        }
    }

    pub fn dimension(&self) -> Dimension {
        Dimension::base(self.quantity())
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// name, symbol, power of ten
const SI_PREFIXES: [(&str, &str, i32); 16] = [
    ("yocto", "y", -24),
    ("zepto", "z", -21),
    ("atto", "a", -18),
    ("femto", "f", -15),
    ("pico", "p", -12),
    ("nano", "n", -9),
    ("micro", "μ", -6),
    ("milli", "m", -3),
    ("kilo", "k", 3),
    ("mega", "M", 6),
    ("giga", "G", 9),
    ("tera", "T", 12),
    ("peta", "P", 15),
    ("exa", "E", 18),
    ("zetta", "Z", 21),
    ("yotta", "Y", 24),
];

/// SI prefix symbol for an engineering exponent (a nonzero multiple of 3).
pub fn prefix_symbol(exponent: i32) -> Option<&'static str> {
    SI_PREFIXES
        .iter()
        .find(|(_, _, e)| *e == exponent)
        .map(|(_, symbol, _)| *symbol)
}

/// SI prefix name for an engineering exponent.
pub fn prefix_name(exponent: i32) -> Option<&'static str> {
    SI_PREFIXES
        .iter()
        .find(|(_, _, e)| *e == exponent)
        .map(|(name, _, _)| *name)
}

// Base-unit constructors: magnitude 1, exact, exponent 1 on one base quantity.

pub fn meter() -> QuantityValue {
    QuantityValue::base(BaseUnit::Meter)
}

pub fn kilogram() -> QuantityValue {
    QuantityValue::base(BaseUnit::Kilogram)
}

pub fn second() -> QuantityValue {
    QuantityValue::base(BaseUnit::Second)
}

pub fn ampere() -> QuantityValue {
    QuantityValue::base(BaseUnit::Ampere)
}

pub fn kelvin() -> QuantityValue {
    QuantityValue::base(BaseUnit::Kelvin)
}

pub fn mole() -> QuantityValue {
    QuantityValue::base(BaseUnit::Mole)
}

pub fn candela() -> QuantityValue {
    QuantityValue::base(BaseUnit::Candela)
}
