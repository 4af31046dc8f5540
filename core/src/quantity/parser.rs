//! Unit reference parser.
//!
//! A reference is a whitespace-separated list of tokens:
//! - `symbol` (exponent 1)
//! - `symbol^exponent` where the exponent is an integer (`-2`), a fraction
//!   (`1/2`) or a decimal (`0.5`), all read as exact rationals
//!
//! Tokens whose symbol is `1` or empty are dropped, so `"1"` and `""` both
//! denote a dimensionless reference. Repeated symbols are folded by summing
//! their exponents and zero exponents are pruned.

use crate::dimension::{checked_product, checked_sum, Dimension, Exponent};
use crate::error::{QuantityError, QuantityResult};
use crate::units::BaseUnit;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized mapping from unit symbol to rational exponent.
///
/// Entries keep the order in which each symbol first appeared. Equality
/// ignores that order: two references are equal when they map the same
/// symbols to the same exponents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnitReference {
    entries: Vec<(String, Exponent)>,
}

impl UnitReference {
    /// The empty reference.
    pub fn dimensionless() -> Self {
        Self::default()
    }

    pub fn from_base(unit: BaseUnit) -> Self {
        Self {
            entries: vec![(unit.symbol().to_string(), Exponent::one())],
        }
    }

    /// Parse and normalize a reference string.
    pub fn parse(input: &str) -> QuantityResult<Self> {
        let mut entries = Vec::new();
        for (position, token) in tokens(input) {
            let (symbol, exponent) = parse_token(token, position)?;
            if symbol.is_empty() || symbol == "1" {
                continue;
            }
            accumulate(&mut entries, symbol, exponent)
                .ok_or_else(|| invalid_token(token, position, "exponent sum out of range"))?;
        }
        Ok(Self::pruned(entries))
    }

    /// Drop the symbols whose exponents cancelled.
    fn pruned(mut entries: Vec<(String, Exponent)>) -> Self {
        entries.retain(|(_, e)| !e.is_zero());
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Exponent)> + '_ {
        self.entries.iter().map(|(s, e)| (s.as_str(), *e))
    }

    /// Exponent of `symbol`, zero if absent.
    pub fn exponent(&self, symbol: &str) -> Exponent {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, e)| *e)
            .unwrap_or_else(Exponent::zero)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True for the empty mapping.
    pub fn is_dimensionless(&self) -> bool {
        self.is_empty()
    }

    /// True when every symbol is an SI base unit symbol.
    pub fn is_base_only(&self) -> bool {
        self.entries
            .iter()
            .all(|(s, _)| BaseUnit::from_symbol(s).is_some())
    }

    /// Concatenate with `other` and renormalize.
    pub fn product(&self, other: &UnitReference) -> QuantityResult<UnitReference> {
        let mut entries = self.entries.clone();
        for (symbol, exponent) in &other.entries {
            accumulate(&mut entries, symbol, *exponent)
                .ok_or_else(|| QuantityError::overflow("multiply", format!("{} {}", self, other)))?;
        }
        Ok(Self::pruned(entries))
    }

    /// Negate every exponent.
    pub fn inverse(&self) -> QuantityResult<UnitReference> {
        self.scaled(-Exponent::one())
    }

    /// Multiply every exponent by `factor`.
    pub fn scaled(&self, factor: Exponent) -> QuantityResult<UnitReference> {
        let entries = self
            .entries
            .iter()
            .map(|(s, e)| checked_product(*e, factor).map(|e| (s.clone(), e)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| QuantityError::overflow(&format!("power {}", factor), self))?;
        Ok(Self::pruned(entries))
    }

    /// Dimension implied by the base-unit symbols. Other symbols are opaque
    /// and contribute nothing. Symbols are unique after normalization, so
    /// each base quantity takes its exponent from exactly one entry.
    pub fn dimension(&self) -> Dimension {
        self.entries
            .iter()
            .filter_map(|(s, e)| BaseUnit::from_symbol(s).map(|u| (u.quantity(), *e)))
            .fold(Dimension::DIMENSIONLESS, |dim, (q, e)| dim.with_exponent(q, e))
    }
}

impl PartialEq for UnitReference {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(s, e)| other.exponent(s) == *e)
    }
}

impl Eq for UnitReference {}

/// Canonical form: `symbol` or `symbol^exponent`, space separated.
impl fmt::Display for UnitReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, exponent)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
            if !exponent.is_one() {
                write!(f, "^{}", exponent)?;
            }
        }
        Ok(())
    }
}

impl FromStr for UnitReference {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UnitReference {
    type Error = QuantityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<UnitReference> for String {
    fn from(reference: UnitReference) -> String {
        reference.to_string()
    }
}

/// Split on whitespace, keeping the character position of each token.
fn tokens(input: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    for (position, (byte, c)) in input.char_indices().enumerate() {
        match (c.is_whitespace(), start) {
            (true, Some((pos, from))) => {
                out.push((pos, &input[from..byte]));
                start = None;
            }
            (false, None) => start = Some((position, byte)),
            _ => {}
        }
    }
    if let Some((pos, from)) = start {
        out.push((pos, &input[from..]));
    }
    out
}

/// Add `exponent` to the entry for `symbol`, appending it if absent.
fn accumulate(entries: &mut Vec<(String, Exponent)>, symbol: &str, exponent: Exponent) -> Option<()> {
    match entries.iter_mut().find(|(s, _)| s == symbol) {
        Some((_, total)) => *total = checked_sum(*total, exponent)?,
        None => entries.push((symbol.to_string(), exponent)),
    }
    Some(())
}

fn invalid_token(token: &str, position: usize, message: &str) -> QuantityError {
    QuantityError::InvalidReference {
        token: token.to_string(),
        position,
        message: message.to_string(),
    }
}

fn parse_token(token: &str, position: usize) -> QuantityResult<(&str, Exponent)> {
    let mut parts = token.split('^');
    let symbol = parts.next().unwrap_or("");
    let exponent = match parts.next() {
        None => Exponent::one(),
        Some(text) => parse_exponent(text).map_err(|m| invalid_token(token, position, &m))?,
    };
    if parts.next().is_some() {
        return Err(invalid_token(token, position, "more than one '^'"));
    }
    Ok((symbol, exponent))
}

/// Read an exponent exactly: `-2`, `3/2` or `0.5`.
///
/// `i32::MIN` is refused as numerator or denominator since it has no
/// positive counterpart.
fn parse_exponent(text: &str) -> Result<Exponent, String> {
    if text.is_empty() {
        return Err("missing exponent after '^'".to_string());
    }
    let out_of_range = || format!("exponent '{}' out of range", text);

    if let Some((numer, denom)) = text.split_once('/') {
        let numer: i32 = numer
            .parse()
            .map_err(|_| format!("invalid numerator '{}'", numer))?;
        let denom: i32 = denom
            .parse()
            .map_err(|_| format!("invalid denominator '{}'", denom))?;
        if denom == 0 {
            return Err("zero denominator".to_string());
        }
        if numer == i32::MIN || denom == i32::MIN {
            return Err(out_of_range());
        }
        return Ok(Exponent::new(numer, denom));
    }

    if let Some((whole, frac)) = text.split_once('.') {
        let negative = whole.starts_with('-');
        let digits = format!("{}{}", whole.trim_start_matches(|c| c == '-' || c == '+'), frac);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("invalid exponent '{}'", text));
        }
        let numer: i32 = digits.parse().map_err(|_| out_of_range())?;
        let denom = u32::try_from(frac.len())
            .ok()
            .and_then(|places| 10i32.checked_pow(places))
            .ok_or_else(out_of_range)?;
        let numer = if negative { -numer } else { numer };
        return Ok(Exponent::new(numer, denom));
    }

    match text.parse::<i32>() {
        Ok(i32::MIN) => Err(out_of_range()),
        Ok(n) => Ok(Exponent::from_integer(n)),
        Err(_) => Err(format!("invalid exponent '{}'", text)),
    }
}
