use isq_core::units::{ampere, kilogram, meter, second};
use isq_core::{DerivedUnitRegistry, QuantityError, QuantityResult, QuantityValue};
use std::f64::consts::PI;

fn volt() -> QuantityValue {
    let compose = || -> QuantityResult<QuantityValue> {
        kilogram()
            .multiply(meter().powi(2)?)?
            .divide(second().powi(3)?)?
            .divide(ampere())
    };
    compose().unwrap()
}

#[test]
fn test_pendulum_gravity_estimate() {
    let length = QuantityValue::new(1.0, "m", 0.002).unwrap();
    let period = QuantityValue::new(2.006, "s", 0.005).unwrap();

    let g = length
        .multiply(4.0 * PI * PI)
        .and_then(|v| v.divide(period.powi(2)?))
        .unwrap();

    assert!((g.number() - 9.810652192067229).abs() < 1e-9);
    assert!((g.standard_uncertainty() - 0.05269578134174246).abs() < 1e-9);
    assert_eq!(g.reference().to_string(), "m s^-2");
    assert_eq!(g.format().unwrap(), "9.811(53) m s^-2");
}

#[test]
fn test_resistance_with_derived_units() {
    let registry = DerivedUnitRegistry::new()
        .with_unit("V", &volt())
        .with_unit("Ω", &volt().divide(ampere()).unwrap());

    let voltage = volt().multiply(QuantityValue::new(12.0, "", 0.05).unwrap()).unwrap();
    let current = QuantityValue::new(0.250, "A", 0.002).unwrap();
    let resistance = voltage.divide(&current).unwrap();

    assert_eq!(resistance.reference().to_string(), "kg m^2 s^-3 A^-2");
    assert_eq!(resistance.format().unwrap(), "48.00(43) kg m^2 s^-3 A^-2");
    assert_eq!(resistance.format_with(&registry).unwrap(), "48.00(43) Ω");
    assert_eq!(voltage.format_with(&registry).unwrap(), "12.000(50) V");
}

#[test]
fn test_mismatched_sum_is_reported() {
    let distance = QuantityValue::new(3.0, "m", 0.1).unwrap();
    let duration = QuantityValue::new(2.0, "s", 0.1).unwrap();

    let err = distance.add(&duration).unwrap_err();
    assert_eq!(
        err,
        QuantityError::IncompatibleDimensions {
            op: "add".to_string(),
            lhs: "m".to_string(),
            rhs: "s".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Cannot add values with different quantity dimensions: 'm' and 's'"
    );
}

#[test]
fn test_decay_factor_requires_dimensionless_exponent() {
    let rate = QuantityValue::new(0.5, "s^-1", 0.01).unwrap();
    let elapsed = QuantityValue::new(2.0, "s", 0.0).unwrap();

    let exponent = rate.multiply(&elapsed).unwrap().negate();
    assert!(exponent.is_dimensionless());
    let factor = exponent.exp().unwrap();
    assert!((factor.number() - (-1.0f64).exp()).abs() < 1e-12);
    assert!((factor.standard_uncertainty() - 0.02 * (-1.0f64).exp()).abs() < 1e-12);

    assert!(rate.exp().is_err());
}

#[test]
fn test_exponent_overflow_surfaces_as_error() {
    for reference in ["m^1/65536 m^1/65537", "m^-2147483648/-1"] {
        let err = QuantityValue::new(1.0, reference, 0.0).unwrap_err();
        assert!(matches!(err, QuantityError::InvalidReference { .. }));
    }

    let a = QuantityValue::new(1.0, "m^1/65536", 0.0).unwrap();
    let b = QuantityValue::new(1.0, "m^1/65537", 0.0).unwrap();
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Exponent out of range in multiply of 'm^1/65536 m^1/65537'"
    );
}
