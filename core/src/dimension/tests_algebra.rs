use super::*;
use proptest::prelude::*;

fn exponent() -> impl Strategy<Value = Exponent> {
    (-6i32..=6, 1i32..=4).prop_map(|(n, d)| Exponent::new(n, d))
}

fn dimension() -> impl Strategy<Value = Dimension> {
    proptest::array::uniform7(exponent()).prop_map(|exponents| Dimension { exponents })
}

fn even_dimension() -> impl Strategy<Value = Dimension> {
    proptest::array::uniform7(-4i32..=4)
        .prop_map(|ns| Dimension { exponents: ns.map(|n| Exponent::from_integer(2 * n)) })
}

proptest! {
    #[test]
    fn multiply_is_associative(a in dimension(), b in dimension(), c in dimension()) {
        let left = a.multiply(&b.multiply(&c).unwrap()).unwrap();
        let right = a.multiply(&b).unwrap().multiply(&c).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn multiply_is_commutative(a in dimension(), b in dimension()) {
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn inverse_cancels(a in dimension()) {
        prop_assert!(a.multiply(&a.invert().unwrap()).unwrap().is_dimensionless());
        prop_assert_eq!(a.divide(&a).unwrap(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn sqrt_squares_back(a in dimension()) {
        let root = a.sqrt().unwrap();
        prop_assert_eq!(root.multiply(&root).unwrap(), a);
    }

    #[test]
    fn sqrt_of_even_dimension_is_integral(a in even_dimension()) {
        prop_assert!(a.sqrt().unwrap().iter().all(|(_, e)| e.is_integer()));
    }

    #[test]
    fn powi_matches_repeated_multiply(a in dimension(), n in 0i32..5) {
        let mut expected = Dimension::DIMENSIONLESS;
        for _ in 0..n {
            expected = expected.multiply(&a).unwrap();
        }
        prop_assert_eq!(a.powi(n).unwrap(), expected);
    }

    #[test]
    fn huge_exponents_never_panic(n in any::<i32>(), d in 1i32..=i32::MAX, k in any::<i32>()) {
        let a = Dimension::LENGTH.with_exponent(BaseQuantity::Length, Exponent::new(n, d));
        let _ = a.multiply(&a);
        let _ = a.invert();
        let _ = a.sqrt();
        let _ = a.powi(k);
    }
}
